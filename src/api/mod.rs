//! API layer - HTTP endpoints, error pipeline and view seam.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod health;
pub mod router;
pub mod state;
pub mod views;

pub use error::ErrorPage;
pub use router::create_router;
pub use state::AppState;
pub use views::{BasicRenderer, ViewRenderer};
