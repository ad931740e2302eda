//! Registry website front-end.
//!
//! Thin request handlers and REST client agents: each handler validates a
//! request, fans out to backend services through the client adapter, maps
//! status codes into the typed error domain, and renders a view or forwards
//! the error to the outward pipeline.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use api::{AppState, BasicRenderer};
use config::AppConfig;
use infrastructure::{HttpClient, LogOnlyEmailSender};

/// Wires the shared state from a loaded configuration: one reqwest-backed
/// client behind the adapter trait, the default renderer, and the log-only
/// email seam.
pub fn create_app_state(config: AppConfig) -> AppState {
    AppState::new(
        config,
        Arc::new(HttpClient::new()),
        Arc::new(BasicRenderer),
        Arc::new(LogOnlyEmailSender),
    )
}
