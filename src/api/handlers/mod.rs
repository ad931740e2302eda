//! Request handlers: validate, call agents, render a view or forward the
//! error to the outward pipeline.

pub mod corporate;
pub mod enterprise;
pub mod homepage;
pub mod org;
