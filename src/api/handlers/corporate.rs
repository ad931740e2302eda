//! Corporate content page handlers.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::api::extract::CorrelationId;
use crate::api::state::AppState;

/// GET /pages/{name}
pub async fn show_static_page(
    State(state): State<AppState>,
    CorrelationId(correlation_id): CorrelationId,
    Path(name): Path<String>,
) -> Response {
    match state.corporate.static_page(&name).await {
        Ok(content) => state.render_page(
            "corporate/page",
            &json!({ "name": name, "content": content }),
        ),
        Err(err) => state.error_page(&err, &correlation_id).into_response(),
    }
}

/// GET /policies/{name}
pub async fn show_policy_page(
    State(state): State<AppState>,
    CorrelationId(correlation_id): CorrelationId,
    Path(name): Path<String>,
) -> Response {
    match state.corporate.policy_page(&name).await {
        Ok(content) => state.render_page(
            "corporate/policy",
            &json!({ "name": name, "content": content }),
        ),
        Err(err) => state.error_page(&err, &correlation_id).into_response(),
    }
}
