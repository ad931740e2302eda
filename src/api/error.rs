//! Outward error pipeline.
//!
//! Every handler failure becomes an HTML error view: a dedicated not-found
//! page for 404s, the internal-error page for everything else. The response
//! carries the error's own status code and the request correlation ID; under
//! the `npmo` flag the internal page also embeds the full cause chain for
//! operator diagnosis.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use tracing::warn;

use super::state::AppState;
use crate::domain::AgentError;

/// A fully rendered error response.
#[derive(Debug)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub html: String,
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            self.html,
        )
            .into_response()
    }
}

impl AppState {
    /// Renders `error` through the error pipeline.
    pub fn error_page(&self, error: &AgentError, correlation_id: &str) -> ErrorPage {
        let code = error.status_code();
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut context = json!({
            "message": error.to_string(),
            "statusCode": code,
            "correlationID": correlation_id,
        });

        let template = if status == StatusCode::NOT_FOUND {
            "errors/not-found"
        } else {
            warn!(correlation_id, error = %error, status = code, "request failed");

            if self.features.enabled("npmo") {
                context["fullStack"] = Value::String(error.cause_chain());
            }

            "errors/internal"
        };

        ErrorPage {
            status,
            html: self.renderer.render(template, &context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::api::state::testing::test_state;

    #[test]
    fn test_not_found_uses_dedicated_view() {
        let state = test_state("http://localhost:0", HashMap::new());
        let page = state.error_page(&AgentError::status(404, "Org not found"), "req-1");

        assert_eq!(page.status, StatusCode::NOT_FOUND);
        assert!(page.html.contains("errors/not-found"));
        assert!(page.html.contains("req-1"));
    }

    #[test]
    fn test_other_errors_use_internal_view() {
        let state = test_state("http://localhost:0", HashMap::new());
        let page = state.error_page(&AgentError::status(409, "already in use"), "req-2");

        assert_eq!(page.status, StatusCode::CONFLICT);
        assert!(page.html.contains("errors/internal"));
        assert!(!page.html.contains("fullStack"));
    }

    #[test]
    fn test_npmo_embeds_cause_chain() {
        let state = test_state(
            "http://localhost:0",
            HashMap::from([("npmo".to_string(), true)]),
        );

        let error = AgentError::context(
            "trial signup failed",
            AgentError::transport("connection reset"),
        );
        let page = state.error_page(&error, "req-3");

        assert_eq!(page.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(page.html.contains("fullStack"));
        assert!(page.html.contains("caused by: transport error: connection reset"));
    }

    #[tokio::test]
    async fn test_response_has_html_charset() {
        let state = test_state("http://localhost:0", HashMap::new());
        let response = state
            .error_page(&AgentError::validation("bad input"), "req-4")
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
