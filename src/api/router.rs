use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{corporate, enterprise, homepage, org};
use super::health;
use super::state::AppState;

/// Create the application router.
///
/// The request-id layer is outermost so every request carries a correlation
/// ID before tracing and the handlers see it.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(homepage::show_homepage))
        .route("/org", put(org::create_org))
        .route(
            "/org/{scope}",
            get(org::show_org)
                .post(org::update_org)
                .delete(org::delete_org),
        )
        .route("/org/{scope}/user", put(org::add_user))
        .route("/org/{scope}/user/{user_id}", delete(org::remove_user))
        .route("/org/{scope}/team", put(org::add_team))
        .route("/pages/{name}", get(corporate::show_static_page))
        .route("/policies/{name}", get(corporate::show_policy_page))
        .route("/enterprise/trial-signup", post(enterprise::trial_signup))
        .route("/-/health", get(health::health_check))
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::state::testing::test_state;

    #[tokio::test]
    async fn test_health_endpoint() {
        let router = create_router(test_state("http://localhost:0", HashMap::new()));

        let response = router
            .oneshot(Request::get("/-/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_show_org_without_bearer_renders_error_view() {
        let router = create_router(test_state("http://localhost:0", HashMap::new()));

        let response = router
            .oneshot(Request::get("/org/bigco").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn test_show_org_renders_aggregate_view() {
        let server = MockServer::start().await;
        for (p, body) in [
            ("/org/bigco", json!({ "name": "bigco" })),
            ("/org/bigco/user", json!({ "count": 0, "items": [] })),
            ("/org/bigco/package", json!({ "count": 0, "items": [] })),
            ("/org/bigco/team", json!({ "count": 0, "items": [] })),
        ] {
            Mock::given(method("GET"))
                .and(path(p))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .mount(&server)
                .await;
        }

        let router = create_router(test_state(&server.uri(), HashMap::new()));

        let response = router
            .oneshot(
                Request::get("/org/bigco")
                    .header("bearer", "token-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("org/show"));
        assert!(html.contains("bigco"));
    }

    #[tokio::test]
    async fn test_missing_org_renders_not_found_view() {
        let server = MockServer::start().await;
        for p in [
            "/org/ghost",
            "/org/ghost/user",
            "/org/ghost/package",
            "/org/ghost/team",
        ] {
            Mock::given(method("GET"))
                .and(path(p))
                .respond_with(ResponseTemplate::new(404))
                .mount(&server)
                .await;
        }

        let router = create_router(test_state(&server.uri(), HashMap::new()));

        let response = router
            .oneshot(
                Request::get("/org/ghost")
                    .header("bearer", "token-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&body).contains("errors/not-found"));
    }
}
