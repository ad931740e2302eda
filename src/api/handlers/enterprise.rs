//! Enterprise trial signup.
//!
//! The caller has already agreed to the ULA (verified upstream): notify the
//! hubspot form, confirm the customer record matches, create the trial, and
//! hand the verification email to the delivery seam. Every step wraps its
//! failure with context so the operator view shows the whole chain.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::api::extract::{client_ip, CorrelationId};
use crate::api::state::AppState;
use crate::domain::AgentError;
use crate::infrastructure::UlaSignup;

const SIGNUP_PAGE_NAME: &str = "enterprise-trial-signup";
const VERIFICATION_TEMPLATE: &str = "npme-trial-verification";

#[derive(Debug, Deserialize, Validate)]
pub struct TrialSignupForm {
    #[validate(email)]
    pub customer_email: String,
    pub customer_id: String,
}

/// POST /enterprise/trial-signup
pub async fn trial_signup(
    State(state): State<AppState>,
    CorrelationId(correlation_id): CorrelationId,
    headers: HeaderMap,
    Form(payload): Form<TrialSignupForm>,
) -> Response {
    if let Err(err) = payload.validate() {
        let error = AgentError::validation(err.to_string());
        return state.error_page(&error, &correlation_id).into_response();
    }

    let ip_address = client_ip(&headers);

    match run_signup(&state, &payload, ip_address).await {
        Ok(()) => state.render_page("enterprise/thanks", &json!({})),
        Err(err) => state.error_page(&err, &correlation_id).into_response(),
    }
}

async fn run_signup(
    state: &AppState,
    payload: &TrialSignupForm,
    ip_address: String,
) -> Result<(), AgentError> {
    state
        .hubspot
        .notify_ula_agreement(&UlaSignup {
            email: payload.customer_email.clone(),
            page_name: SIGNUP_PAGE_NAME.to_string(),
            ip_address,
        })
        .await
        .map_err(|e| AgentError::context("could not hit ULA notification form on hubspot", e))?;

    let customer = state
        .customer_agent()
        .get_by_id(&payload.customer_email)
        .await
        .map_err(|e| AgentError::context("unknown problem with customer record", e))?
        .ok_or_else(|| {
            AgentError::validation(format!(
                "unable to locate customer '{}'",
                payload.customer_email
            ))
        })?;

    if customer.id.to_string() != payload.customer_id {
        return Err(AgentError::validation(format!(
            "unable to verify customer record '{}'",
            payload.customer_email
        )));
    }

    let trial = state
        .customer_agent()
        .create_on_site_trial(&customer)
        .await
        .map_err(|e| {
            AgentError::context(format!("error creating trial for {}", customer.id), e)
        })?;

    state
        .email
        .send(
            VERIFICATION_TEMPLATE,
            &json!({
                "name": customer.name,
                "email": customer.email,
                "verification_key": trial.verification_key,
            }),
        )
        .await
        .map_err(|e| {
            AgentError::context(
                format!("unable to send verification email to {}", customer.email),
                e,
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::state::testing::test_state;
    use crate::infrastructure::email::MockEmailSender;

    fn form() -> TrialSignupForm {
        TrialSignupForm {
            customer_email: "a@x.com".to_string(),
            customer_id: "42".to_string(),
        }
    }

    async fn mount_happy_path(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/hubspot/ula"))
            .respond_with(ResponseTemplate::new(204))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/license/customer/a@x.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 42, "name": "Ada", "email": "a@x.com"
            })))
            .mount(server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/license/trial"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "verification_key": "key-123" })),
            )
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_signup_sends_verification_email() {
        let server = MockServer::start().await;
        mount_happy_path(&server).await;

        let mut email = MockEmailSender::new();
        email
            .expect_send()
            .withf(|template, context| {
                template == VERIFICATION_TEMPLATE
                    && context["verification_key"] == json!("key-123")
                    && context["email"] == json!("a@x.com")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut state = test_state(&server.uri(), HashMap::new());
        state.email = Arc::new(email);

        run_signup(&state, &form(), "203.0.113.9".to_string())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_customer_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hubspot/ula"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/license/customer/a@x.com"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let state = test_state(&server.uri(), HashMap::new());
        let err = run_signup(&state, &form(), "203.0.113.9".to_string())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "unable to locate customer 'a@x.com'");
    }

    #[tokio::test]
    async fn test_customer_id_mismatch_is_rejected() {
        let server = MockServer::start().await;
        mount_happy_path(&server).await;

        let state = test_state(&server.uri(), HashMap::new());
        let payload = TrialSignupForm {
            customer_email: "a@x.com".to_string(),
            customer_id: "999".to_string(),
        };

        let err = run_signup(&state, &payload, "203.0.113.9".to_string())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "unable to verify customer record 'a@x.com'");
    }

    #[tokio::test]
    async fn test_hubspot_failure_wraps_cause() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hubspot/ula"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!("form down")))
            .mount(&server)
            .await;

        let state = test_state(&server.uri(), HashMap::new());
        let err = run_signup(&state, &form(), "203.0.113.9".to_string())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "could not hit ULA notification form on hubspot"
        );
        assert!(err.cause_chain().contains("form down"));
    }

    #[test]
    fn test_form_validation_rejects_bad_email() {
        let payload = TrialSignupForm {
            customer_email: "not-an-email".to_string(),
            customer_id: "42".to_string(),
        };
        assert!(payload.validate().is_err());
    }
}
