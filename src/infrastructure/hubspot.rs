//! Hubspot form notifications for the enterprise signup funnel.

use serde_json::json;

use crate::domain::AgentError;
use crate::infrastructure::agents::{map_response, StatusTable};
use crate::infrastructure::http_client::{ApiRequest, HttpClientTrait};

/// Context posted alongside an agreed ULA.
#[derive(Debug, Clone)]
pub struct UlaSignup {
    pub email: String,
    pub page_name: String,
    pub ip_address: String,
}

#[derive(Debug, Clone)]
pub struct HubspotForms<C: HttpClientTrait> {
    client: C,
    ula_form_url: String,
}

impl<C: HttpClientTrait> HubspotForms<C> {
    pub fn new(client: C, ula_form_url: impl Into<String>) -> Self {
        Self {
            client,
            ula_form_url: ula_form_url.into(),
        }
    }

    /// POST the agreed-ULA payload to the configured form endpoint.
    pub async fn notify_ula_agreement(&self, signup: &UlaSignup) -> Result<(), AgentError> {
        let request = ApiRequest::post(&self.ula_form_url).body(json!({
            "hs_context": {
                "pageName": signup.page_name,
                "ipAddress": signup.ip_address,
            },
            "email": signup.email,
        }));

        map_response(self.client.execute(request).await?, &StatusTable::new()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::infrastructure::http_client::HttpClient;

    #[tokio::test]
    async fn test_notify_posts_hs_context() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hubspot/ula"))
            .and(body_json(json!({
                "hs_context": {
                    "pageName": "enterprise-trial-signup",
                    "ipAddress": "203.0.113.9",
                },
                "email": "a@x.com",
            })))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let forms = HubspotForms::new(
            HttpClient::new(),
            format!("{}/hubspot/ula", server.uri()),
        );

        forms
            .notify_ula_agreement(&UlaSignup {
                email: "a@x.com".to_string(),
                page_name: "enterprise-trial-signup".to_string(),
                ip_address: "203.0.113.9".to_string(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_notify_failure_surfaces_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hubspot/ula"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!("form rejected")))
            .mount(&server)
            .await;

        let forms = HubspotForms::new(
            HttpClient::new(),
            format!("{}/hubspot/ula", server.uri()),
        );

        let err = forms
            .notify_ula_agreement(&UlaSignup {
                email: "a@x.com".to_string(),
                page_name: "enterprise-trial-signup".to_string(),
                ip_address: "203.0.113.9".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 500);
    }
}
