//! Customer agent: enterprise customer and trial records on the license
//! service.

use super::{decode, map_response, StatusTable};
use crate::domain::{AgentError, Customer, Trial};
use crate::infrastructure::http_client::{ApiRequest, HttpClientTrait};

#[derive(Debug, Clone)]
pub struct CustomerAgent<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> CustomerAgent<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// GET /customer/{email}. A 404 means "no such customer", which callers
    /// turn into their own wording, so it is None rather than an error.
    pub async fn get_by_id(&self, email: &str) -> Result<Option<Customer>, AgentError> {
        let request = ApiRequest::get(format!("{}/customer/{}", self.base_url, email));
        let response = self.client.execute(request).await?;

        if response.status == 404 {
            return Ok(None);
        }

        let body = map_response(response, &StatusTable::new())?;
        decode(body).map(Some)
    }

    /// PUT /trial: creates an on-site trial for an existing customer.
    pub async fn create_on_site_trial(&self, customer: &Customer) -> Result<Trial, AgentError> {
        let request = ApiRequest::put(format!("{}/trial", self.base_url))
            .body(serde_json::to_value(customer).unwrap_or_default());

        let body = map_response(self.client.execute(request).await?, &StatusTable::new())?;
        decode(body)
    }
}
