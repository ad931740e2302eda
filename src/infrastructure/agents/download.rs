//! Download agent: registry-wide download totals.

use super::{decode, map_response, StatusTable};
use crate::domain::{AgentError, DownloadTotals};
use crate::infrastructure::http_client::{ApiRequest, HttpClientTrait};

/// Talks to the downloads service; no bearer, the totals are public.
#[derive(Debug, Clone)]
pub struct DownloadAgent<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> DownloadAgent<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// GET /totals: day, week and month counts in one response.
    pub async fn get_all(&self) -> Result<DownloadTotals, AgentError> {
        let request = ApiRequest::get(format!("{}/totals", self.base_url));
        let body = map_response(self.client.execute(request).await?, &StatusTable::new())?;
        decode(body)
    }
}
