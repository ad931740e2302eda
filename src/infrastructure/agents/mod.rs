//! Per-resource client agents and the status-to-error mapper they share.
//!
//! An agent method is one request descriptor sent through the client adapter,
//! followed by [`map_response`] with that endpoint's status table.

pub mod customer;
pub mod download;
pub mod org;
pub mod package;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::AgentError;
use crate::infrastructure::http_client::RawResponse;

pub use customer::CustomerAgent;
pub use download::DownloadAgent;
pub use org::OrgAgent;
pub use package::PackageAgent;

/// Per-endpoint table of `{status -> message}` overrides.
#[derive(Debug, Default)]
pub struct StatusTable {
    entries: Vec<(u16, String)>,
}

impl StatusTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, status: u16, message: impl Into<String>) -> Self {
        self.entries.push((status, message.into()));
        self
    }

    fn lookup(&self, status: u16) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, m)| m.as_str())
    }
}

/// Maps a completed exchange to its domain outcome.
///
/// Explicit table entries always win over the generic >=400 fallback, so an
/// endpoint with its own 409 message never produces the raw-body error.
/// Transport failures never reach this function; they are propagated
/// unchanged by the client adapter.
pub fn map_response(response: RawResponse, table: &StatusTable) -> Result<Value, AgentError> {
    if let Some(message) = table.lookup(response.status) {
        return Err(AgentError::status(response.status, message));
    }

    if response.status >= 400 {
        return Err(AgentError::status(response.status, body_text(&response.body)));
    }

    Ok(response.body)
}

/// The raw body as error text: plain strings verbatim, JSON re-serialized.
fn body_text(body: &Value) -> String {
    match body {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Deserializes a mapped success body. Undecodable bodies surface as
/// transport errors, like any other broken exchange with the backend.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, AgentError> {
    serde_json::from_value(body)
        .map_err(|e| AgentError::transport(format!("failed to decode response body: {e}")))
}
