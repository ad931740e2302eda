//! Email-sending seam.
//!
//! Delivery is handled by an external service; this crate only hands a
//! template name and context across the boundary.

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::domain::AgentError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, template: &str, context: &Value) -> Result<(), AgentError>;
}

/// Default sender: records the send and succeeds. Deployments wire a real
/// delivery adapter here.
#[derive(Debug, Default)]
pub struct LogOnlyEmailSender;

#[async_trait]
impl EmailSender for LogOnlyEmailSender {
    async fn send(&self, template: &str, context: &Value) -> Result<(), AgentError> {
        info!(
            template,
            recipient = context.get("email").and_then(serde_json::Value::as_str).unwrap_or("unknown"),
            "email handed off for delivery"
        );
        Ok(())
    }
}
