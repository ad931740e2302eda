use thiserror::Error;

/// Errors surfaced by agents and aggregators.
///
/// Every error that travels past the status mapper carries enough information
/// to pick an HTTP response code via [`AgentError::status_code`].
#[derive(Debug, Error)]
pub enum AgentError {
    /// Network or connection failure before a response was received.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// Backend responded with a status the endpoint maps to a domain failure.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Malformed input caught before any network call.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// A failure wrapped with the caller's context, preserving the cause.
    #[error("{context}")]
    Context {
        context: String,
        #[source]
        source: Box<AgentError>,
    },
}

impl AgentError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn context(context: impl Into<String>, source: AgentError) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// The HTTP status code this error should surface as.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Status { status, .. } => *status,
            Self::Validation { .. } => 400,
            Self::Context { source, .. } => source.status_code(),
            Self::Transport { .. } => 500,
        }
    }

    /// Renders the full cause chain, one cause per line.
    ///
    /// Used by the internal error view when the `npmo` flag is on so
    /// operators see the wrapped context of multi-step flows.
    pub fn cause_chain(&self) -> String {
        let mut out = self.to_string();
        let mut source: Option<&(dyn std::error::Error + 'static)> =
            std::error::Error::source(self);

        while let Some(cause) = source {
            out.push_str("\ncaused by: ");
            out.push_str(&cause.to_string());
            source = cause.source();
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let error = AgentError::status(404, "Org not found");
        assert_eq!(error.to_string(), "Org not found");
        assert_eq!(error.status_code(), 404);
    }

    #[test]
    fn test_transport_error_maps_to_500() {
        let error = AgentError::transport("connection refused");
        assert_eq!(error.status_code(), 500);
    }

    #[test]
    fn test_validation_error_maps_to_400() {
        let error = AgentError::validation("name must be a string");
        assert_eq!(error.status_code(), 400);
    }

    #[test]
    fn test_context_inherits_status_code() {
        let inner = AgentError::status(409, "already in use");
        let wrapped = AgentError::context("could not create org", inner);
        assert_eq!(wrapped.status_code(), 409);
        assert_eq!(wrapped.to_string(), "could not create org");
    }

    #[test]
    fn test_cause_chain_walks_sources() {
        let inner = AgentError::transport("connection reset");
        let mid = AgentError::context("unknown problem with customer record", inner);
        let outer = AgentError::context("trial signup failed", mid);

        let chain = outer.cause_chain();
        assert_eq!(
            chain,
            "trial signup failed\ncaused by: unknown problem with customer record\ncaused by: transport error: connection reset"
        );
    }
}
