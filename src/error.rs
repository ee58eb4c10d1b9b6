use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context attached to configuration and decoding failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "voices", "base_url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Operation that produced the error (e.g., "voices", "text_to_speech")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned by every client operation.
///
/// Nothing is retried or swallowed: each variant reaches the caller as-is, with
/// the vendor's status code and body preserved on [`Error::Api`].
#[derive(Debug, Error)]
pub enum Error {
    /// No API key was configured. Fatal to the single call only.
    #[error("Missing credential: set ELEVENLABS_API_KEY or pass an API key to the client builder")]
    MissingCredential,

    #[error("Request encoding error: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    /// The vendor answered with a non-success status.
    #[error("ElevenLabs API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed response: {message}{}", format_context(.context))]
    MalformedResponse {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn malformed_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::MalformedResponse {
            message: msg.into(),
            context,
        }
    }

    /// HTTP status reported by the vendor, if this is an [`Error::Api`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::MalformedResponse { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_keeps_body() {
        let err = Error::Api {
            status: 401,
            body: r#"{"detail":"invalid_api_key"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(401));
        assert_eq!(
            err.to_string(),
            r#"ElevenLabs API error: HTTP 401: {"detail":"invalid_api_key"}"#
        );
    }

    #[test]
    fn test_malformed_display_with_context() {
        let err = Error::malformed_with_context(
            "missing voices array",
            ErrorContext::new()
                .with_field_path("voices")
                .with_source("voices"),
        );
        assert_eq!(
            err.to_string(),
            "Malformed response: missing voices array (field: voices, source: voices)"
        );
        assert_eq!(err.context().and_then(|c| c.field_path.as_deref()), Some("voices"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_configuration_without_context() {
        let err = Error::configuration("bad base url");
        assert_eq!(err.to_string(), "Configuration error: bad base url");
    }
}
