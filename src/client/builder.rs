use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::client::ElevenLabsClient;
use crate::config::{ClientConfig, Credential};
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};

/// Builder for [`ElevenLabsClient`].
///
/// Starts from [`ClientConfig::default`] (no credential) or, with
/// [`ElevenLabsClientBuilder::from_env`], from the process environment.
pub struct ElevenLabsClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl ElevenLabsClientBuilder {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn from_env() -> Self {
        Self::with_config(ClientConfig::from_env())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            transport: None,
        }
    }

    /// An empty key leaves the client without a credential.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Credential::new(api_key);
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.config.model_id = model_id.into();
        self
    }

    /// Request timeout for the default HTTP transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Replace the reqwest-backed transport. The configured timeout is then
    /// the transport's concern.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<ElevenLabsClient> {
        let base_url = parse_base_url(&self.config.base_url)?;
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(self.config.timeout).map_err(|e| {
                Error::configuration_with_context(
                    e.to_string(),
                    ErrorContext::new().with_source("transport"),
                )
            })?),
        };
        Ok(ElevenLabsClient {
            api_key: self.config.api_key,
            base_url,
            model_id: self.config.model_id,
            transport,
        })
    }
}

impl Default for ElevenLabsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let context = || {
        ErrorContext::new()
            .with_field_path("base_url")
            .with_details(raw.to_string())
    };
    let url = Url::parse(raw).map_err(|e| {
        Error::configuration_with_context(format!("Invalid base URL: {}", e), context())
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            "Base URL must be an http(s) URL",
            context(),
        ));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() {
        let client = ElevenLabsClientBuilder::new().build().unwrap();
        assert!(!client.has_credential());
        assert_eq!(client.base_url().as_str(), "https://api.elevenlabs.io/v1");
        assert_eq!(client.model_id(), "eleven_flash_v2_5");
    }

    #[test]
    fn test_build_with_overrides() {
        let client = ElevenLabsClientBuilder::new()
            .api_key("sk_test")
            .base_url("http://127.0.0.1:4010/v1/")
            .model_id("eleven_multilingual_v2")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert!(client.has_credential());
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:4010/v1/");
        assert_eq!(client.model_id(), "eleven_multilingual_v2");
    }

    #[test]
    fn test_empty_api_key_means_no_credential() {
        let client = ElevenLabsClientBuilder::new().api_key("").build().unwrap();
        assert!(!client.has_credential());
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        for bad in ["not a url", "mailto:someone@example.com", "ftp://example.com/v1"] {
            let err = ElevenLabsClientBuilder::new()
                .base_url(bad)
                .build()
                .err()
                .unwrap();
            assert!(
                matches!(err, Error::Configuration { .. }),
                "{} should be rejected, got {:?}",
                bad,
                err
            );
        }
    }
}
