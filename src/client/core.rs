use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::client::ElevenLabsClientBuilder;
use crate::config::{ClientConfig, Credential};
use crate::transport::{HttpRequest, HttpResponse, Method, Transport, AUTH_HEADER};
use crate::{Error, ErrorContext, Result};


/// Client for the ElevenLabs HTTP API.
///
/// Holds only immutable configuration and a shared transport, so one instance
/// can serve concurrent tasks.
pub struct ElevenLabsClient {
    pub(crate) api_key: Option<Credential>,
    pub(crate) base_url: Url,
    pub(crate) model_id: String,
    pub(crate) transport: Arc<dyn Transport>,
}

impl ElevenLabsClient {
    pub fn builder() -> ElevenLabsClientBuilder {
        ElevenLabsClientBuilder::new()
    }

    pub fn new(config: ClientConfig) -> Result<Self> {
        ElevenLabsClientBuilder::with_config(config).build()
    }

    /// Client configured from `ELEVENLABS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        ElevenLabsClientBuilder::from_env().build()
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub(crate) fn credential(&self) -> Result<&Credential> {
        self.api_key.as_ref().ok_or(Error::MissingCredential)
    }

    /// Base URL with `segments` appended, each one percent-encoded.
    ///
    /// Empty, `.` and `..` segments are rejected: URL normalization would
    /// drop them (even as `%2E`) and the request would hit another endpoint.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(Error::configuration_with_context(
                "Invalid path segment",
                ErrorContext::new()
                    .with_field_path("path")
                    .with_details(format!("{:?} cannot be used as an identifier", bad)),
            ));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::configuration_with_context(
                    "Base URL cannot carry a path",
                    ErrorContext::new().with_field_path("base_url"),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn json_body<T: Serialize>(body: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(body).map_err(Error::Encoding)
    }

    /// Send `request` and require HTTP 200.
    ///
    /// The transport result is resolved before the status is looked at.
    pub(crate) async fn execute(
        &self,
        operation: &'static str,
        request: HttpRequest,
    ) -> Result<HttpResponse> {
        let response = self.transport.send(request).await.map_err(|e| {
            warn!(operation, error = %e, "ElevenLabs request failed");
            Error::Transport(e)
        })?;

        debug!(
            operation,
            status = response.status,
            bytes = response.body.len(),
            "ElevenLabs response"
        );

        if !response.is_ok() {
            let body = response.text();
            warn!(operation, status = response.status, body = %body, "ElevenLabs API error");
            return Err(Error::Api {
                status: response.status,
                body,
            });
        }
        Ok(response)
    }

    pub(crate) fn post_json(&self, url: Url, credential: &Credential, body: Vec<u8>) -> HttpRequest {
        HttpRequest::new(Method::Post, url)
            .header("Content-Type", "application/json")
            .header(AUTH_HEADER, credential.expose())
            .body(body)
    }
}

impl std::fmt::Debug for ElevenLabsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevenLabsClient")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url.as_str())
            .field("model_id", &self.model_id)
            .finish_non_exhaustive()
    }
}
