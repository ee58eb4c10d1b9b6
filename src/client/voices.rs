//! Voice library operations.

use tracing::{debug, info};

use crate::client::ElevenLabsClient;
use crate::transport::{HttpRequest, Method, AUTH_HEADER};
use crate::types::{Voice, VoiceAddRequest, VoiceListResponse};
use crate::{Error, ErrorContext, Result};

impl ElevenLabsClient {
    /// Voices available to the account, in the order the API lists them.
    ///
    /// Records without a string `voice_id` are skipped. A body without a
    /// `voices` array is [`Error::MalformedResponse`].
    pub async fn list_voices(&self) -> Result<Vec<Voice>> {
        let credential = self.credential()?;
        let url = self.endpoint(&["voices"])?;
        let request =
            HttpRequest::new(Method::Get, url).header(AUTH_HEADER, credential.expose());

        let response = self.execute("voices", request).await?;
        let listing: VoiceListResponse = serde_json::from_slice(&response.body).map_err(|e| {
            Error::malformed_with_context(
                "could not parse voices",
                ErrorContext::new()
                    .with_field_path("voices")
                    .with_details(e.to_string())
                    .with_source("voices"),
            )
        })?;

        let total = listing.voices.len();
        let voices = listing.into_voices();
        if voices.len() < total {
            debug!("Skipped {} voice records without voice_id", total - voices.len());
        }
        Ok(voices)
    }

    /// IDs of [`ElevenLabsClient::list_voices`]. An empty list is not an error.
    pub async fn get_voice_ids(&self) -> Result<Vec<String>> {
        let voices = self.list_voices().await?;
        Ok(voices.into_iter().map(|v| v.voice_id).collect())
    }

    /// Copy the shared voice `voice_id` published by `public_user_id` into the
    /// account's library under `new_name`.
    pub async fn add_shared_voice(
        &self,
        public_user_id: &str,
        voice_id: &str,
        new_name: &str,
    ) -> Result<()> {
        let credential = self.credential()?;
        let body = Self::json_body(&VoiceAddRequest { new_name })?;
        let url = self.endpoint(&["voices", "add", public_user_id, voice_id])?;

        info!(
            "Adding shared voice {} from user {} as {:?}",
            voice_id, public_user_id, new_name
        );

        self.execute("add_shared_voice", self.post_json(url, credential, body))
            .await?;
        Ok(())
    }
}
