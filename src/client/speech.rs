//! Sound generation and text-to-speech.

use tracing::info;

use crate::client::ElevenLabsClient;
use crate::types::{AudioPayload, SoundEffectRequest, SpeechRequest};
use crate::Result;

impl ElevenLabsClient {
    /// Generate a sound effect described by `text`.
    ///
    /// `text` is sent as-is; the API decides whether an empty prompt is valid.
    pub async fn generate_sound_effect(&self, text: &str) -> Result<AudioPayload> {
        let credential = self.credential()?;
        let body = Self::json_body(&SoundEffectRequest { text })?;
        let url = self.endpoint(&["sound-generation"])?;

        info!("Generating sound effect: {} chars", text.chars().count());

        let response = self
            .execute("sound_generation", self.post_json(url, credential, body))
            .await?;
        Ok(AudioPayload::new(response.body))
    }

    /// Synthesize `text` with the voice `voice_id`. Returns MP3 audio.
    pub async fn text_to_speech(&self, voice_id: &str, text: &str) -> Result<AudioPayload> {
        let credential = self.credential()?;
        let body = Self::json_body(&SpeechRequest {
            text,
            model_id: &self.model_id,
        })?;
        let url = self.endpoint(&["text-to-speech", voice_id])?;

        info!(
            "Synthesizing speech: {} chars, voice {}, model {}",
            text.chars().count(),
            voice_id,
            self.model_id
        );

        let request = self
            .post_json(url, credential, body)
            .header("Accept", "audio/mpeg");
        let response = self.execute("text_to_speech", request).await?;

        info!("Synthesis complete: {} bytes", response.body.len());
        Ok(AudioPayload::new(response.body))
    }
}
