//! Synthesized audio.

use bytes::Bytes;

/// Encoded audio exactly as returned by the API (MP3 for the endpoints this
/// crate calls). The bytes are never inspected or transcoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    data: Bytes,
}

impl AudioPayload {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn mime_type(&self) -> &'static str {
        "audio/mpeg"
    }

    pub fn to_base64(&self) -> String {
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &self.data)
    }
}

impl AsRef<[u8]> for AudioPayload {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<AudioPayload> for Vec<u8> {
    fn from(payload: AudioPayload) -> Self {
        payload.data.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_is_verbatim() {
        let raw: &[u8] = &[0xff, 0xfb, 0x90, 0x00, 0x00];
        let payload = AudioPayload::new(raw.to_vec());
        assert_eq!(payload.as_bytes(), raw);
        assert_eq!(payload.len(), 5);
        assert_eq!(Vec::<u8>::from(payload), raw.to_vec());
    }

    #[test]
    fn test_to_base64() {
        let payload = AudioPayload::new(&b"ID3"[..]);
        assert_eq!(payload.to_base64(), "SUQz");
        assert_eq!(payload.mime_type(), "audio/mpeg");
    }
}
