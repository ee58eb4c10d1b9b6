pub mod audio;
pub mod request;
pub mod voice;

pub use audio::AudioPayload;
pub use request::{SoundEffectRequest, SpeechRequest, VoiceAddRequest};
pub use voice::{Voice, VoiceListResponse};
