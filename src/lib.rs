//! # elevenlabs-client
//!
//! Async client for the ElevenLabs HTTP API: sound-effect generation,
//! text-to-speech, voice listing and adding shared voices to an account.
//!
//! Every operation is a single request/response exchange. There are no
//! retries, no streaming and no caching; errors carry the vendor's status code
//! and body so callers can decide what to do.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use elevenlabs_client::ElevenLabsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads ELEVENLABS_API_KEY (and optional ELEVENLABS_BASE_URL / ELEVENLABS_TIMEOUT_SECS)
//!     let client = ElevenLabsClient::from_env()?;
//!
//!     let voices = client.get_voice_ids().await?;
//!     if let Some(voice) = voices.first() {
//!         let audio = client.text_to_speech(voice, "Hello, world!").await?;
//!         std::fs::write("hello.mp3", audio.as_bytes())?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`ElevenLabsClient`] and its builder |
//! | [`config`] | Credential and environment configuration |
//! | [`transport`] | HTTP transport trait and reqwest implementation |
//! | [`types`] | Request bodies, voice records, audio payloads |

pub mod client;
pub mod config;
pub mod transport;
pub mod types;

pub use client::{ElevenLabsClient, ElevenLabsClientBuilder};
pub use config::{ClientConfig, Credential};
pub use transport::{HttpTransport, Transport, TransportError};
pub use types::{AudioPayload, Voice};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
