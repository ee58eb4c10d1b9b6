//! ElevenLabs API client.
//!
//! Each operation is one request/response exchange: check the credential,
//! encode the body, send, validate the status, decode. No retries.

mod builder;
mod core;
mod speech;
mod voices;

#[cfg(test)]
mod testing;

pub use self::builder::ElevenLabsClientBuilder;
pub use self::core::ElevenLabsClient;
