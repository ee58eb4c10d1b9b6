//! Client configuration and credential handling.

use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";
pub const DEFAULT_MODEL_ID: &str = "eleven_flash_v2_5";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";
pub const BASE_URL_ENV: &str = "ELEVENLABS_BASE_URL";
pub const TIMEOUT_ENV: &str = "ELEVENLABS_TIMEOUT_SECS";

/// ElevenLabs API key. Never empty; `Debug` does not print the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for an empty (or whitespace-only) key.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absence is reported per call as `Error::MissingCredential`.
    pub api_key: Option<Credential>,
    pub base_url: String,
    /// Model used for text-to-speech requests.
    pub model_id: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Credential::new(api_key),
            ..Self::default()
        }
    }

    /// Read `ELEVENLABS_API_KEY`, `ELEVENLABS_BASE_URL` and
    /// `ELEVENLABS_TIMEOUT_SECS`. Unset or unparseable values fall back to the
    /// defaults; a missing key is not an error here.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_key: lookup(API_KEY_ENV).and_then(Credential::new),
            base_url: lookup(BASE_URL_ENV)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.base_url),
            model_id: defaults.model_id,
            timeout: lookup(TIMEOUT_ENV)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
