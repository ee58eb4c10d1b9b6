//! Voice listing types.

use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /voices`.
///
/// Only the top-level shape is strict: `voices` must be an array. Its elements
/// are kept raw and decoded one by one with [`Voice::from_record`].
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceListResponse {
    pub voices: Vec<Value>,
}

impl VoiceListResponse {
    /// Well-formed voices in response order; records without a string
    /// `voice_id` are skipped.
    pub fn into_voices(self) -> Vec<Voice> {
        self.voices.iter().filter_map(Voice::from_record).collect()
    }
}

/// A vendor-side speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub voice_id: String,
    pub name: Option<String>,
    /// e.g. "premade", "cloned", "professional"
    pub category: Option<String>,
}

impl Voice {
    pub fn from_record(record: &Value) -> Option<Self> {
        let obj = record.as_object()?;
        let voice_id = obj.get("voice_id")?.as_str()?.to_string();
        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(String::from);
        Some(Self {
            voice_id,
            name: text("name"),
            category: text("category"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_skips_records_without_voice_id() {
        let resp: VoiceListResponse = serde_json::from_value(json!({
            "voices": [
                {"voice_id": "a", "name": "Rachel", "category": "premade"},
                {"not_id": "x"},
                "just a string",
                {"voice_id": 42},
                {"voice_id": "b", "name": null, "labels": {"accent": "british"}}
            ]
        }))
        .unwrap();

        let voices = resp.into_voices();
        assert_eq!(voices.len(), 2);
        assert_eq!(voices[0].voice_id, "a");
        assert_eq!(voices[0].name.as_deref(), Some("Rachel"));
        assert_eq!(voices[0].category.as_deref(), Some("premade"));
        assert_eq!(voices[1].voice_id, "b");
        assert_eq!(voices[1].name, None);
    }

    #[test]
    fn test_rejects_missing_or_non_array_voices() {
        assert!(serde_json::from_str::<VoiceListResponse>("{}").is_err());
        assert!(serde_json::from_str::<VoiceListResponse>(r#"{"voices": {}}"#).is_err());
        assert!(serde_json::from_str::<VoiceListResponse>(r#"{"voices": null}"#).is_err());
    }
}
