//! Request models for the summary-audio proxy.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The analysis object posted by the extension. All fields are optional
/// and unknown fields are dropped, so serializing the parsed payload
/// yields exactly the recognized keys that were present in the input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_score: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_profile: Option<Value>,
}

impl AnalysisPayload {
    /// Lenient parse: a missing or malformed body becomes an empty
    /// payload, deferring the real failure to the empty-payload check.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.headline.is_none()
            && self.trust_score.is_none()
            && self.flags.is_none()
            && self.site_profile.is_none()
    }
}

/// Hard cutoff at `max_chars` characters; not sentence-aware, but never
/// splits a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
