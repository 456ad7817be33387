use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

/// Gemini model used for summary generation.
pub const TEXT_MODEL: &str = "gemini-2.5-flash";

/// ElevenLabs model used for speech synthesis.
pub const SPEECH_MODEL: &str = "eleven_turbo_v2_5";

/// Default ElevenLabs voice (Rachel).
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

/// Hard cutoff applied to the summary before speech synthesis.
pub const MAX_SPEECH_CHARS: usize = 4500;

/// Timeout applied to both upstream calls.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable process configuration, loaded once at startup and handed to
/// handlers through application state. A missing credential is not a
/// startup error; it is reported per request as a 500.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub common: core_config::Config,
    pub gemini_api_key: Option<String>,
    pub elevenlabs_api_key: Option<String>,
    pub voice_id: String,
}

impl ProxyConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(ProxyConfig {
            common,
            gemini_api_key: non_empty_env("GEMINI_API_KEY"),
            elevenlabs_api_key: non_empty_env("ELEVENLABS_API_KEY"),
            voice_id: non_empty_env("VOICE_ID").unwrap_or_else(|| DEFAULT_VOICE_ID.to_string()),
        })
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
