//! ElevenLabs speech synthesis client.

use super::{ProviderError, SpeechProvider};
use crate::config::UPSTREAM_TIMEOUT;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

const ELEVENLABS_API_BASE: &str = "https://api.elevenlabs.io/v1";

pub struct ElevenLabsClient {
    api_key: String,
    voice_id: String,
    model_id: String,
    client: Client,
}

impl ElevenLabsClient {
    pub fn new(api_key: String, voice_id: String, model_id: String) -> Self {
        let client = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            voice_id,
            model_id,
            client,
        }
    }
}

#[async_trait]
impl SpeechProvider for ElevenLabsClient {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ProviderError> {
        let request = SynthesisRequest {
            text,
            model_id: &self.model_id,
            voice_settings: VoiceSettings {
                stability: 0.5,
                similarity_boost: 0.75,
            },
        };

        tracing::debug!(
            voice = %self.voice_id,
            text_len = text.len(),
            "Requesting speech synthesis from ElevenLabs"
        );

        let response = self
            .client
            .post(format!(
                "{}/text-to-speech/{}",
                ELEVENLABS_API_BASE, self.voice_id
            ))
            .header("xi-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::UpstreamStatus { status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}
