//! Mock provider implementations for testing.

use super::{ProviderError, SpeechProvider, SummaryProvider};
use crate::models::AnalysisPayload;
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock summary provider that records the payloads it was called with.
pub struct MockSummaryProvider {
    summary: String,
    fail: bool,
    calls: Mutex<Vec<AnalysisPayload>>,
}

impl MockSummaryProvider {
    pub fn with_summary(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            summary: String::new(),
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<AnalysisPayload> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryProvider for MockSummaryProvider {
    async fn generate_summary(&self, analysis: &AnalysisPayload) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(analysis.clone());

        if self.fail {
            return Err(ProviderError::Api("mock summary failure".to_string()));
        }

        Ok(self.summary.clone())
    }
}

/// Mock speech provider that records the text it was asked to render.
pub struct MockSpeechProvider {
    audio: Vec<u8>,
    failure: Option<(u16, String)>,
    requests: Mutex<Vec<String>>,
}

impl MockSpeechProvider {
    pub fn with_audio(audio: Vec<u8>) -> Self {
        Self {
            audio,
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_with(status: u16, body: impl Into<String>) -> Self {
        Self {
            audio: Vec::new(),
            failure: Some((status, body.into())),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechProvider for MockSpeechProvider {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ProviderError> {
        self.requests.lock().unwrap().push(text.to_string());

        if let Some((status, body)) = &self.failure {
            return Err(ProviderError::UpstreamStatus {
                status: *status,
                body: body.clone(),
            });
        }

        Ok(self.audio.clone())
    }
}
