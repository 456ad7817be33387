//! Upstream API clients.
//!
//! Both upstream dependencies sit behind a trait so integration tests can
//! swap in mock implementations and run without network access.

pub mod elevenlabs;
pub mod gemini;
pub mod mock;

use crate::models::AnalysisPayload;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    /// The upstream answered with a non-success status. Carries the raw
    /// status and body so the HTTP boundary can pass them through.
    #[error("upstream returned status {status}")]
    UpstreamStatus { status: u16, body: String },
}

/// Turns an analysis payload into a short spoken-style summary.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn generate_summary(&self, analysis: &AnalysisPayload) -> Result<String, ProviderError>;
}

/// Turns summary text into an MPEG audio stream.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ProviderError>;
}
