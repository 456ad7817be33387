use crate::config::MAX_SPEECH_CHARS;
use crate::models::{truncate_chars, AnalysisPayload};
use crate::services::providers::ProviderError;
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use service_core::error::AppError;

/// Orchestrates one summary-audio request: validate the payload, ask
/// Gemini for a spoken summary, hand the (truncated) text to ElevenLabs,
/// and stream the audio bytes back.
///
/// A summary-generation failure surfaces as a generic 500; a speech
/// upstream failure is translated into a 502 carrying the upstream
/// status and body.
pub async fn synthesize_summary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    // Credential order matters: the speech key is checked first.
    if state.config.elevenlabs_api_key.is_none() {
        return Err(AppError::MissingCredential("ELEVENLABS_API_KEY"));
    }
    if state.config.gemini_api_key.is_none() {
        return Err(AppError::MissingCredential("GEMINI_API_KEY"));
    }

    let analysis = AnalysisPayload::from_body(&body);
    if analysis.is_empty() {
        return Err(AppError::BadRequest(
            "Provide analysis data: headline, trustScore, flags, siteProfile".to_string(),
        ));
    }

    let summary = state
        .summary_provider
        .generate_summary(&analysis)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Summary generation failed");
            AppError::SummaryGeneration(e.to_string())
        })?;

    let text = truncate_chars(&summary, MAX_SPEECH_CHARS);

    let audio = state
        .speech_provider
        .synthesize(text)
        .await
        .map_err(|e| match e {
            ProviderError::UpstreamStatus { status, body } => {
                tracing::error!(status, "Speech synthesis upstream rejected the request");
                AppError::BadGateway {
                    message: "ElevenLabs API error".to_string(),
                    status: Some(status),
                    detail: Some(body),
                }
            }
            other => {
                tracing::error!(error = %other, "Speech synthesis failed");
                AppError::BadGateway {
                    message: "ElevenLabs API error".to_string(),
                    status: None,
                    detail: Some(other.to_string()),
                }
            }
        })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "audio/mpeg")],
        audio,
    )
        .into_response())
}
