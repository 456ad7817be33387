use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error taxonomy for the HTTP services.
///
/// Every variant maps to a JSON error body of the shape
/// `{"error": <message>}` with optional `status` and `detail` fields.
/// `BadGateway` is the one failure-translation point: it carries the
/// upstream HTTP status and raw error body through to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A required API credential is absent from process configuration.
    /// Fatal to the request, not to the process.
    #[error("{0} not set")]
    MissingCredential(&'static str),

    #[error("Summary generation failed: {0}")]
    SummaryGeneration(String),

    #[error("Bad gateway: {message}")]
    BadGateway {
        message: String,
        status: Option<u16>,
        detail: Option<String>,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            status: Option<u16>,
            #[serde(skip_serializing_if = "Option::is_none")]
            detail: Option<String>,
        }

        let (status_code, error, status, detail) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None, None),
            AppError::MissingCredential(name) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{} not set", name),
                None,
                None,
            ),
            AppError::SummaryGeneration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Summary generation failed".to_string(),
                None,
                Some(msg),
            ),
            AppError::BadGateway {
                message,
                status,
                detail,
            } => (StatusCode::BAD_GATEWAY, message, status, detail),
            AppError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                None,
                Some(err.to_string()),
            ),
            AppError::Config(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
                None,
                Some(err.to_string()),
            ),
        };

        (status_code, Json(ErrorResponse { error, status, detail })).into_response()
    }
}
