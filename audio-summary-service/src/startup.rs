//! Application startup and lifecycle management.

use crate::config::{ProxyConfig, SPEECH_MODEL, TEXT_MODEL};
use crate::handlers;
use crate::services::providers::{
    elevenlabs::ElevenLabsClient, gemini::GeminiClient, SpeechProvider, SummaryProvider,
};
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use service_core::error::AppError;
use service_core::middleware::cors::cors_middleware;
use service_core::middleware::tracing::request_id_middleware;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state. Immutable after startup; concurrent
/// requests share it without coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub summary_provider: Arc<dyn SummaryProvider>,
    pub speech_provider: Arc<dyn SpeechProvider>,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the real upstream clients.
    pub async fn build(config: ProxyConfig) -> Result<Self, AppError> {
        let summary_provider: Arc<dyn SummaryProvider> = Arc::new(GeminiClient::new(
            config.gemini_api_key.clone().unwrap_or_default(),
            TEXT_MODEL.to_string(),
        ));
        let speech_provider: Arc<dyn SpeechProvider> = Arc::new(ElevenLabsClient::new(
            config.elevenlabs_api_key.clone().unwrap_or_default(),
            config.voice_id.clone(),
            SPEECH_MODEL.to_string(),
        ));

        Self::build_with_providers(config, summary_provider, speech_provider).await
    }

    /// Build with injected providers; used by tests to run without
    /// network access.
    pub async fn build_with_providers(
        config: ProxyConfig,
        summary_provider: Arc<dyn SummaryProvider>,
        speech_provider: Arc<dyn SpeechProvider>,
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let state = AppState {
            config: Arc::new(config),
            summary_provider,
            speech_provider,
        };

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, build_router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/tts", post(handlers::tts::synthesize_summary))
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(cors_middleware))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
