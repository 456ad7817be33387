use audio_summary_service::config::{ProxyConfig, DEFAULT_VOICE_ID};
use audio_summary_service::services::providers::{SpeechProvider, SummaryProvider};
use audio_summary_service::startup::Application;
use service_core::config::Config;
use std::sync::Arc;

/// Configuration with a random port; key presence is controlled per test.
pub fn test_config(elevenlabs_key: bool, gemini_key: bool) -> ProxyConfig {
    ProxyConfig {
        common: Config {
            port: 0,
            log_level: "info".to_string(),
        },
        gemini_api_key: gemini_key.then(|| "test-gemini-key".to_string()),
        elevenlabs_api_key: elevenlabs_key.then(|| "test-elevenlabs-key".to_string()),
        voice_id: DEFAULT_VOICE_ID.to_string(),
    }
}

/// Spawn the application with injected providers and return the port.
pub async fn spawn_app(
    config: ProxyConfig,
    summary_provider: Arc<dyn SummaryProvider>,
    speech_provider: Arc<dyn SpeechProvider>,
) -> u16 {
    let app = Application::build_with_providers(config, summary_provider, speech_provider)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}
