use audio_summary_service::config::ProxyConfig;
use audio_summary_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ProxyConfig::load()
        .map_err(|e| std::io::Error::other(format!("Configuration error: {}", e)))?;

    init_tracing("audio-summary-service", &config.common.log_level);

    if config.elevenlabs_api_key.is_none() {
        tracing::warn!("ELEVENLABS_API_KEY is not set; /tts requests will be rejected");
    }
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; /tts requests will be rejected");
    }

    let app = Application::build(config)
        .await
        .map_err(|e| std::io::Error::other(format!("Startup error: {}", e)))?;

    tracing::info!(port = app.port(), "Audio summary service listening");

    app.run_until_stopped().await
}
