use info_service::startup::Application;
use service_core::config::Config;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = Config::load()
        .map_err(|e| std::io::Error::other(format!("Configuration error: {}", e)))?;

    init_tracing("info-service", &config.log_level);

    let app = Application::build(config)
        .await
        .map_err(|e| std::io::Error::other(format!("Startup error: {}", e)))?;

    tracing::info!(port = app.port(), "Info service listening");

    app.run_until_stopped().await
}
