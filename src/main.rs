use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tts_proxy::controllers::tts::TtsController;
use tts_proxy::domain::tts::TtsService;
use tts_proxy::infrastructure::config::{Config, LogFormat};
use tts_proxy::infrastructure::http::start_http_server;
use tts_proxy::infrastructure::repositories::GoogleTtsRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting TTS proxy on {}:{}",
        config.host,
        config.port
    );

    // Only the presence of the key is logged
    if config.google_api_key.is_none() {
        tracing::warn!("GOOGLE_API_KEY is not set; synthesis requests will fail with 500");
    }

    // === DEPENDENCY INJECTION SETUP ===
    tracing::info!(base_url = %config.tts_api_base_url, "Initializing Google TTS client");
    let tts_repo = Arc::new(GoogleTtsRepository::new(config.tts_api_base_url.clone())?);

    let tts_service = Arc::new(TtsService::new(tts_repo, config.google_api_key.clone()));
    let tts_controller = Arc::new(TtsController::new(tts_service.clone()));

    let config = Arc::new(config);

    start_http_server(config, tts_service, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "tts_proxy=debug,tower_http=debug"
    } else {
        "tts_proxy=info,tower_http=info"
    };

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
