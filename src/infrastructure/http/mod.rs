use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod cors;
pub mod request_id;

pub use cors::with_cors;
pub use request_id::{request_id_middleware, RequestId};

use crate::controllers::{health, tts::TtsController};
use crate::domain::tts::TtsService;
use crate::infrastructure::config::Config;

/// Build the application router
///
/// The synthesis handler is reachable on `/api/tts` and on `/` for every
/// method, so preflight and 405 answers come from the handler itself.
pub fn create_app(tts_service: Arc<TtsService>, tts_controller: Arc<TtsController>) -> Router {
    let tts_routes = Router::new()
        .route("/", any(TtsController::synthesize))
        .route("/api/tts", any(TtsController::synthesize))
        .with_state(tts_controller);

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(tts_service)
        .merge(tts_routes);

    with_cors(app)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    tts_service: Arc<TtsService>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_app(tts_service, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
