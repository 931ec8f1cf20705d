use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    controllers::{
        convert::ConvertController,
        extract::ExtractController,
        health::{self, HealthState},
        video::VideoController,
    },
    infrastructure::{config::Config, middleware::request_id_middleware},
};

/// Build the application router with every route and layer configured
pub fn build_router(
    extract_controller: Arc<ExtractController>,
    video_controller: Arc<VideoController>,
    convert_controller: Arc<ConvertController>,
    health_state: Arc<HealthState>,
    max_body_bytes: usize,
) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(health_state);

    let extract_routes = Router::new()
        .route("/api/extract-text", post(ExtractController::extract_text))
        .with_state(extract_controller);

    let video_routes = Router::new()
        .route("/api/generate-video", post(VideoController::generate_video))
        .with_state(video_controller);

    let convert_routes = Router::new()
        .route("/api/convert", post(ConvertController::convert))
        .with_state(convert_controller);

    Router::new()
        .merge(health_routes)
        .merge(extract_routes)
        .merge(video_routes)
        .merge(convert_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
}

/// Start the HTTP server on the configured address
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
