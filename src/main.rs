use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use narrator_backend::controllers::{
    convert::ConvertController, extract::ExtractController, health::HealthState,
    video::VideoController,
};
use narrator_backend::domain::{
    conversion::ConversionService,
    document::{DocumentService, PageLimits},
    tts::TtsService,
    video::VideoService,
};
use narrator_backend::infrastructure::config::{Config, LogFormat};
use narrator_backend::infrastructure::http::{build_router, start_http_server};
use narrator_backend::infrastructure::repositories::{
    DocxRepository, FfmpegEncoder, GeminiTtsRepository, MupdfPdfRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting Narrator Backend on {}:{}",
        config.host,
        config.port
    );

    // Request-scoped files live here
    tokio::fs::create_dir_all(&config.temp_dir).await?;
    tokio::fs::create_dir_all(&config.upload_dir).await?;
    tracing::info!(
        temp_dir = %config.temp_dir.display(),
        upload_dir = %config.upload_dir.display(),
        "Working directories ready"
    );

    if !config.has_speech_credentials() {
        tracing::warn!("GEMINI_API_KEY is not set. Speech synthesis requests will fail until it is configured");
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!("Instantiating repositories...");
    let pdf_repo = Arc::new(MupdfPdfRepository::new());
    let word_repo = Arc::new(DocxRepository::new());
    let speech_repo = Arc::new(GeminiTtsRepository::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_base_url.clone(),
    ));
    let encoder = Arc::new(FfmpegEncoder::new(
        config.ffmpeg_path.clone(),
        config.audio_bitrate.clone(),
        config.encoder_timeout,
    ));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let document_service = Arc::new(DocumentService::new(
        pdf_repo,
        word_repo,
        config.upload_dir.clone(),
        PageLimits::with_pdf_limit(config.pdf_page_limit),
    ));
    let tts_service = Arc::new(TtsService::new(
        speech_repo,
        config.narration_language.clone(),
    ));
    let video_service = Arc::new(VideoService::new(encoder, config.temp_dir.clone()));
    let conversion_service = Arc::new(ConversionService::new(
        tts_service,
        video_service.clone(),
    ));

    if !video_service.encoder_available().await {
        tracing::warn!(
            ffmpeg_path = %config.ffmpeg_path,
            "ffmpeg could not be launched. Video generation will fail"
        );
    }

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let extract_controller = Arc::new(ExtractController::new(document_service));
    let video_controller = Arc::new(VideoController::new(video_service.clone()));
    let convert_controller = Arc::new(ConvertController::new(conversion_service));
    let health_state = Arc::new(HealthState::new(
        video_service,
        config.has_speech_credentials(),
    ));

    let app = build_router(
        extract_controller,
        video_controller,
        convert_controller,
        health_state,
        config.max_body_bytes,
    );

    // Start HTTP server with all routes
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "narrator_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
