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
use narrator_backend::infrastructure::config::{Config, Environment, LogFormat};
use narrator_backend::infrastructure::http::build_router;
use narrator_backend::infrastructure::repositories::{
    DocxRepository, MupdfPdfRepository, SpeechRepository, VideoEncoder,
};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod api_client;
pub mod doubles;

use api_client::TestClient;
use doubles::{FixedSpeechRepository, PlaceholderEncoder};

pub struct TestContext {
    pub client: TestClient,
    pub config: Config,
    pub speech: Arc<FixedSpeechRepository>,
    pub encoder: Arc<PlaceholderEncoder>,
    temp_dir: TempDir,
    upload_dir: TempDir,
}

impl TestContext {
    /// Number of entries left in the temp directory
    pub fn temp_files(&self) -> usize {
        count_entries(self.temp_dir.path())
    }

    /// Number of entries left in the upload directory
    pub fn upload_files(&self) -> usize {
        count_entries(self.upload_dir.path())
    }
}

/// A running server wired to arbitrary speech and encoder doubles
pub struct CustomContext {
    pub client: TestClient,
    temp_dir: TempDir,
    _upload_dir: TempDir,
}

impl CustomContext {
    pub async fn with_doubles(
        speech: Arc<dyn SpeechRepository>,
        encoder: Arc<dyn VideoEncoder>,
    ) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let upload_dir = TempDir::new().expect("Failed to create upload dir");
        let config = test_config(&temp_dir, &upload_dir);

        let client = spawn_app(&config, speech, encoder).await;

        Self {
            client,
            temp_dir,
            _upload_dir: upload_dir,
        }
    }

    pub fn temp_files(&self) -> usize {
        count_entries(self.temp_dir.path())
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let temp_dir = TempDir::new().expect("Failed to create temp dir");
            let upload_dir = TempDir::new().expect("Failed to create upload dir");
            let config = test_config(&temp_dir, &upload_dir);

            let speech = Arc::new(FixedSpeechRepository::new());
            let encoder = Arc::new(PlaceholderEncoder::new());

            let client = spawn_app(&config, speech.clone(), encoder.clone()).await;

            Self {
                client,
                config,
                speech,
                encoder,
                temp_dir,
                upload_dir,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Directories are removed when the TempDirs drop
        }
    }
}

fn test_config(temp_dir: &TempDir, upload_dir: &TempDir) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Will be assigned by the OS
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        gemini_api_key: "test-api-key".to_string(),
        gemini_model: "gemini-2.5-flash-preview-tts".to_string(),
        gemini_base_url: "http://127.0.0.1:9".to_string(),
        narration_language: "Tamil".to_string(),
        ffmpeg_path: "ffmpeg".to_string(),
        audio_bitrate: "192k".to_string(),
        encoder_timeout: None,
        temp_dir: temp_dir.path().to_path_buf(),
        upload_dir: upload_dir.path().to_path_buf(),
        pdf_page_limit: 25,
        max_body_bytes: 50 * 1024 * 1024,
    }
}

async fn spawn_app(
    config: &Config,
    speech: Arc<dyn SpeechRepository>,
    encoder: Arc<dyn VideoEncoder>,
) -> TestClient {
    let document_service = Arc::new(DocumentService::new(
        Arc::new(MupdfPdfRepository::new()),
        Arc::new(DocxRepository::new()),
        config.upload_dir.clone(),
        PageLimits::with_pdf_limit(config.pdf_page_limit),
    ));
    let tts_service = Arc::new(TtsService::new(speech, config.narration_language.clone()));
    let video_service = Arc::new(VideoService::new(encoder, config.temp_dir.clone()));
    let conversion_service = Arc::new(ConversionService::new(tts_service, video_service.clone()));

    let app = build_router(
        Arc::new(ExtractController::new(document_service)),
        Arc::new(VideoController::new(video_service.clone())),
        Arc::new(ConvertController::new(conversion_service)),
        Arc::new(HealthState::new(video_service, config.has_speech_credentials())),
        config.max_body_bytes,
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestClient::new(&format!("http://{}", addr))
}

fn count_entries(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.count())
        .unwrap_or(0)
}
