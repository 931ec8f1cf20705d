use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-tts";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Speech provider
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub narration_language: String,
    // Encoder
    pub ffmpeg_path: String,
    pub audio_bitrate: String,
    pub encoder_timeout: Option<Duration>,
    // Request-scoped files
    pub temp_dir: PathBuf,
    pub upload_dir: PathBuf,
    // Limits
    pub pdf_page_limit: usize,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            narration_language: env::var("NARRATION_LANGUAGE")
                .unwrap_or_else(|_| "Tamil".to_string()),
            ffmpeg_path: env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string()),
            audio_bitrate: env::var("AUDIO_BITRATE").unwrap_or_else(|_| "192k".to_string()),
            encoder_timeout: match env::var("ENCODER_TIMEOUT_SECS") {
                Ok(secs) => Some(Duration::from_secs(secs.parse()?)),
                Err(_) => None,
            },
            temp_dir: env::var("TEMP_DIR")
                .unwrap_or_else(|_| "temp".to_string())
                .into(),
            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            pdf_page_limit: env::var("PDF_PAGE_LIMIT")
                .unwrap_or_else(|_| "25".to_string())
                .parse()?,
            max_body_bytes: match env::var("MAX_BODY_BYTES") {
                Ok(bytes) => bytes.parse()?,
                Err(_) => DEFAULT_MAX_BODY_BYTES,
            },
        };

        Ok(config)
    }

    pub fn has_speech_credentials(&self) -> bool {
        !self.gemini_api_key.trim().is_empty()
    }
}
