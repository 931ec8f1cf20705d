pub mod document_repository;
pub mod docx_repository;
pub mod encoder_repository;
pub mod ffmpeg_encoder;
pub mod gemini_tts_repository;
pub mod pdf_repository;
pub mod tts_repository;

pub use document_repository::{DocumentRepository, ParsedDocument};
pub use docx_repository::DocxRepository;
pub use encoder_repository::{EncodeJob, VideoEncoder};
pub use ffmpeg_encoder::FfmpegEncoder;
pub use gemini_tts_repository::GeminiTtsRepository;
pub use pdf_repository::MupdfPdfRepository;
pub use tts_repository::{SpeechProviderError, SpeechRepository, SpeechRequest, SynthesizedAudio};
