pub mod error;
pub mod service;
pub mod voice;

pub use error::TtsServiceError;
pub use service::{TtsService, TtsServiceApi};
pub use voice::{get_voice_for_selection, Gender, Speed, Tone, VoiceSelection};
