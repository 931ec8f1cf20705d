pub mod conversion;
pub mod document;
pub mod shared;
pub mod tts;
pub mod video;
