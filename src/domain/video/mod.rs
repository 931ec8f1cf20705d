pub mod error;
pub mod service;

pub use error::VideoServiceError;
pub use service::{ComposedVideo, VideoService, VideoServiceApi, VIDEO_MIME_TYPE};
