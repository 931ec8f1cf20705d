pub mod error;
pub mod service;

pub use error::ConversionServiceError;
pub use service::{ConversionRequest, ConversionService, ConversionServiceApi};
