pub mod error;
pub mod format;
pub mod service;

pub use error::DocumentServiceError;
pub use format::{DocumentFormat, PageLimits, DEFAULT_PDF_PAGE_LIMIT};
pub use service::{DocumentService, DocumentServiceApi};
