pub mod convert;
pub mod extract;
pub mod health;
pub mod payload;
pub mod video;
