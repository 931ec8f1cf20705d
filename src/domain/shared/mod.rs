pub mod audio;
pub mod temporary_asset;

pub use audio::{image_extension, AudioEncoding};
pub use temporary_asset::{release_all, AssetKind, TemporaryAsset};
