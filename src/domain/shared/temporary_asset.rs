use chrono::{DateTime, Utc};
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// What a request-scoped file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Audio,
    Image,
    Output,
    Upload,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Audio => "audio",
            AssetKind::Image => "image",
            AssetKind::Output => "output",
            AssetKind::Upload => "upload",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A uniquely named file owned by exactly one request.
///
/// Call [`TemporaryAsset::release`] on every exit path. Dropping an unreleased
/// asset removes the file synchronously as a last resort.
#[derive(Debug)]
pub struct TemporaryAsset {
    path: PathBuf,
    kind: AssetKind,
    created_at: DateTime<Utc>,
    released: bool,
}

impl TemporaryAsset {
    /// Reserve a unique path inside `dir`. Nothing is written until [`write`](Self::write).
    pub fn reserve(dir: &Path, kind: AssetKind, extension: &str) -> Self {
        let file_name = format!("{}_{}.{}", kind.as_str(), Uuid::new_v4(), extension);

        Self {
            path: dir.join(file_name),
            kind,
            created_at: Utc::now(),
            released: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub async fn write(&self, bytes: &[u8]) -> io::Result<()> {
        tokio::fs::write(&self.path, bytes).await
    }

    /// Delete the file. A file that was never written is not an error.
    pub async fn release(mut self) -> io::Result<()> {
        self.released = true;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl Drop for TemporaryAsset {
    fn drop(&mut self) {
        if !self.released {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Release every asset, logging failures instead of returning them so the
/// caller's own result is never replaced by a cleanup error.
pub async fn release_all(assets: Vec<TemporaryAsset>) {
    for asset in assets {
        let path = asset.path().to_path_buf();
        let kind = asset.kind();
        let age_ms = (Utc::now() - asset.created_at()).num_milliseconds();

        match asset.release().await {
            Ok(()) => tracing::debug!(
                path = %path.display(),
                kind = %kind,
                age_ms = age_ms,
                "Temporary asset removed"
            ),
            Err(e) => tracing::warn!(
                path = %path.display(),
                kind = %kind,
                error = %e,
                "Failed to remove temporary asset"
            ),
        }
    }
}
