//! Asset loading collaborator.
//!
//! The room never decodes assets itself. It asks an [`AssetSource`] for a
//! future per asset and awaits it at the load points (room load, object
//! batch staging). Two sources are provided:
//!
//! - [`MemoryAssets`] – a fixed table of known images and audio tracks
//! - [`FileAssets`] – resolves paths under a root directory and only checks
//!   that the file exists
//!
//! Both resolve immediately; a networked source would return a pending future.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use futures_lite::future;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Boxed future produced by an [`AssetSource`].
pub type AssetFuture<T> = Pin<Box<dyn Future<Output = Result<T, AssetError>> + Send>>;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),
    #[error("failed to read asset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Loaded image handle. Dimensions are 0 when the source cannot know them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

pub trait AssetSource: Send + Sync {
    fn load_image(&self, path: &str) -> AssetFuture<ImageInfo>;
    fn load_audio(&self, path: &str) -> AssetFuture<()>;
}

/// In-memory asset table.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    images: FxHashMap<String, (u32, u32)>,
    audio: FxHashSet<String>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, path: impl Into<String>, width: u32, height: u32) -> Self {
        self.images.insert(path.into(), (width, height));
        self
    }

    pub fn with_audio(mut self, path: impl Into<String>) -> Self {
        self.audio.insert(path.into());
        self
    }
}

impl AssetSource for MemoryAssets {
    fn load_image(&self, path: &str) -> AssetFuture<ImageInfo> {
        let result = match self.images.get(path) {
            Some(&(width, height)) => Ok(ImageInfo {
                path: path.to_string(),
                width,
                height,
            }),
            None => Err(AssetError::NotFound(path.to_string())),
        };
        Box::pin(future::ready(result))
    }

    fn load_audio(&self, path: &str) -> AssetFuture<()> {
        let result = if self.audio.contains(path) {
            Ok(())
        } else {
            Err(AssetError::NotFound(path.to_string()))
        };
        Box::pin(future::ready(result))
    }
}

/// Assets resolved relative to a directory on disk.
#[derive(Debug, Clone)]
pub struct FileAssets {
    pub root: PathBuf,
}

impl FileAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn check(&self, path: &str) -> Result<(), AssetError> {
        let full = self.root.join(path);
        match std::fs::metadata(&full) {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(AssetError::NotFound(path.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AssetError::NotFound(path.to_string()))
            }
            Err(source) => Err(AssetError::Io {
                path: path.to_string(),
                source,
            }),
        }
    }
}

impl AssetSource for FileAssets {
    fn load_image(&self, path: &str) -> AssetFuture<ImageInfo> {
        let result = self.check(path).map(|()| ImageInfo {
            path: path.to_string(),
            width: 0,
            height: 0,
        });
        Box::pin(future::ready(result))
    }

    fn load_audio(&self, path: &str) -> AssetFuture<()> {
        Box::pin(future::ready(self.check(path)))
    }
}
