// crates/scenefit-core/src/media_types.rs
//
// Media-probing contract, no decoder code. scenefit-media implements
// `MediaProbe` over the real libraries; tests implement it with stubs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::edit::Dimensions;

/// How a media file's dimensions are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
}

/// A media file referenced by a timeline object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaSource {
    pub kind: MediaKind,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ProbeError {
    /// The video runtime failed to start or was already shut down.
    #[error("media runtime unavailable")]
    RuntimeUnavailable,
    #[error("empty media path")]
    EmptyPath,
    #[error("cannot read {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },
    #[error("no video stream in {}", .path.display())]
    NoVideoStream { path: PathBuf },
    /// A decoder reported a width or height of zero. Never forwarded as a
    /// canvas size.
    #[error("zero-sized frame in {}", .path.display())]
    ZeroDimensions { path: PathBuf },
}

/// Reads the native pixel size of a media file.
pub trait MediaProbe: Send + Sync {
    fn probe(&self, kind: MediaKind, path: &Path) -> Result<Dimensions, ProbeError>;
}
