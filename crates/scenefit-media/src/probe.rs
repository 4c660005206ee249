// crates/scenefit-media/src/probe.rs
//
// Native-size probing. Images decode header-only through the image crate;
// videos open through in-process FFmpeg and read the stream parameters.

use std::path::{Path, PathBuf};

use ffmpeg_the_third as ffmpeg;
use ffmpeg::format::input;
use ffmpeg::media::Type;

use scenefit_core::{Dimensions, MediaKind, MediaProbe, ProbeError};

use crate::runtime;

/// Probe backed by the real decoders. Stateless; one instance serves the
/// whole plugin.
pub struct SystemProbe;

impl MediaProbe for SystemProbe {
    fn probe(&self, kind: MediaKind, path: &Path) -> Result<Dimensions, ProbeError> {
        if path.as_os_str().is_empty() {
            return Err(ProbeError::EmptyPath);
        }
        match kind {
            MediaKind::Image => image_size(path),
            MediaKind::Video => {
                if !runtime::ensure_started() {
                    return Err(ProbeError::RuntimeUnavailable);
                }
                video_size(path)
            }
        }
    }
}

/// Header-only decode; cheap even for large files.
fn image_size(path: &Path) -> Result<Dimensions, ProbeError> {
    let (w, h) = image::image_dimensions(path).map_err(|e| ProbeError::Unreadable {
        path:   path.to_path_buf(),
        reason: e.to_string(),
    })?;
    log::debug!("image size {w}x{h} from {}", path.display());
    non_zero(w, h, path)
}

fn video_size(path: &Path) -> Result<Dimensions, ProbeError> {
    let owned: PathBuf = path.to_path_buf();
    let ictx = input(&owned).map_err(|e| ProbeError::Unreadable {
        path:   owned.clone(),
        reason: e.to_string(),
    })?;
    let Some(stream) = ictx.streams().best(Type::Video) else {
        return Err(ProbeError::NoVideoStream { path: owned });
    };
    let (w, h) = unsafe {
        let p = stream.parameters().as_ptr();
        ((*p).width as u32, (*p).height as u32)
    };
    log::debug!("video size {w}x{h} from {}", owned.display());
    non_zero(w, h, &owned)
}

/// A decoder reporting zero on either axis is a failure, never a canvas size.
fn non_zero(w: u32, h: u32, path: &Path) -> Result<Dimensions, ProbeError> {
    if w == 0 || h == 0 {
        return Err(ProbeError::ZeroDimensions { path: path.to_path_buf() });
    }
    Ok(Dimensions::new(w, h))
}
