//! Icon decoding
//!
//! The packaged `.ico` (or `.png`) is decoded once at startup into raw RGBA8
//! pixels, which both the slint window and the tray indicator accept.

use crate::error::{CalSyncError, Result, StartupStep};
use std::path::Path;
use tracing::debug;

/// Decoded RGBA8 image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    /// Row-major RGBA8 pixels, `width * height * 4` bytes
    pub rgba: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Load and decode the image at `path`
///
/// The format is picked from the file extension. A missing, unreadable, or
/// undecodable file is a [`StartupStep::LoadIcon`] failure.
pub fn load_icon(path: &Path) -> Result<IconImage> {
    let image = image::open(path).map_err(|e| CalSyncError::startup(StartupStep::LoadIcon, e))?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    debug!("Loaded {}x{} icon from {}", width, height, path.display());

    Ok(IconImage {
        rgba: rgba.into_raw(),
        width,
        height,
    })
}
