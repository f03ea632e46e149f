//! Image reader implementation backed by the `image` crate.
//!
//! Decodes any format the `image` crate supports (PNG, JPEG, GIF, WebP, ...)
//! and forces the result into an 8-bit RGBA buffer so the rest of the
//! pipeline only ever deals with one pixel layout.

use image::RgbaImage;
use tracing::debug;

use crate::logo_pipeline::common::error::{CleanupError, Result};
use crate::logo_pipeline::raster::reader::LogoReader;

/// Reader that delegates format detection and decoding to the `image` crate.
pub struct ImageCrateReader;

impl LogoReader for ImageCrateReader {
    fn read_rgba(&self, data: &[u8]) -> Result<RgbaImage> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| CleanupError::DecodeError(e.to_string()))?;

        // to_rgba8 is the forced four-channel conversion; indexed, grey and
        // RGB inputs all come out as RGBA with alpha 255.
        let rgba = decoded.to_rgba8();

        debug!("Decoded image: {}x{}", rgba.width(), rgba.height());

        Ok(rgba)
    }
}
