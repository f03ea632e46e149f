//! Per-pixel background removal.
//!
//! A pixel is background if it is near-white (all color channels above the
//! white threshold) or nearly invisible (alpha below the alpha threshold).
//! Background pixels are rewritten to fully transparent white, which makes
//! the rule idempotent: an already-scrubbed pixel has alpha 0 and maps to
//! itself through the alpha branch.

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::logo_pipeline::cleanup::types::CleanupConfig;

/// Transparent white, the replacement value for every background pixel.
const SCRUBBED: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Classifies a single pixel. Pure; no neighborhood dependence, so the
/// order pixels are visited in does not matter.
pub fn scrub_pixel(pixel: Rgba<u8>, white_threshold: u8, alpha_threshold: u8) -> Rgba<u8> {
    let Rgba([r, g, b, a]) = pixel;

    if r > white_threshold && g > white_threshold && b > white_threshold {
        SCRUBBED
    } else if a < alpha_threshold {
        SCRUBBED
    } else {
        pixel
    }
}

/// Applies [`scrub_pixel`] to every pixel of the image in place.
pub fn remove_background(image: &mut RgbaImage, config: &CleanupConfig) {
    let mut scrubbed = 0u64;

    for pixel in image.pixels_mut() {
        let replacement = scrub_pixel(*pixel, config.white_threshold, config.alpha_threshold);
        if replacement != *pixel {
            scrubbed += 1;
        }
        *pixel = replacement;
    }

    debug!("Background removal scrubbed {} pixels", scrubbed);
}
