//! RGBA raster reading and analysis module
//!
//! This module provides format-agnostic image decoding into RGBA buffers
//! plus the pure alpha-channel analysis helpers the pipeline is built on.

mod reader;
mod image_reader;
pub mod analysis;

pub use reader::LogoReader;
pub use image_reader::ImageCrateReader;
pub use analysis::{AlphaBounds, AlphaMargins, alpha_bbox, alpha_margins, horizontal_projection};
