//! Logo processing pipeline module
//!
//! This module provides a structured approach to logo image cleanup,
//! with separate modules for RGBA decoding and analysis, the cleanup
//! heuristics, PNG writing, and conversion orchestration.

pub mod raster;
pub mod cleanup;
pub mod png;
pub mod conversions;
pub mod common;

pub use common::{
    CleanupError,
    Result,
};

pub use raster::{
    LogoReader,
    ImageCrateReader,
    AlphaBounds,
    AlphaMargins,
    alpha_bbox,
    alpha_margins,
    horizontal_projection,
};

pub use cleanup::{
    CleanupConfig,
    CleanupConfigBuilder,
    remove_background,
    scrub_pixel,
    split_row,
};

pub use png::{
    PngWriter,
    StandardPngWriter,
};

pub use conversions::{
    LogoCleanupPipeline,
};
