//! PNG writing module
//!
//! This module provides PNG encoding for the cleaned-up logo. Output is
//! always PNG regardless of the output path's extension.

mod writer;
mod standard_png_writer;

pub use writer::PngWriter;
pub use standard_png_writer::StandardPngWriter;
