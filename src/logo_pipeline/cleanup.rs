//! Logo cleanup heuristics module
//!
//! This module contains the pure functions behind the cleanup pipeline:
//! background removal and the vertical content-block split.

mod background;
mod split;
pub mod types;

pub use background::{remove_background, scrub_pixel};
pub use split::split_row;
pub use types::{CleanupConfig, CleanupConfigBuilder};
