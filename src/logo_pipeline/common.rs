//! Common utilities module
//!
//! This module contains shared utilities used across the logo pipeline.

pub mod error;

pub use error::{CleanupError, Result};
