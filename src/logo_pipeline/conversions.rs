//! Pipeline conversions module
//!
//! This module contains the orchestration logic for the logo cleanup
//! pipeline.

mod logo_cleanup;


pub use logo_cleanup::LogoCleanupPipeline;
