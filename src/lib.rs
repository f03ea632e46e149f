pub mod logger;
pub mod logo_pipeline;
