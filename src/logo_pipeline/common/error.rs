use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode PNG image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    /// No pixel survived background removal. The `process_logo` binary
    /// reports this without forcing a failure exit status, unlike every
    /// other error kind.
    #[error("Image is empty after processing")]
    EmptyAfterProcessing,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CleanupError>;
