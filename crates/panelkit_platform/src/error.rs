//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlatformError {
    /// A scripted event line could not be parsed
    #[error("invalid event script at line {line}: {message}")]
    InvalidScript {
        /// 1-based line number within the script
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// Generic platform error
    #[error("Platform error: {0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
