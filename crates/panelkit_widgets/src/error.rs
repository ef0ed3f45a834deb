//! Error types for panelkit_widgets

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the process-wide framework state
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameworkError {
    /// `init` was called while the framework was already running
    #[error("framework is already initialized")]
    AlreadyInitialized,

    /// The operation needs `init` to have been called first
    #[error("framework is not initialized")]
    NotInitialized,
}

/// Errors from loading a screen configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range
    #[error("invalid value for `{field}`: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Result type for framework operations
pub type Result<T> = std::result::Result<T, FrameworkError>;
