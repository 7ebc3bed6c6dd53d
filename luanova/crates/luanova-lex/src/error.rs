//! Error types for luanova-lex.
//!
//! Scanning itself never fails; only loading a [`ScanConfig`](crate::ScanConfig)
//! can.

use thiserror::Error;

/// Errors raised while loading or saving scanner configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested configuration file does not exist.
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    /// Reading or writing the file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or has unexpected values.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
