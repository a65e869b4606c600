//! Error types and handling for wowdex-core operations.
//!
//! Only infrastructure failures surface as [`Error`]: an unreadable config
//! file, invalid TOML, a filesystem problem. Problems in the mapping *data*
//! are reported as [`crate::Diagnostic`] values by the loader, and lookup
//! misses are plain `None` results - neither is an error.

use thiserror::Error;

/// The main error type for wowdex-core operations.
///
/// All fallible public functions in wowdex-core return `Result<T, Error>`.
/// The error chain is preserved through `source()` where an underlying error
/// exists.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers filesystem access while reading configuration. The underlying
    /// `std::io::Error` is preserved for detailed inspection.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or inaccessible.
    ///
    /// Occurs when the config file contains invalid values or the platform
    /// config directory cannot be determined.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization failed.
    ///
    /// Occurs when the TOML config file cannot be parsed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// Useful for grouping errors in logs.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
