//! Error types for rolegate

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for rolegate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rolegate.
///
/// Permission evaluation itself never fails. [`Error::PermissionDenied`] is a
/// shared sentinel for callers that turn a negative decision into an error;
/// the remaining variants belong to parsing and configuration.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The caller's roles do not grant the requested mode
    #[error("Permission denied")]
    PermissionDenied,

    /// Text that does not name a permission mode
    #[error("Invalid permission mode: {value}")]
    InvalidMode {
        /// The rejected input
        value: String,
    },

    /// Malformed configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Lookup of a permission set that the configuration does not declare
    #[error("Unknown permission set: {name}")]
    UnknownPermission {
        /// Name that was looked up
        name: String,
    },

    /// I/O error while reading configuration
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns `true` for the [`Error::PermissionDenied`] sentinel.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Error::PermissionDenied)
    }
}
