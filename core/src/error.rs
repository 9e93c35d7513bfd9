//! Error types for configuration-file loading.
//!
//! Parsing and lookups never fail; reading options from a file is the only
//! fallible surface of this crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line has an empty option name (e.g. `=value`).
    #[error("invalid config line {line}: '{content}'")]
    InvalidLine { line: usize, content: String },
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
