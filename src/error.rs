//! Error types for alias and backup operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the codec, store and backup engine.
///
/// Every fallible operation returns one of these instead of recording a
/// message on the object it acted upon; the `Display` text is the
/// human-readable message shown to the user.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file or a requested backup does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// No alias line with the requested name
    #[error("alias not found: {name}")]
    AliasNotFound { name: String },

    /// There is no backup to restore from
    #[error("no backup found")]
    NoBackup,

    /// Alias name or command failed shape validation
    #[error("invalid alias name or command: '{name}'")]
    InvalidAlias { name: String },

    /// A filesystem call failed
    #[error("{op} failed for {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The compressor returned a non-zero status or could not be spawned
    #[error("{tool} failed on {}: {detail}", path.display())]
    ExternalTool {
        tool: String,
        path: PathBuf,
        detail: String,
    },
}

impl Error {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            op,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn not_found(path: impl Into<PathBuf>) -> Self {
        Error::NotFound { path: path.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
