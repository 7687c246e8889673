//! Error types for pkgmeta-core

use std::path::PathBuf;

/// Result type for pkgmeta-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or saving package metadata
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] pkgmeta_fs::Error),

    #[error("{0}")]
    Embedded(#[from] pkgmeta_blocks::Error),

    #[error("Malformed metadata file {path}: {source}")]
    MalformedMetadataFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Package metadata has no file location (expected exactly one source file or a metadata file)")]
    NoLocation,

    #[error("Cannot create object at '{path}': existing value is not an object")]
    PathConflict { path: String },
}

impl Error {
    /// Whether the error means the requested path does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Fs(e) => e.is_not_found(),
            Self::Embedded(pkgmeta_blocks::Error::Fs(e)) => e.is_not_found(),
            _ => false,
        }
    }

    /// Whether the error reports metadata that is not valid JSON.
    pub fn is_malformed(&self) -> bool {
        match self {
            Self::MalformedMetadataFile { .. } => true,
            Self::Embedded(e) => e.is_malformed(),
            _ => false,
        }
    }
}
