//! Error types for pkgmeta-blocks

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] pkgmeta_fs::Error),

    #[error("Malformed embedded metadata JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Malformed embedded metadata JSON in {path}: {source}")]
    MalformedJsonInFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize metadata: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Comment keyword must not be empty")]
    EmptyKeyword,

    #[error("Invalid comment keyword {keyword:?}: {source}")]
    InvalidKeyword {
        keyword: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Whether this error reports an embedded payload that is not valid JSON.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedJson(_) | Self::MalformedJsonInFile { .. })
    }
}
