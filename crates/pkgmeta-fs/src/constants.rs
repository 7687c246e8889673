//! Well-known names used when looking for package metadata.

use std::path::Path;

/// Conventional names for package metadata on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataName {
    /// The dedicated metadata file (`package.json`)
    ManifestFile,
    /// The keyword that marks an embedded metadata comment (`/*package.json`)
    CommentKeyword,
    /// Suffix of source files that may embed metadata (`.js`)
    SourceSuffix,
}

impl MetadataName {
    /// Get the string representation of the name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ManifestFile => "package.json",
            Self::CommentKeyword => "package.json",
            Self::SourceSuffix => ".js",
        }
    }
}

impl AsRef<Path> for MetadataName {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for MetadataName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for MetadataName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
