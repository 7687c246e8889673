//! Names that decide where package metadata is looked for.

use crate::Result;
use pkgmeta_blocks::CommentMarker;
use pkgmeta_fs::{ConfigStore, MetadataName, NormalizedPath};
use serde::{Deserialize, Serialize};

/// File naming conventions for package metadata.
///
/// Loadable from TOML, JSON or YAML; missing fields take their defaults.
///
/// ```toml
/// comment_keyword = "package.json"
/// metadata_file = "package.json"
/// source_suffix = ".js"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataLayout {
    /// Keyword following `/*` in an embedded metadata comment.
    pub comment_keyword: String,
    /// Name of the dedicated metadata file inside a package directory.
    pub metadata_file: String,
    /// Suffix of source files that may embed metadata.
    pub source_suffix: String,
}

impl Default for MetadataLayout {
    fn default() -> Self {
        Self {
            comment_keyword: MetadataName::CommentKeyword.to_string(),
            metadata_file: MetadataName::ManifestFile.to_string(),
            source_suffix: MetadataName::SourceSuffix.to_string(),
        }
    }
}

impl MetadataLayout {
    /// Load a layout from a config file, format chosen by extension.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Build the comment marker for this layout's keyword.
    pub fn marker(&self) -> Result<CommentMarker> {
        Ok(CommentMarker::new(self.comment_keyword.as_str())?)
    }
}
