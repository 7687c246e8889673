//! Deciding where a package's metadata lives.
//!
//! Resolution rules for a path:
//!
//! 1. A regular file is a single-file package; its metadata is embedded.
//! 2. A directory with exactly one source file whose comment holds metadata
//!    uses that embedded metadata.
//! 3. Otherwise a dedicated metadata file in the directory wins.
//! 4. With neither, the handle is embedded-mode with no data. Its location
//!    is the lone source file, or `None` when there are zero or several.

use crate::layout::MetadataLayout;
use crate::package::PackageMetadata;
use crate::Result;
use pkgmeta_blocks::CommentMarker;
use pkgmeta_fs::{NormalizedPath, io};

/// Resolves package paths to metadata handles using a [`MetadataLayout`].
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    layout: MetadataLayout,
    marker: CommentMarker,
}

impl Resolver {
    /// A resolver for `package.json` / `/*package.json` / `.js`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver using custom names.
    pub fn with_layout(layout: MetadataLayout) -> Result<Self> {
        let marker = layout.marker()?;
        Ok(Self { layout, marker })
    }

    pub fn layout(&self) -> &MetadataLayout {
        &self.layout
    }

    /// Builds a populated metadata handle for a file or directory.
    ///
    /// # Errors
    /// - A not-found filesystem error when `path` does not exist.
    /// - A malformed error when the lone source file's comment or the
    ///   dedicated metadata file holds invalid JSON.
    pub fn resolve(&self, path: impl Into<NormalizedPath>) -> Result<PackageMetadata> {
        let path = path.into();

        if io::metadata(&path)?.is_file() {
            tracing::debug!(path = %path, "Resolving single-file package");
            let mut package = self.embedded(Some(path));
            package.refresh()?;
            return Ok(package);
        }

        let sources = io::list_files_with_suffix(&path, &self.layout.source_suffix)?;
        let lone_source = match sources.as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        };

        let embedded = match &lone_source {
            Some(source) => self.marker.extract_file(source)?,
            None => None,
        };

        let manifest = path.join(&self.layout.metadata_file);

        if embedded.is_some() || !manifest.exists() {
            tracing::debug!(
                path = %path,
                sources = sources.len(),
                has_data = embedded.is_some(),
                "Using embedded metadata"
            );
            return Ok(self.embedded(lone_source).with_data(embedded));
        }

        tracing::debug!(path = %manifest, "Using dedicated metadata file");
        let mut package = PackageMetadata::dedicated(manifest);
        package.refresh()?;
        Ok(package)
    }

    fn embedded(&self, location: Option<NormalizedPath>) -> PackageMetadata {
        PackageMetadata::embedded(location).with_marker(self.marker.clone())
    }
}

/// Resolves `path` with the default layout.
pub fn resolve(path: impl Into<NormalizedPath>) -> Result<PackageMetadata> {
    Resolver::new().resolve(path)
}
