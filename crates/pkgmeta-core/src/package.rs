//! A package's metadata and where it is stored.

use crate::path::{ensure_path, get_at_path};
use crate::{Error, Result};
use pkgmeta_blocks::{CommentMarker, to_pretty_json};
use pkgmeta_fs::{NormalizedPath, io};
use serde::Serialize;
use serde_json::{Map, Value};

/// Path of the dependency map inside the metadata object.
pub const DEPENDENCIES_PATH: [&str; 2] = ["volo", "dependencies"];

/// Where a package keeps its metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageMode {
    /// A standalone JSON file such as `package.json`.
    DedicatedFile,
    /// A `/*package.json ... */` comment inside a source file.
    EmbeddedComment,
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DedicatedFile => write!(f, "dedicated file"),
            Self::EmbeddedComment => write!(f, "embedded comment"),
        }
    }
}

/// Metadata of one package.
///
/// The handle owns its data; nothing is written until [`save`](Self::save)
/// is called. Two handles over the same file are not coordinated.
#[derive(Debug, Clone)]
pub struct PackageMetadata {
    location: Option<NormalizedPath>,
    storage_mode: StorageMode,
    data: Option<Value>,
    marker: CommentMarker,
}

impl PackageMetadata {
    /// A handle for a dedicated metadata file. Data is not loaded yet.
    pub fn dedicated(location: impl Into<NormalizedPath>) -> Self {
        Self {
            location: Some(location.into()),
            storage_mode: StorageMode::DedicatedFile,
            data: None,
            marker: CommentMarker::default(),
        }
    }

    /// A handle for metadata embedded in a source file.
    ///
    /// `location` is `None` when no single source file could be chosen.
    pub fn embedded(location: Option<NormalizedPath>) -> Self {
        Self {
            location,
            storage_mode: StorageMode::EmbeddedComment,
            data: None,
            marker: CommentMarker::default(),
        }
    }

    /// Use `marker` to find the embedded comment.
    pub fn with_marker(mut self, marker: CommentMarker) -> Self {
        self.marker = marker;
        self
    }

    pub(crate) fn with_data(mut self, data: Option<Value>) -> Self {
        self.data = data;
        self
    }

    pub fn location(&self) -> Option<&NormalizedPath> {
        self.location.as_ref()
    }

    /// Whether the handle points at a file; only then can it be refreshed or saved.
    pub fn has_location(&self) -> bool {
        self.location.is_some()
    }

    pub fn storage_mode(&self) -> StorageMode {
        self.storage_mode
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> Option<&mut Value> {
        self.data.as_mut()
    }

    pub fn set_data(&mut self, data: Value) {
        self.data = Some(data);
    }

    /// Reloads the data from disk.
    ///
    /// For an embedded comment the data becomes `None` when the file has no
    /// usable comment.
    ///
    /// # Errors
    /// - `Error::NoLocation` when the handle has no file.
    /// - A not-found filesystem error when the file is missing.
    /// - A malformed error when the stored JSON does not parse.
    pub fn refresh(&mut self) -> Result<()> {
        let location = self.location.as_ref().ok_or(Error::NoLocation)?;

        self.data = match self.storage_mode {
            StorageMode::DedicatedFile => Some(read_metadata_file(location)?),
            StorageMode::EmbeddedComment => self.marker.extract_file(location)?,
        };

        tracing::debug!(
            path = %location,
            mode = %self.storage_mode,
            loaded = self.data.is_some(),
            "Refreshed package metadata"
        );
        Ok(())
    }

    /// Writes the data back to disk. Does nothing when there is no data.
    ///
    /// A dedicated file is overwritten wholesale. For an embedded comment the
    /// source file is re-read and only the JSON payload is replaced, so
    /// unrelated edits made since [`refresh`](Self::refresh) are kept.
    pub fn save(&self) -> Result<()> {
        let Some(data) = self.data.as_ref().filter(|d| !d.is_null()) else {
            return Ok(());
        };
        let location = self.location.as_ref().ok_or(Error::NoLocation)?;

        match self.storage_mode {
            StorageMode::DedicatedFile => {
                let json = to_pretty_json(data)?;
                io::write_text(location, &json)?;
            }
            StorageMode::EmbeddedComment => self.marker.save_file(location, data)?,
        }

        tracing::debug!(path = %location, mode = %self.storage_mode, "Saved package metadata");
        Ok(())
    }

    /// Records `archive_name` for dependency `id` under `volo.dependencies`.
    ///
    /// Missing objects along the path are created; absent data starts as
    /// `{}`. The change stays in memory until [`save`](Self::save).
    pub fn set_dependency(
        &mut self,
        id: impl Into<String>,
        archive_name: impl Into<String>,
    ) -> Result<()> {
        let data = self.data.get_or_insert_with(|| Value::Object(Map::new()));
        let dependencies = ensure_path(data, &DEPENDENCIES_PATH)?;
        dependencies.insert(id.into(), Value::String(archive_name.into()));
        Ok(())
    }

    /// Removes dependency `id`. Returns whether it was present.
    pub fn remove_dependency(&mut self, id: &str) -> bool {
        let Some(data) = self.data.as_mut() else {
            return false;
        };
        let Some(Value::Object(volo)) = data.get_mut(DEPENDENCIES_PATH[0]) else {
            return false;
        };
        let Some(Value::Object(dependencies)) = volo.get_mut(DEPENDENCIES_PATH[1]) else {
            return false;
        };
        dependencies.shift_remove(id).is_some()
    }

    /// The `volo.dependencies` entries whose archive name is a string.
    pub fn dependencies(&self) -> Vec<(&str, &str)> {
        self.data
            .as_ref()
            .and_then(|data| get_at_path(data, &DEPENDENCIES_PATH))
            .and_then(Value::as_object)
            .map(|deps| {
                deps.iter()
                    .filter_map(|(id, archive)| Some((id.as_str(), archive.as_str()?)))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn read_metadata_file(path: &NormalizedPath) -> Result<Value> {
    let content = io::read_text(path)?;
    serde_json::from_str(&content).map_err(|source| Error::MalformedMetadataFile {
        path: path.to_native(),
        source,
    })
}
