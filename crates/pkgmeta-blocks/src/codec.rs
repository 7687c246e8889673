//! Reading and writing the JSON payload of a metadata comment.
//!
//! Writes replace exactly the payload span and leave every other byte of
//! the text untouched. Text without a usable comment gets a new one
//! prepended.

use crate::error::{Error, Result};
use crate::locator::{CommentMarker, default_marker};
use pkgmeta_fs::{NormalizedPath, io};
use serde_json::Value;

/// Serializes metadata the way it is stored on disk (2-space indent).
pub fn to_pretty_json(data: &Value) -> Result<String> {
    serde_json::to_string_pretty(data).map_err(Error::Serialize)
}

impl CommentMarker {
    /// Parses the metadata embedded in `text`.
    ///
    /// Returns `Ok(None)` when there is no usable comment.
    ///
    /// # Errors
    /// Returns `Error::MalformedJson` when a comment is present but its
    /// payload is not valid JSON.
    pub fn extract(&self, text: &str) -> Result<Option<Value>> {
        let Some(span) = self.locate(text).json_span() else {
            return Ok(None);
        };

        serde_json::from_str(&text[span])
            .map(Some)
            .map_err(Error::MalformedJson)
    }

    /// Returns `text` with `data` stored in its metadata comment.
    ///
    /// # Example
    /// ```
    /// use pkgmeta_blocks::locator::CommentMarker;
    /// use serde_json::json;
    ///
    /// let marker = CommentMarker::default();
    /// let text = "/*package.json {\"a\": 1} */\nvar x;";
    /// let updated = marker.write(text, &json!({"a": 2})).unwrap();
    /// assert_eq!(updated, "/*package.json {\n  \"a\": 2\n} */\nvar x;");
    /// ```
    pub fn write(&self, text: &str, data: &Value) -> Result<String> {
        let json = to_pretty_json(data)?;

        match self.locate(text).json_span() {
            Some(span) => {
                let mut updated = String::with_capacity(text.len() - span.len() + json.len());
                updated.push_str(&text[..span.start]);
                updated.push_str(&json);
                updated.push_str(&text[span.end..]);
                Ok(updated)
            }
            None => Ok(format!("{}\n{}\n*/\n{}", self.open_tag(), json, text)),
        }
    }

    /// Reads `path` and parses its embedded metadata.
    pub fn extract_file(&self, path: &NormalizedPath) -> Result<Option<Value>> {
        let text = io::read_text(path)?;
        self.extract(&text).map_err(|e| match e {
            Error::MalformedJson(source) => Error::MalformedJsonInFile {
                path: path.to_native(),
                source,
            },
            other => other,
        })
    }

    /// Stores `data` in the metadata comment of `path`.
    ///
    /// The file is re-read right before writing so edits made to the rest of
    /// the file since it was last read survive.
    pub fn save_file(&self, path: &NormalizedPath, data: &Value) -> Result<()> {
        let text = io::read_text(path)?;
        let updated = self.write(&text, data)?;
        tracing::debug!(path = %path, "Saving embedded metadata");
        io::write_text(path, &updated)?;
        Ok(())
    }
}

/// Parses the `/*package.json` metadata embedded in `text`.
pub fn extract(text: &str) -> Result<Option<Value>> {
    default_marker().extract(text)
}

/// Returns `text` with `data` stored in its `/*package.json` comment.
pub fn write(text: &str, data: &Value) -> Result<String> {
    default_marker().write(text, data)
}

/// Reads `path` and parses its `/*package.json` metadata.
pub fn extract_from_file(path: &NormalizedPath) -> Result<Option<Value>> {
    default_marker().extract_file(path)
}

/// Stores `data` in the `/*package.json` comment of `path`.
pub fn save_to_file(path: &NormalizedPath, data: &Value) -> Result<()> {
    default_marker().save_file(path, data)
}
