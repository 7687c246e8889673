//! Nested object access within metadata values.
//!
//! Paths are given as explicit segment slices (`&["volo", "dependencies"]`),
//! never parsed from dotted strings.

use crate::{Error, Result};
use serde_json::{Map, Value};

/// Returns the object at `segments` below `root`, creating missing objects.
///
/// A `null` root or a `null` segment is replaced by an empty object.
/// Sibling keys along the way are left untouched.
///
/// # Errors
/// Returns `Error::PathConflict` when the root or an existing segment holds
/// a value that is not an object.
///
/// # Example
/// ```
/// use pkgmeta_core::path::ensure_path;
/// use serde_json::json;
///
/// let mut data = json!({"name": "widget"});
/// ensure_path(&mut data, &["volo", "dependencies"])
///     .unwrap()
///     .insert("jquery".into(), json!("jquery.zip"));
/// assert_eq!(data["volo"]["dependencies"]["jquery"], "jquery.zip");
/// assert_eq!(data["name"], "widget");
/// ```
pub fn ensure_path<'a>(root: &'a mut Value, segments: &[&str]) -> Result<&'a mut Map<String, Value>> {
    if root.is_null() {
        *root = Value::Object(Map::new());
    }

    let mut current = match root {
        Value::Object(map) => map,
        _ => return Err(conflict(segments, 0)),
    };

    for (depth, segment) in segments.iter().enumerate() {
        let entry = current.entry(*segment).or_insert(Value::Null);
        if entry.is_null() {
            *entry = Value::Object(Map::new());
        }
        current = match entry {
            Value::Object(map) => map,
            _ => return Err(conflict(segments, depth + 1)),
        };
    }

    Ok(current)
}

/// Returns the value at `segments` below `root`, if every segment exists.
pub fn get_at_path<'a>(root: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(root, |value, segment| value.as_object()?.get(*segment))
}

fn conflict(segments: &[&str], depth: usize) -> Error {
    let path = if depth == 0 {
        "<root>".to_string()
    } else {
        segments[..depth].join(".")
    };
    Error::PathConflict { path }
}
