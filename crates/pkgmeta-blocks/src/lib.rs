//! Embedded package metadata for single-file packages.
//!
//! A single-file package can carry its `package.json` content inside a
//! comment instead of a separate file:
//!
//! ```text
//! /*package.json
//! {
//!   "name": "widget"
//! }
//! */
//! var widget = {};
//! ```
//!
//! - [`matcher`] finds balanced `{ ... }` spans while skipping string literals.
//! - [`locator`] finds the comment and the offsets of its JSON payload.
//! - [`codec`] parses the payload and writes new data back, touching only
//!   the payload bytes.
//!
//! All text operations are pure functions over `&str`; the `*_file` helpers
//! add a read before and an atomic write after.

pub mod codec;
pub mod error;
pub mod locator;
pub mod matcher;

pub use codec::{extract, extract_from_file, save_to_file, to_pretty_json, write};
pub use error::{Error, Result};
pub use locator::{CommentMarker, DEFAULT_KEYWORD, MetadataComment, default_marker, locate};
pub use matcher::{MatchedPair, find_matching_pair};
