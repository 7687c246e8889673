//! Locating the embedded metadata comment in source text.
//!
//! A metadata comment has the shape:
//! ```text
//! /*package.json
//! { "name": "widget" }
//! */
//! ```
//! Only the first opening marker in a text is considered.

use crate::error::{Error, Result};
use crate::matcher::find_matching_pair;
use pkgmeta_fs::MetadataName;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Keyword used by the default marker.
pub const DEFAULT_KEYWORD: &str = MetadataName::CommentKeyword.as_str();

/// Whitespace then `*/`, anchored right after the JSON payload.
static CLOSE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*/").expect("Invalid close marker regex"));

static DEFAULT_MARKER: LazyLock<CommentMarker> = LazyLock::new(|| {
    CommentMarker::new(DEFAULT_KEYWORD).expect("Invalid default comment keyword")
});

/// Offsets of a metadata comment and its JSON payload.
///
/// All offsets are byte offsets into the searched text. `json_end` is the
/// offset of the closing brace itself. A comment is only usable when
/// `comment_end` is set; the other fields may be partially filled for a
/// malformed comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetadataComment {
    pub comment_start: Option<usize>,
    pub comment_end: Option<usize>,
    pub json_start: Option<usize>,
    pub json_end: Option<usize>,
}

impl MetadataComment {
    /// Whether a complete comment with a balanced payload was found.
    pub fn is_valid(&self) -> bool {
        self.comment_end.is_some()
    }

    /// Byte range of the JSON payload, both braces included.
    pub fn json_span(&self) -> Option<Range<usize>> {
        self.comment_end?;
        Some(self.json_start?..self.json_end? + 1)
    }

    /// Byte range of the whole comment, markers included.
    pub fn comment_span(&self) -> Option<Range<usize>> {
        Some(self.comment_start?..self.comment_end?)
    }
}

/// Recognizer for metadata comments tagged with a given keyword.
///
/// Holds only compiled patterns, so a marker can be shared freely and every
/// call is independent of the previous one.
#[derive(Debug, Clone)]
pub struct CommentMarker {
    keyword: String,
    open: Regex,
}

impl CommentMarker {
    /// Builds a marker for `/*<keyword>` comments.
    ///
    /// # Errors
    /// Returns `Error::EmptyKeyword` for an empty keyword.
    pub fn new(keyword: impl Into<String>) -> Result<Self> {
        let keyword = keyword.into();
        if keyword.trim().is_empty() {
            return Err(Error::EmptyKeyword);
        }

        let pattern = format!(r"/\*\s*{}\s*", regex::escape(&keyword));
        let open = Regex::new(&pattern).map_err(|source| Error::InvalidKeyword {
            keyword: keyword.clone(),
            source,
        })?;

        Ok(Self { keyword, open })
    }

    /// The keyword this marker recognizes.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The text written before the payload when a new comment is inserted.
    pub(crate) fn open_tag(&self) -> String {
        format!("/*{} ", self.keyword)
    }

    /// Finds the metadata comment in `text`.
    ///
    /// A missing marker is not an error: the returned value simply has no
    /// offsets set. A marker whose payload is unbalanced, or whose payload
    /// is not followed by `*/` (whitespace aside), yields a comment without
    /// `comment_end`.
    ///
    /// # Example
    /// ```
    /// use pkgmeta_blocks::locator::CommentMarker;
    ///
    /// let marker = CommentMarker::new("package.json").unwrap();
    /// let comment = marker.locate("/*package.json {\"a\": 1} */\nvar x;");
    /// assert!(comment.is_valid());
    /// assert_eq!(comment.json_span(), Some(15..23));
    /// ```
    pub fn locate(&self, text: &str) -> MetadataComment {
        let mut result = MetadataComment::default();

        let Some(open) = self.open.find(text) else {
            tracing::trace!(keyword = %self.keyword, "No metadata comment marker");
            return result;
        };
        result.comment_start = Some(open.start());

        let Some(pair) = find_matching_pair(text, '{', '}', open.end()) else {
            tracing::debug!(offset = open.start(), "Metadata comment has no JSON payload");
            return result;
        };
        result.json_start = Some(pair.start);
        result.json_end = pair.end;

        let Some(json_end) = pair.end else {
            tracing::debug!(offset = pair.start, "Metadata comment payload is unbalanced");
            return result;
        };

        let after = json_end + 1;
        match CLOSE_MARKER_REGEX.find(&text[after..]) {
            Some(close) => result.comment_end = Some(after + close.end()),
            None => {
                tracing::debug!(offset = after, "Metadata comment is not closed after its payload");
            }
        }

        result
    }
}

impl Default for CommentMarker {
    fn default() -> Self {
        DEFAULT_MARKER.clone()
    }
}

/// The shared marker for `/*package.json` comments.
pub fn default_marker() -> &'static CommentMarker {
    &DEFAULT_MARKER
}

/// Finds the `/*package.json` comment in `text`.
pub fn locate(text: &str) -> MetadataComment {
    DEFAULT_MARKER.locate(text)
}
