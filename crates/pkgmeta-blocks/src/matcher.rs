//! Balanced delimiter matching.
//!
//! Finds the extent of a bracketed literal inside arbitrary text, skipping
//! delimiters that appear inside quoted string literals.

/// Offsets of an opening delimiter and its balancing closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedPair {
    /// Byte offset of the opening delimiter.
    pub start: usize,
    /// Byte offset of the balancing closing delimiter, `None` if unbalanced.
    pub end: Option<usize>,
}

/// Finds the first `open` at or after byte offset `from` and its balancing `close`.
///
/// Returns `None` when no `open` occurs at or after `from`, or when `from`
/// is past the end of `text` or not on a character boundary. Inside `"` or
/// `'` quoted literals delimiters are ignored and `\` escapes the next
/// character.
///
/// # Example
/// ```
/// use pkgmeta_blocks::matcher::find_matching_pair;
///
/// let text = r#"x = {"a": "}", "b": {}};"#;
/// let pair = find_matching_pair(text, '{', '}', 0).unwrap();
/// assert_eq!(pair.start, 4);
/// assert_eq!(pair.end, Some(22));
/// ```
pub fn find_matching_pair(text: &str, open: char, close: char, from: usize) -> Option<MatchedPair> {
    let start = from + text.get(from..)?.find(open)?;

    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }

        if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                return Some(MatchedPair {
                    start,
                    end: Some(start + offset),
                });
            }
        } else if ch == '"' || ch == '\'' {
            quote = Some(ch);
        }
    }

    Some(MatchedPair { start, end: None })
}
