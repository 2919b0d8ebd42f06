// stylecheck-core/src/passes/comments.rs
//! Block and line comment elision.
//!
//! Block comments go through the eliding primitive with the empty marker:
//! the comment and any horizontal whitespace leading into it are deleted
//! outright, leaving only the preserved line breaks, so a comment-only line
//! becomes a blank line rather than a line holding a placeholder.
//!
//! Line comments cannot overlap or interact across lines, so they are
//! removed in a single per-line pass with no fixed-point iteration.
//!
//! License: MIT OR APACHE 2.0

use crate::elide::{elide_regions, Region, RegionMatcher};
use crate::passes::is_horizontal_whitespace;

/// Matches a `/* ... */` block comment together with the horizontal
/// whitespace immediately before it. Termination is non-greedy: the region
/// ends at the first `*/`, never a later one. The region may span multiple
/// lines.
pub struct BlockCommentMatcher;

impl RegionMatcher for BlockCommentMatcher {
    fn find_region(&self, text: &str) -> Option<Region> {
        let open = text.find("/*")?;
        // No close after the first open means no later comment can close
        // either; the unterminated text stays as-is.
        let close = open + 2 + text[open + 2..].find("*/")?;

        let bytes = text.as_bytes();
        let mut start = open;
        while start > 0 && is_horizontal_whitespace(bytes[start - 1]) {
            start -= 1;
        }
        Some(Region::new(start, close + 2))
    }
}

/// Erases block comments (via the fixed-point primitive), then strips line
/// comments from each line.
pub fn erase_comments(text: &str) -> String {
    let erased = elide_regions(text, &BlockCommentMatcher, "");

    let mut result = String::with_capacity(erased.len());
    for (i, line) in erased.split('\n').enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(strip_line_comment(line));
    }
    result
}

/// Returns `line` with a trailing `// ...` comment removed, including the
/// horizontal whitespace that leads into it. The line terminator is not
/// part of the line and is untouched.
fn strip_line_comment(line: &str) -> &str {
    let Some(pos) = line.find("//") else {
        return line;
    };
    let bytes = line.as_bytes();
    let mut start = pos;
    while start > 0 && is_horizontal_whitespace(bytes[start - 1]) {
        start -= 1;
    }
    &line[..start]
}
