// stylecheck-core/src/passes/macros.rs
//! `#define` body elision.
//!
//! Macro bodies routinely contain constructs that are fine inside macro
//! text but would trip ordinary style rules (unbalanced braces, odd token
//! adjacency), so the whole region is removed rather than modeled. The
//! region covers the directive, the macro name and body on its line, and
//! every backslash-continued follow-up line; continuation lines become
//! blank lines. No validation of the body is attempted.
//!
//! License: MIT OR APACHE 2.0

use crate::elide::{elide_regions, Region, RegionMatcher};

const DEFINE: &str = "#define";

/// Matches a `#define` region: the directive, at least one whitespace
/// character, a non-empty run of characters that are neither backslash nor
/// line break, then zero or more `\`-newline continuations each followed by
/// another non-empty run. A `#define` not followed by whitespace and a body
/// is not a match and is skipped.
pub struct MacroMatcher;

impl RegionMatcher for MacroMatcher {
    fn find_region(&self, text: &str) -> Option<Region> {
        let bytes = text.as_bytes();
        let mut from = 0;
        while let Some(found) = text[from..].find(DEFINE) {
            let start = from + found;
            if let Some(end) = match_macro_body(bytes, start + DEFINE.len()) {
                return Some(Region::new(start, end));
            }
            from = start + DEFINE.len();
        }
        None
    }
}

/// Erases every `#define` region with the empty marker, keeping only the
/// line breaks the region contained.
pub fn erase_macros(text: &str) -> String {
    elide_regions(text, &MacroMatcher, "")
}

/// Matches the remainder of a macro region starting just past `#define`.
/// Returns the end offset, or `None` when the directive has no whitespace
/// or no body.
fn match_macro_body(bytes: &[u8], mut i: usize) -> Option<usize> {
    let whitespace_start = i;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if i == whitespace_start {
        return None;
    }

    let run_end = body_run(bytes, i);
    if run_end == i {
        return None;
    }
    i = run_end;

    // A continuation is a backslash immediately followed by a line break; a
    // bare backslash anywhere else ends the region before the backslash.
    while i + 1 < bytes.len() && bytes[i] == b'\\' && bytes[i + 1] == b'\n' {
        let next_run = body_run(bytes, i + 2);
        if next_run == i + 2 {
            break;
        }
        i = next_run;
    }
    Some(i)
}

/// Consumes characters that are neither backslash nor line break.
fn body_run(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i] != b'\\' && bytes[i] != b'\n' {
        i += 1;
    }
    i
}
