// stylecheck-core/src/elide.rs
//! The region-eliding primitive shared by every sanitizer pass.
//!
//! A pass contributes a [`RegionMatcher`] that knows how to find one kind of
//! region (string literal, block comment, macro body). [`elide_regions`]
//! owns the replacement policy: every erased region is rewritten as
//! `marker + "\n" × (line breaks in the region) + marker`, so the output
//! always contains exactly as many line breaks as the input. This is the
//! load-bearing invariant of the whole sanitizer — downstream diagnostics
//! are reported by line number against the original file.
//!
//! License: MIT OR APACHE 2.0

use log::trace;

/// A contiguous byte span of text matched by a pass.
///
/// Regions are transient: a region is only meaningful for the exact buffer
/// it was found in and is discarded as soon as it has been replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Byte offset of the first character of the region.
    pub start: usize,
    /// Byte offset one past the last character of the region.
    pub end: usize,
}

impl Region {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Locates the leftmost complete region of one kind in a block of text.
///
/// Implementations must return the first (lowest `start`) region for which a
/// terminating delimiter exists; a region that never terminates before the
/// end of input is not a match and must be left unreported, so the text
/// stays unmodified. Returned offsets must sit on ASCII delimiter bytes and
/// are therefore always valid UTF-8 boundaries.
///
/// Matchers know nothing about each other or about the replacement policy;
/// they only answer "where is the next region".
pub trait RegionMatcher {
    fn find_region(&self, text: &str) -> Option<Region>;
}

/// Erases every occurrence of the matcher's region from `text`.
///
/// Each matched region is replaced by
/// `marker + "\n" × (line breaks inside the region) + marker`.
///
/// The loop re-runs the matcher against the full rewritten buffer after each
/// replacement instead of resuming where it left off: erasing a region can
/// unmask text that only now forms a match, so the substitution iterates to
/// a fixed point. Progress is guaranteed because every replacement removes
/// the delimiters that opened the matched region.
pub fn elide_regions(text: &str, matcher: &dyn RegionMatcher, marker: &str) -> String {
    let mut result = text.to_string();

    while let Some(region) = matcher.find_region(&result) {
        let newlines = result[region.start..region.end]
            .bytes()
            .filter(|&b| b == b'\n')
            .count();
        trace!(
            "eliding region {}..{} ({} line break(s))",
            region.start,
            region.end,
            newlines
        );

        let mut replacement = String::with_capacity(2 * marker.len() + newlines);
        replacement.push_str(marker);
        for _ in 0..newlines {
            replacement.push('\n');
        }
        replacement.push_str(marker);

        result.replace_range(region.start..region.end, &replacement);
    }

    result
}
