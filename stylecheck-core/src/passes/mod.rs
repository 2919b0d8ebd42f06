// stylecheck-core/src/passes/mod.rs
//! The ordered elision passes of the sanitizer.
//!
//! Each pass is an explicit linear scanner implementing
//! [`crate::elide::RegionMatcher`]; none of them uses a backtracking pattern
//! engine. Ordering matters and is owned by [`crate::sanitizer`]: literals
//! are erased first so that comment- or macro-like text inside a string can
//! never be mistaken for a real comment or macro.

pub mod comments;
pub mod literals;
pub mod macros;

/// True for whitespace that does not break a line: space, tab, carriage
/// return, form feed.
pub(crate) fn is_horizontal_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\x0c')
}
