// stylecheck-core/src/passes/literals.rs
//! String and character literal elision.
//!
//! This pass must run before the comment and macro passes: anything that
//! looks like a comment or a `#define` inside a literal is erased together
//! with the literal and is therefore invisible to the later passes.
//!
//! Termination uses escape parity: a closing quote is escaped (and does not
//! terminate the literal) exactly when it is preceded by an odd number of
//! consecutive backslashes. `"a\"b"` stays open through the escaped quote;
//! `"a\\"` terminates because the two backslashes escape each other.
//!
//! License: MIT OR APACHE 2.0

use crate::elide::{elide_regions, Region, RegionMatcher};

/// Marker written at both boundaries of an erased literal. A visible
/// placeholder (rather than the empty string) keeps the spacing context
/// around the former literal, so adjacency-sensitive style rules still see
/// a token there.
pub const LITERAL_MARKER: &str = "x";

/// Matches a double-quoted string literal. The literal may span multiple
/// physical lines; every line break inside it counts toward the preserved
/// newline total.
pub struct StringLiteralMatcher;

impl RegionMatcher for StringLiteralMatcher {
    fn find_region(&self, text: &str) -> Option<Region> {
        find_quoted(text, b'"', false)
    }
}

/// Matches a single-quoted character literal, confined to one physical
/// line: the closing quote is never searched for past a line break, so an
/// unterminated quote on one line is simply skipped instead of bleeding
/// into subsequent lines.
///
/// The asymmetry with [`StringLiteralMatcher`] (strings span lines, chars
/// do not) is intentional and must be kept.
pub struct CharLiteralMatcher;

impl RegionMatcher for CharLiteralMatcher {
    fn find_region(&self, text: &str) -> Option<Region> {
        find_quoted(text, b'\'', true)
    }
}

/// Erases every string literal, then every character literal, replacing
/// each with [`LITERAL_MARKER`] at both boundaries.
pub fn erase_literals(text: &str) -> String {
    let erased = elide_regions(text, &StringLiteralMatcher, LITERAL_MARKER);
    elide_regions(&erased, &CharLiteralMatcher, LITERAL_MARKER)
}

/// Finds the leftmost complete quoted region.
///
/// The opening quote needs no parity check (a stray backslash-quote outside
/// a literal does not occur in practice); the closing quote must be
/// unescaped. When `single_line` is set, a candidate opening quote with no
/// closing quote before the next line break is skipped and the scan resumes
/// at the following quote.
fn find_quoted(text: &str, quote: u8, single_line: bool) -> Option<Region> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == quote {
            if let Some(close) = find_closing_quote(bytes, i, quote, single_line) {
                return Some(Region::new(i, close + 1));
            }
            if !single_line {
                // An unescaped quote anywhere after this one would have
                // closed it, so no later multi-line literal can terminate
                // either.
                return None;
            }
        }
        i += 1;
    }
    None
}

/// Scans forward from the quote at `open` for the first unescaped closing
/// quote, tracking the parity of the immediately preceding backslash run.
fn find_closing_quote(bytes: &[u8], open: usize, quote: u8, single_line: bool) -> Option<usize> {
    let mut backslashes = 0usize;
    let mut j = open + 1;
    while j < bytes.len() {
        let byte = bytes[j];
        if single_line && byte == b'\n' {
            return None;
        }
        if byte == b'\\' {
            backslashes += 1;
        } else {
            if byte == quote && backslashes % 2 == 0 {
                return Some(j);
            }
            backslashes = 0;
        }
        j += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erases_simple_string() {
        assert_eq!(erase_literals(r#"s = "hello";"#), "s = xx;");
    }

    #[test]
    fn escaped_quote_keeps_string_open() {
        // "a\"b" is one literal; the escaped quote does not terminate it.
        assert_eq!(erase_literals(r#"s = "a\"b";"#), "s = xx;");
    }

    #[test]
    fn double_backslash_before_quote_terminates() {
        // "a\\" terminates at the quote: the backslashes escape each other.
        assert_eq!(erase_literals(r#"s = "a\\";"#), "s = xx;");
    }

    #[test]
    fn odd_backslash_run_does_not_terminate() {
        // Three backslashes leave the quote escaped; with no real
        // terminator afterwards the literal never matches.
        let input = r#"s = "a\\\";"#;
        assert_eq!(erase_literals(input), input);
    }

    #[test]
    fn string_spans_lines() {
        let input = "a = \"one\ntwo\";\nb;";
        let output = erase_literals(input);
        assert_eq!(output, "a = x\nx;\nb;");
        assert_eq!(input.split('\n').count(), output.split('\n').count());
    }

    #[test]
    fn unterminated_string_is_untouched() {
        let input = "char *s = \"unterminated;";
        assert_eq!(erase_literals(input), input);
    }

    #[test]
    fn char_literal_is_erased() {
        assert_eq!(erase_literals("c = 'a';"), "c = xx;");
    }

    #[test]
    fn char_literal_with_escaped_quote() {
        assert_eq!(erase_literals(r"c = '\'';"), "c = xx;");
    }

    #[test]
    fn char_literal_never_crosses_a_line() {
        // The quote on line one has no terminator on its own line; the scan
        // resumes at the next quote instead of spanning the break.
        let input = "' no close\n'c'";
        assert_eq!(erase_literals(input), "' no close\nxx");
    }

    #[test]
    fn string_pass_runs_before_char_pass() {
        // A double quote inside a char literal: the string matcher finds no
        // terminating double quote and backs off, then the char matcher
        // erases the whole literal.
        assert_eq!(erase_literals("c = '\"';"), "c = xx;");
    }

    #[test]
    fn erasure_is_idempotent() {
        let once = erase_literals("a = \"x\"; b = 'y'; // \"not reached\"");
        let twice = erase_literals(&once);
        assert_eq!(once, twice);
    }
}
