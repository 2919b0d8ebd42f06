// stylecheck-core/src/sanitizer.rs
//! The sanitization pipeline: literals → comments → macros.
//!
//! One pure function over one block of text. The sanitizer keeps no state
//! between invocations and performs no I/O; reading files is the caller's
//! concern.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::passes::comments::erase_comments;
use crate::passes::literals::erase_literals;
use crate::passes::macros::erase_macros;

/// A source file's raw text together with its sanitized form.
///
/// Line `i` of [`SourceText::raw_lines`] and line `i` of
/// [`SourceText::clean_lines`] always refer to the same physical source
/// line: the pipeline never adds or removes a line break, so diagnostics
/// computed against the clean text can be reported against the raw file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    raw: String,
    clean: String,
}

impl SourceText {
    /// The unmodified input text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The sanitized text: literals, comments, and macro bodies erased.
    pub fn clean(&self) -> &str {
        &self.clean
    }

    /// The raw text split on `\n`. No `\r` trimming is performed.
    pub fn raw_lines(&self) -> Vec<&str> {
        self.raw.split('\n').collect()
    }

    /// The sanitized text split on `\n`; always the same length as
    /// [`SourceText::raw_lines`].
    pub fn clean_lines(&self) -> Vec<&str> {
        self.clean.split('\n').collect()
    }

    /// Iterates over `(raw, clean)` line pairs.
    pub fn lines(&self) -> impl Iterator<Item = (&str, &str)> {
        self.raw.split('\n').zip(self.clean.split('\n'))
    }
}

/// Reduces `raw` to a form safe for pattern-based style rules.
///
/// String and character literals are erased first, so comment- or
/// macro-looking text inside a literal is never seen by the later passes;
/// then comments, then `#define` bodies. Unterminated constructs never
/// match and are left untouched — there is no recovery or truncation.
///
/// The output contains exactly as many line breaks as the input.
pub fn sanitize(raw: &str) -> SourceText {
    debug!("sanitizing {} byte(s)", raw.len());

    let clean = erase_literals(raw);
    let clean = erase_comments(&clean);
    let clean = erase_macros(&clean);

    debug_assert_eq!(
        raw.split('\n').count(),
        clean.split('\n').count(),
        "sanitization must preserve the line count",
    );

    SourceText {
        raw: raw.to_string(),
        clean,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_runs_all_three_passes() {
        let source = sanitize("s = \"text\"; /* c */ x; // t\n#define A 1\ny;");
        assert_eq!(source.clean(), "s = xx; x;\n\ny;");
    }

    #[test]
    fn line_views_stay_in_step() {
        let source = sanitize("a;\n/* two\nlines */\nb; // gone");
        let raw = source.raw_lines();
        let clean = source.clean_lines();
        assert_eq!(raw.len(), clean.len());
        assert_eq!(raw[3], "b; // gone");
        assert_eq!(clean[3], "b;");
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        let source = sanitize("");
        assert_eq!(source.raw_lines(), vec![""]);
        assert_eq!(source.clean_lines(), vec![""]);
    }
}
