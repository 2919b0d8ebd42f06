// stylecheck/src/checks.rs
//! Line-based style checks run over sanitized sources.
//!
//! Every check detects on the sanitized line — semicolons or tabs inside
//! strings, comments, and macro bodies have already been erased and can
//! never misfire — and reports the raw line, so the diagnostic shows what
//! is actually in the file.

use stylecheck_core::SourceText;

use crate::diagnostics::Reporter;

/// Runs every check over one sanitized source.
pub fn run_all_checks(filename: &str, source: &SourceText, reporter: &Reporter) {
    check_multiple_statements(filename, source, reporter);
    check_tabs(filename, source, reporter);
}

/// Warns when a sanitized line contains more than one statement.
/// `for (;;)` headers legitimately carry two semicolons and are exempt.
pub fn check_multiple_statements(filename: &str, source: &SourceText, reporter: &Reporter) {
    for (i, (raw, clean)) in source.lines().enumerate() {
        let semicolons = clean.bytes().filter(|&b| b == b';').count();
        if semicolons > 1 && !clean.contains("for") {
            reporter.report_warning(
                "multiple_statements",
                filename,
                i + 1,
                "more than one statement on a single line",
                Some(raw.trim_end()),
            );
        }
    }
}

/// Warns when a sanitized line contains a tab character. Tabs inside string
/// literals are not style violations and are already invisible here.
pub fn check_tabs(filename: &str, source: &SourceText, reporter: &Reporter) {
    for (i, (raw, clean)) in source.lines().enumerate() {
        if clean.contains('\t') {
            reporter.report_warning(
                "tab_in_line",
                filename,
                i + 1,
                "tab character used for spacing",
                Some(raw.trim_end()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylecheck_core::sanitize;

    #[test]
    fn two_statements_on_one_line_warn() {
        let source = sanitize("int a = 1; int b = 2;\n");
        let reporter = Reporter::new();
        check_multiple_statements("t.cpp", &source, &reporter);
        assert_eq!(reporter.warning_count(), 1);
    }

    #[test]
    fn semicolons_inside_a_string_do_not_warn() {
        let source = sanitize("const char *s = \"a; b; c;\";\n");
        let reporter = Reporter::new();
        check_multiple_statements("t.cpp", &source, &reporter);
        assert_eq!(reporter.warning_count(), 0);
    }

    #[test]
    fn for_loop_header_is_exempt() {
        let source = sanitize("for (i = 0; i < n; ++i) {\n");
        let reporter = Reporter::new();
        check_multiple_statements("t.cpp", &source, &reporter);
        assert_eq!(reporter.warning_count(), 0);
    }

    #[test]
    fn semicolons_in_macro_body_do_not_warn() {
        let source = sanitize("#define STEP(x) do { a(x); b(x); } while (0)\n");
        let reporter = Reporter::new();
        check_multiple_statements("t.cpp", &source, &reporter);
        assert_eq!(reporter.warning_count(), 0);
    }

    #[test]
    fn tab_in_code_warns_but_tab_in_string_does_not() {
        let reporter = Reporter::new();
        check_tabs("t.cpp", &sanitize("int\tx;\n"), &reporter);
        assert_eq!(reporter.warning_count(), 1);

        let reporter = Reporter::new();
        check_tabs("t.cpp", &sanitize("s = \"a\tb\";\n"), &reporter);
        assert_eq!(reporter.warning_count(), 0);
    }

    #[test]
    fn warnings_point_at_the_right_line() {
        // Line 2 holds the violation; the reporter gets index + 1.
        let source = sanitize("int a;\nint b; int c;\n");
        let reporter = Reporter::new();
        run_all_checks("t.cpp", &source, &reporter);
        assert_eq!(reporter.warning_count(), 1);
    }
}
