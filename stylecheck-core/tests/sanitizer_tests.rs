// stylecheck-core/tests/sanitizer_tests.rs
//! Integration tests for the sanitization pipeline over its public API.

use stylecheck_core::passes::comments::erase_comments;
use stylecheck_core::passes::literals::erase_literals;
use stylecheck_core::sanitize;

fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

#[test_log::test]
fn line_count_is_preserved_for_assorted_inputs() {
    let inputs = [
        "",
        "int x;",
        "int x;\n",
        "a = \"multi\nline\nstring\";\nb;",
        "/* block\nover\nlines */\ncode;",
        "#define A(x) \\\n  (x)\\\n  + 1\ndone;",
        "s = \"/* fake */ // also fake\";\n'c'\nunterminated \"",
        "\r\nwindows\r\nline endings\r\n",
    ];
    for input in inputs {
        let source = sanitize(input);
        assert_eq!(
            line_count(source.raw()),
            line_count(source.clean()),
            "line count changed for input {input:?}",
        );
        assert_eq!(source.raw_lines().len(), source.clean_lines().len());
    }
}

#[test]
fn literal_pass_is_idempotent() {
    let input = "a = \"one\"; b = 'c'; d = \"two\nlines\";";
    let once = erase_literals(input);
    assert_eq!(erase_literals(&once), once);
}

#[test]
fn comment_pass_is_idempotent() {
    let input = "a; /* x */ b; // y\nc;";
    let once = erase_comments(input);
    assert_eq!(erase_comments(&once), once);
}

#[test]
fn comment_inside_string_is_never_a_comment() {
    // The literal pass runs first, so the embedded /* fake */ is erased as
    // string content and the comment pass finds nothing.
    let source = sanitize("x = \"/* fake */\";");
    assert_eq!(source.clean(), "x = xx;");
}

#[test]
fn macro_inside_string_is_never_a_macro() {
    let source = sanitize("s = \"#define X 1\"; int k;");
    assert_eq!(source.clean(), "s = xx; int k;");
}

#[test]
fn line_comment_removal_keeps_two_lines() {
    let source = sanitize("int x; // comment\nint y;");
    assert_eq!(source.clean(), "int x;\nint y;");
    assert_eq!(source.clean_lines(), vec!["int x;", "int y;"]);
}

#[test]
fn block_comment_preserves_line_count() {
    let source = sanitize("a;\n/* multi\nline */\nb;");
    assert_eq!(source.clean_lines(), vec!["a;", "", "", "b;"]);
    assert_eq!(source.raw_lines().len(), 4);
}

#[test]
fn macro_elision_over_continuation() {
    let source = sanitize("#define FOO(x) \\\n  (x+1)\nint y;");
    assert_eq!(source.clean_lines(), vec!["", "", "int y;"]);
}

#[test]
fn unterminated_string_is_a_no_op() {
    let input = "char *s = \"unterminated;";
    let source = sanitize(input);
    assert_eq!(source.clean(), input);
}

#[test]
fn unterminated_char_stays_on_its_line() {
    let source = sanitize("char c = 'a;\nint x = 1;");
    assert_eq!(source.clean(), "char c = 'a;\nint x = 1;");
}

#[test]
fn escaped_quote_keeps_string_open_until_real_terminator() {
    let source = sanitize("s = \"a\\\"b\"; t;");
    assert_eq!(source.clean(), "s = xx; t;");
}

#[test]
fn even_backslash_run_terminates_string() {
    let source = sanitize("s = \"path\\\\\"; t;");
    assert_eq!(source.clean(), "s = xx; t;");
}

#[test]
fn carriage_returns_are_not_trimmed_from_lines() {
    let source = sanitize("int x;\r\nint y;\r\n");
    assert_eq!(source.raw_lines(), vec!["int x;\r", "int y;\r", ""]);
    assert_eq!(source.clean_lines(), vec!["int x;\r", "int y;\r", ""]);
}

#[test]
fn raw_text_is_returned_unmodified() {
    let input = "a; // b\n\"c\"\n";
    let source = sanitize(input);
    assert_eq!(source.raw(), input);
}
