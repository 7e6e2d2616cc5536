use prism_log::format::render_line;
use prism_log::{LogRecord, Severity};

fn record(severity: Severity) -> LogRecord<'static> {
    LogRecord {
        severity,
        timestamp: "2024-01-02 03:04:05",
        file: "a/b/c/sample.c",
        line: 42,
        function: "main",
        message: "Value of x: 4",
    }
}

#[test]
fn plain_line_layout_is_exact() {
    let line = render_line(&record(Severity::Info), false);
    assert_eq!(
        line,
        "[2024-01-02 03:04:05] INFO    | sample.c (0042) | in function main: Value of x: 4\n"
    );
}

#[test]
fn warning_tag_fills_the_seven_char_field() {
    let line = render_line(&record(Severity::Warning), false);
    assert_eq!(
        line,
        "[2024-01-02 03:04:05] WARNING | sample.c (0042) | in function main: Value of x: 4\n"
    );
}

#[test]
fn file_field_is_always_the_basename() {
    for file in ["sample.c", "dir/sample.c", "a/b/c/sample.c"] {
        let mut rec = record(Severity::Info);
        rec.file = file;
        let line = render_line(&rec, false);
        assert!(
            line.contains("| sample.c (0042) |"),
            "path {file:?} rendered as {line:?}"
        );
        assert!(!line.contains('/'), "path {file:?} leaked into {line:?}");
    }
}

#[test]
fn line_numbers_pad_to_four_digits() {
    let mut rec = record(Severity::Info);
    rec.line = 7;
    assert!(render_line(&rec, false).contains("(0007)"));
    rec.line = 12345;
    assert!(render_line(&rec, false).contains("(12345)"));
}

#[test]
fn rendering_the_same_record_twice_is_byte_identical() {
    let rec = record(Severity::Error);
    assert_eq!(render_line(&rec, true), render_line(&rec, true));
    assert_eq!(render_line(&rec, false), render_line(&rec, false));
}

#[test]
fn colored_line_layout_is_exact() {
    let line = render_line(&record(Severity::Info), true);
    assert_eq!(
        line,
        concat!(
            "[\x1b[38;2;119;136;153m2024-01-02 03:04:05\x1b[0m] ",
            "\x1b[38;2;144;238;144mINFO   \x1b[0m | ",
            "\x1b[38;2;0;191;255msample.c (0042)\x1b[0m | in function ",
            "\x1b[38;2;186;85;211mmain\x1b[0m: Value of x: 4\n"
        )
    );
}

#[test]
fn colored_line_uses_the_severity_palette_entry() {
    let line = render_line(&record(Severity::Fatal), true);
    assert!(line.contains("\x1b[38;2;139;0;0mFATAL  \x1b[0m"));
}

#[test]
fn plain_line_carries_no_escape_sequences() {
    for severity in [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ] {
        assert!(!render_line(&record(severity), false).contains('\x1b'));
    }
}
