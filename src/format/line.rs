use std::path::Path;

use super::palette;
use crate::domain::LogRecord;

/// Renders one log record into the console line, newline included:
///
/// ```text
/// [<timestamp>] <TAG    > | <basename> (<line>) | in function <function>: <message>
/// ```
///
/// The tag is padded to 7 characters, the line number to 4 digits, and the
/// file is reduced to its basename. With `color` set, the timestamp, tag,
/// file and function fields are each wrapped in their palette sequence.
/// Padding applies to the visible tag text before the escapes are attached
/// so colored and plain lines align.
pub fn render_line(record: &LogRecord<'_>, color: bool) -> String {
    let file = basename(record.file);
    let tag = record.severity.tag();
    if color {
        format!(
            "[{}{}{}] {}{:<7}{} | {}{} ({:04}){} | in function {}{}{}: {}\n",
            palette::TIMESTAMP,
            record.timestamp,
            palette::RESET,
            palette::severity_color(record.severity),
            tag,
            palette::RESET,
            palette::FILE,
            file,
            record.line,
            palette::RESET,
            palette::FUNCTION,
            record.function,
            palette::RESET,
            record.message,
        )
    } else {
        format!(
            "[{}] {:<7} | {} ({:04}) | in function {}: {}\n",
            record.timestamp, tag, file, record.line, record.function, record.message,
        )
    }
}

/// Final path segment, directory components stripped.
fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
