use super::severity::Severity;

/// A fully captured log call, ready for the line formatter.
///
/// Created in the dispatch path, consumed immediately, never stored. The
/// fields borrow from the dispatch stack frame, which outlives the render.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub timestamp: &'a str,
    pub file: &'a str,
    pub line: u32,
    pub function: &'a str,
    pub message: &'a str,
}
