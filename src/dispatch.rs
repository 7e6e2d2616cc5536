//! Emit path: glue between the log macros and the formatter/sink.

use std::fmt;

use crate::domain::{LogRecord, Severity};
use crate::sink::{self, Stream};
use crate::{clock, config, format};

/// Call-site location captured by the log macros. `file` and `line` come
/// from `file!()`/`line!()`, `function` from the enclosing-function capture,
/// so the location is always the caller's.
#[derive(Debug, Clone, Copy)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

/// Formats and writes one log line.
///
/// Called by the macros after both the static and the runtime filter have
/// passed; the timestamp is captured here so suppressed calls never touch
/// the clock.
pub fn emit(severity: Severity, site: CallSite, args: fmt::Arguments<'_>) {
    let timestamp = clock::now_formatted();
    let message = args.to_string();
    let record = LogRecord {
        severity,
        timestamp: &timestamp,
        file: site.file,
        line: site.line,
        function: site.function,
        message: &message,
    };
    let line = format::render_line(&record, config::color_enabled());
    sink::write_line(Stream::for_severity(severity), &line);
}
