//! Output channels for finished log lines.
//!
//! Severities route to one of two streams: `Error` and `Fatal` to the error
//! stream, everything else to standard output. By default the streams are
//! the process console handles; [`set_output`] and [`set_error_output`]
//! install caller-supplied writers (log capture, tests), and [`reset`]
//! restores the consoles.
//!
//! A single mutex serializes the `write_all` of each finished line, so
//! concurrent callers cannot interleave partial lines. Rendering happens
//! before the lock is taken. Write failures are swallowed: logging is
//! best-effort and never panics or returns an error to the caller.

use std::io::{self, Write};

use parking_lot::Mutex;

use crate::domain::Severity;

/// The two console streams a line can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Stream the given severity routes to.
    pub const fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error | Severity::Fatal => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

struct Writers {
    out: Option<Box<dyn Write + Send>>,
    err: Option<Box<dyn Write + Send>>,
}

static WRITERS: Mutex<Writers> = Mutex::new(Writers {
    out: None,
    err: None,
});

/// Replaces the standard-output channel with a caller-supplied writer.
pub fn set_output(writer: Box<dyn Write + Send>) {
    WRITERS.lock().out = Some(writer);
}

/// Replaces the error channel with a caller-supplied writer.
pub fn set_error_output(writer: Box<dyn Write + Send>) {
    WRITERS.lock().err = Some(writer);
}

/// Restores both channels to the process console streams.
pub fn reset() {
    let mut writers = WRITERS.lock();
    writers.out = None;
    writers.err = None;
}

/// Writes one finished line to the given stream.
pub fn write_line(stream: Stream, line: &str) {
    let mut writers = WRITERS.lock();
    let result = match stream {
        Stream::Stdout => match writers.out.as_mut() {
            Some(writer) => writer
                .write_all(line.as_bytes())
                .and_then(|_| writer.flush()),
            None => io::stdout().lock().write_all(line.as_bytes()),
        },
        Stream::Stderr => match writers.err.as_mut() {
            Some(writer) => writer
                .write_all(line.as_bytes())
                .and_then(|_| writer.flush()),
            None => io::stderr().lock().write_all(line.as_bytes()),
        },
    };
    // Best-effort contract: a failed write drops the line, nothing more.
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_and_fatal_route_to_stderr() {
        assert_eq!(Stream::for_severity(Severity::Error), Stream::Stderr);
        assert_eq!(Stream::for_severity(Severity::Fatal), Stream::Stderr);
    }

    #[test]
    fn lower_severities_route_to_stdout() {
        for severity in [
            Severity::Trace,
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
        ] {
            assert_eq!(Stream::for_severity(severity), Stream::Stdout);
        }
    }
}
