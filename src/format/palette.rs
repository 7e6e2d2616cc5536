//! Truecolor ANSI sequences, one per severity plus the field colors.
//!
//! Format: `\x1b[38;2;<r>;<g>;<b>m` foreground, reset with `\x1b[0m`.

use crate::domain::Severity;

/// ANSI reset sequence.
pub const RESET: &str = "\x1b[0m";

pub const TRACE: &str = "\x1b[38;2;175;238;238m";
pub const DEBUG: &str = "\x1b[38;2;135;206;250m";
pub const INFO: &str = "\x1b[38;2;144;238;144m";
pub const WARNING: &str = "\x1b[38;2;255;223;0m";
pub const ERROR: &str = "\x1b[38;2;255;69;0m";
pub const FATAL: &str = "\x1b[38;2;139;0;0m";

pub const TIMESTAMP: &str = "\x1b[38;2;119;136;153m";
pub const FILE: &str = "\x1b[38;2;0;191;255m";
pub const FUNCTION: &str = "\x1b[38;2;186;85;211m";

/// Color applied to the severity tag.
pub const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        // Notset never reaches the formatter; give it the reset sequence.
        Severity::Notset => RESET,
        Severity::Trace => TRACE,
        Severity::Debug => DEBUG,
        Severity::Info => INFO,
        Severity::Warning => WARNING,
        Severity::Error => ERROR,
        Severity::Fatal => FATAL,
    }
}
