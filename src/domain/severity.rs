use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::error::LoggerError;

/// Ordered log severity used for filtering.
///
/// Declaration order equals numeric order equals filtering order. `Notset`
/// is only meaningful as a threshold, where it admits every severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    Notset = 0,
    Trace = 1,
    Debug = 2,
    Info = 3,
    Warning = 4,
    Error = 5,
    Fatal = 6,
}

impl Severity {
    /// Uppercase tag text rendered in the console line.
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Notset => "NOTSET",
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// True iff a call at this severity passes the given threshold.
    pub const fn should_log(self, threshold: Severity) -> bool {
        self as u8 >= threshold as u8
    }

    /// Decodes a value previously stored with `as u8`. Unknown values map to
    /// `Notset`.
    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            1 => Severity::Trace,
            2 => Severity::Debug,
            3 => Severity::Info,
            4 => Severity::Warning,
            5 => Severity::Error,
            6 => Severity::Fatal,
            _ => Severity::Notset,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notset" => Ok(Severity::Notset),
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(LoggerError::InvalidSeverity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_order_follows_declaration_order() {
        assert!(Severity::Notset < Severity::Trace);
        assert!(Severity::Trace < Severity::Debug);
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn from_u8_round_trips_every_severity() {
        for severity in [
            Severity::Notset,
            Severity::Trace,
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Fatal,
        ] {
            assert_eq!(Severity::from_u8(severity as u8), severity);
        }
    }

    #[test]
    fn from_u8_maps_unknown_values_to_notset() {
        assert_eq!(Severity::from_u8(7), Severity::Notset);
        assert_eq!(Severity::from_u8(255), Severity::Notset);
    }
}
