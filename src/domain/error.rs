use thiserror::Error;

/// Top-level error type for the logging facility.
///
/// Write and clock failures never surface here; those are swallowed in the
/// sink and clock paths so a log call cannot fail its caller.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,

    #[error("invalid severity name: {0}")]
    InvalidSeverity(String),
}
