//! Process-wide logger configuration.
//!
//! One setting pair: the minimum severity threshold and the color flag.
//! [`init`] applies both exactly once per process; the setters exist as the
//! documented extension for tests and late adjustments. Readers sit on the
//! hot path of every log call, so the state lives in relaxed atomics rather
//! than behind a lock.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::domain::{LoggerError, Severity};

/// Logger settings applied by [`init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Minimum severity that will be emitted.
    pub threshold: Severity,
    /// Wrap output fields in ANSI color sequences.
    pub color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            threshold: Severity::Debug,
            color: true,
        }
    }
}

/// Compile-time severity floor selected via the `static-threshold-*` cargo
/// features. Calls below this floor are removed from optimized builds; with
/// no feature enabled the floor is `Notset` and runtime filtering governs
/// alone. When several features are enabled the strictest wins.
pub const STATIC_THRESHOLD: Severity = static_threshold();

const fn static_threshold() -> Severity {
    if cfg!(feature = "static-threshold-fatal") {
        Severity::Fatal
    } else if cfg!(feature = "static-threshold-error") {
        Severity::Error
    } else if cfg!(feature = "static-threshold-warning") {
        Severity::Warning
    } else if cfg!(feature = "static-threshold-info") {
        Severity::Info
    } else if cfg!(feature = "static-threshold-debug") {
        Severity::Debug
    } else if cfg!(feature = "static-threshold-trace") {
        Severity::Trace
    } else {
        Severity::Notset
    }
}

static INITIALIZED: AtomicBool = AtomicBool::new(false);
static THRESHOLD: AtomicU8 = AtomicU8::new(Severity::Debug as u8);
static COLOR: AtomicBool = AtomicBool::new(true);

/// Applies the configuration. Succeeds exactly once per process; every later
/// call returns [`LoggerError::AlreadyInitialized`] and changes nothing.
pub fn init(config: LoggerConfig) -> Result<(), LoggerError> {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(LoggerError::AlreadyInitialized);
    }
    THRESHOLD.store(config.threshold as u8, Ordering::Relaxed);
    COLOR.store(config.color, Ordering::Relaxed);
    Ok(())
}

/// Current runtime threshold. `Debug` until configured otherwise.
pub fn threshold() -> Severity {
    Severity::from_u8(THRESHOLD.load(Ordering::Relaxed))
}

/// Overrides the runtime threshold.
pub fn set_threshold(threshold: Severity) {
    THRESHOLD.store(threshold as u8, Ordering::Relaxed);
}

/// Whether output lines carry ANSI color sequences.
pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

/// Overrides the color flag.
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}
