#![warn(rust_2018_idioms)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::module_name_repetitions  // e.g. LoggerConfig in config module
)]

//! Leveled, colorized console logging behind six call-site macros.
//!
//! Every log call passes a severity filter (compile-time floor plus a
//! process-wide runtime threshold), then renders one line carrying the
//! timestamp, the colorized severity tag, the call site (file, line,
//! function) and the message. `Error` and `Fatal` land on the error stream,
//! everything else on standard output. Logging is best-effort: write and
//! clock failures are swallowed, never surfaced to the caller.
//!
//! ```
//! use prism_log::{LoggerConfig, Severity, info};
//!
//! prism_log::init(LoggerConfig {
//!     threshold: Severity::Info,
//!     color: false,
//! })
//! .unwrap();
//!
//! info!("Value of x: {}", 4);
//! ```

pub mod clock;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod format;
mod macros;
pub mod sink;
pub mod test_support;

// Re-export main types for easy access
pub use config::{
    LoggerConfig, STATIC_THRESHOLD, color_enabled, init, set_color, set_threshold, threshold,
};
pub use domain::{LogRecord, LoggerError, Severity};

/// Macro expansion internals; not part of the public API surface.
#[doc(hidden)]
pub mod __private {
    pub use crate::dispatch::{CallSite, emit};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
