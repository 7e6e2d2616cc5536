//! Shared test support utilities.
//!
//! Provides `SharedBuffer`, a cloneable in-memory writer that tests install
//! via `sink::set_output`/`sink::set_error_output` to capture a console
//! stream and assert on the emitted bytes.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Cloneable in-memory writer capturing everything written to it.
///
/// Clones share the same buffer, so a test can hand one clone to the sink
/// and keep another to read the captured output back.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
