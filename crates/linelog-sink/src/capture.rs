//! crates/linelog-sink/src/capture.rs
//! In-memory sink for tests and embedding.

use std::io;
use std::sync::{Mutex, PoisonError};

use crate::sink::LogSink;

/// Sink that retains every dispatched line in memory.
///
/// Lines are stored exactly as delivered, trailing newline included, so
/// assertions can check the full wire contract. Intended for tests and for
/// hosts that want to inspect recent output without touching a stream.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    /// Creates an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every captured line in dispatch order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Removes and returns the captured lines, leaving the sink empty.
    #[must_use]
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of captured lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether nothing has been captured yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for CaptureSink {
    fn append(&self, line: &str) -> io::Result<()> {
        self.lock().push(line.to_owned());
        Ok(())
    }
}
