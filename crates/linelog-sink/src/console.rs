//! crates/linelog-sink/src/console.rs
//! Default sink writing to the standard error stream.

use std::io::{self, Write};

use crate::sink::LogSink;

/// Sink that writes each line to standard error.
///
/// This is the sink registered automatically by the process-wide logging
/// context so that output is never silently dropped before any explicit
/// registration occurs. Each line is written with a single `write_all`
/// while holding the stderr handle lock, keeping concurrent output intact
/// per line.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Creates a console sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleSink {
    fn append(&self, line: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(line.as_bytes())
    }
}
