//! crates/linelog-sink/src/file.rs
//! Append-only file sink.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use crate::sink::LogSink;

/// Sink that appends each line to a log file.
///
/// The file is opened in create-and-append mode once at construction and
/// kept open for the sink's lifetime. Writes go through a mutex so that
/// lines from concurrent statements land intact; every line is flushed to
/// the operating system by its own `write_all` call, matching the
/// synchronous, unbuffered contract of the dispatch pipeline.
#[derive(Debug)]
pub struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    /// Opens (or creates) the file at `path` for appending.
    ///
    /// # Errors
    ///
    /// Returns the [`io::Error`] from opening the file. This is the only
    /// point at which a file sink can fail visibly; write errors after
    /// construction are swallowed by the registry.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl LogSink for FileSink {
    fn append(&self, line: &str) -> io::Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(line.as_bytes())
    }
}
