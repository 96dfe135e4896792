#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/linelog/src/lib.rs
//!
//! # Overview
//!
//! `linelog` is a minimal structured-logging core: it formats one log
//! record (severity label, timestamp, thread identity, call site, message)
//! into a single line and dispatches that line synchronously to every
//! registered sink. Which fields appear, and the minimum severity a record
//! must reach to be emitted, are governed by a process-wide mutable
//! [`LogConfig`].
//!
//! # Design
//!
//! Each log statement builds a [`Record`] through a [`LogLine`] drop guard;
//! when the guard goes out of scope the record is rendered by the pure
//! [`render_line`] formatter and fanned out by the sink registry. The
//! severity gate is checked before a guard is ever constructed, so
//! suppressed statements cost one comparison. Shared state lives in a
//! [`LogContext`]: the config behind a mutex, the sink list behind a
//! read-write lock. [`global`] owns the per-process context and registers a
//! stderr sink up front so output is never silently dropped.
//!
//! # Invariants
//!
//! - A record of severity `s` is dispatched iff `s >= min_severity`; plain
//!   (severity-less) records bypass the gate and are always emitted.
//! - Field order in the rendered line is fixed: label, date, time, thread,
//!   source, message; toggling a field off removes exactly that field.
//! - Every record is rendered at most once, and its full line is written
//!   atomically per sink; concurrent statements never interleave mid-line.
//!
//! # Errors
//!
//! Logging is never a source of panics or errors visible to application
//! code. Sink write failures are swallowed at the dispatch boundary and
//! counted ([`LogContext::write_failures`]); an unresolvable thread id
//! degrades to a `---` placeholder token.
//!
//! # Examples
//!
//! Route lines into a capture sink and inspect the wire format:
//!
//! ```
//! use std::sync::Arc;
//! use linelog::{CaptureSink, LogContext, LogSink, Severity, source_location};
//!
//! let capture = Arc::new(CaptureSink::new());
//! let context = LogContext::with_sinks([capture.clone() as Arc<dyn LogSink>]);
//! context.set_min_severity(Severity::Debug);
//!
//! if let Some(mut line) = context.line(Severity::Warn, source_location!()) {
//!     line.append("some files vanished");
//! }
//!
//! let lines = capture.lines();
//! assert_eq!(lines.len(), 1);
//! assert!(lines[0].starts_with("W "));
//! assert!(lines[0].ends_with("some files vanished\n"));
//! ```
//!
//! Or use the call-site macros against the global context:
//!
//! ```ignore
//! linelog::log_info!("listening on {}", addr);
//! linelog::log_line!("always printed, no label");
//! ```
//!
//! # See also
//!
//! - `linelog-sink` for the [`LogSink`] trait, the built-in sinks, and the
//!   dispatch registry (re-exported here for convenience).

mod config;
mod context;
mod format;
mod logger;
mod macros;
mod record;
mod severity;

pub use config::LogConfig;
pub use context::{LogContext, global};
pub use format::render_line;
pub use logger::LogLine;
pub use record::{Record, SourceLocation};
pub use severity::Severity;

pub use linelog_sink::{
    CaptureSink, ConsoleSink, FileSink, LogSink, SinkRegistry, UNKNOWN_THREAD, thread_token,
};
