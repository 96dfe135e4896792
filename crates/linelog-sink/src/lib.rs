#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/linelog-sink/src/lib.rs
//!
//! # Overview
//!
//! `linelog-sink` provides the output side of the linelog workspace: the
//! [`LogSink`] capability trait, the built-in sink implementations, and the
//! [`SinkRegistry`] that fans a rendered line out to every registered sink.
//! The crate deals exclusively in fully formatted, newline-terminated lines;
//! record formatting lives in the `linelog` crate.
//!
//! # Design
//!
//! A sink is anything that can durably or visibly record one line. Sinks are
//! shared as `Arc<dyn LogSink>` trait objects and must serialise their own
//! writes so that concurrent callers never interleave partial lines. The
//! registry keeps sinks in registration order behind a read-write lock:
//! dispatch takes the read side, registration the write side, so dispatch
//! never observes a partially built list.
//!
//! # Invariants
//!
//! - `dispatch` delivers a line to every sink in registration order,
//!   synchronously, on the calling thread.
//! - A sink failure is swallowed at the registry boundary and counted; it
//!   never prevents delivery to subsequent sinks and never reaches the
//!   logging caller.
//! - Each [`LogSink::append`] call writes its line with a single `write_all`
//!   under the sink's own lock, keeping per-line output atomic across
//!   threads.
//!
//! # Errors
//!
//! [`LogSink::append`] surfaces [`std::io::Error`] from the underlying
//! writer. Only sink constructors that touch the filesystem
//! ([`FileSink::create`]) expose errors to callers; everything on the
//! dispatch path absorbs them.
//!
//! # Examples
//!
//! Fan a line out to two sinks and inspect the captured copy:
//!
//! ```
//! use std::sync::Arc;
//! use linelog_sink::{CaptureSink, SinkRegistry};
//!
//! let registry = SinkRegistry::new();
//! let first = Arc::new(CaptureSink::new());
//! let second = Arc::new(CaptureSink::new());
//! registry.register(first.clone());
//! registry.register(second.clone());
//!
//! registry.dispatch("W 2024-01-02 03:04:05.006 [ 7 ] (x.cc:42) hi\n");
//!
//! assert_eq!(first.lines(), second.lines());
//! assert_eq!(registry.write_failures(), 0);
//! ```
//!
//! # See also
//!
//! - The `linelog` crate for record formatting, configuration, and the
//!   call-site macros that feed this crate.

mod capture;
mod console;
mod file;
mod registry;
mod sink;
mod thread_id;

pub use capture::CaptureSink;
pub use console::ConsoleSink;
pub use file::FileSink;
pub use registry::SinkRegistry;
pub use sink::LogSink;
pub use thread_id::{UNKNOWN_THREAD, thread_token};
