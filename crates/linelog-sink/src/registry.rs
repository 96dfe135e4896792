//! crates/linelog-sink/src/registry.rs
//! Ordered sink list and line dispatch.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::console::ConsoleSink;
use crate::sink::LogSink;

/// Ordered collection of sinks that every rendered line is delivered to.
///
/// Registration appends and never fails; sinks are not removed in normal
/// operation. Dispatch iterates the list in registration order while holding
/// the read side of the lock, so it never observes a partially built list
/// while another thread registers. A failed `append` is counted and
/// swallowed; it never short-circuits delivery to later sinks and never
/// propagates to the logging caller.
pub struct SinkRegistry {
    sinks: RwLock<Vec<Arc<dyn LogSink>>>,
    write_failures: AtomicUsize,
}

impl SinkRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sinks: RwLock::new(Vec::new()),
            write_failures: AtomicUsize::new(0),
        }
    }

    /// Creates a registry with a [`ConsoleSink`] already registered.
    ///
    /// Used by the process-wide context so output has a destination before
    /// any explicit registration occurs.
    #[must_use]
    pub fn with_console() -> Self {
        let registry = Self::new();
        registry.register(Arc::new(ConsoleSink::new()));
        registry
    }

    /// Appends a sink to the dispatch list.
    ///
    /// Affects subsequent dispatches only; there is no retroactive delivery.
    pub fn register(&self, sink: Arc<dyn LogSink>) {
        self.sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sink);
    }

    /// Delivers `line` to every registered sink, in registration order.
    ///
    /// Runs synchronously on the calling thread. Sink write errors are
    /// recorded in the failure counter and otherwise discarded.
    pub fn dispatch(&self, line: &str) {
        let sinks = self.sinks.read().unwrap_or_else(PoisonError::into_inner);
        for sink in sinks.iter() {
            if sink.append(line).is_err() {
                self.write_failures.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Count of sink writes that failed and were dropped.
    #[must_use]
    pub fn write_failures(&self) -> usize {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Number of registered sinks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Reports whether no sink has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SinkRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkRegistry")
            .field("sinks", &self.len())
            .field("write_failures", &self.write_failures())
            .finish()
    }
}
