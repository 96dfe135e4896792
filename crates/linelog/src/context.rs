//! crates/linelog/src/context.rs
//! Process-wide logging context: shared configuration plus the sink list.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use time::OffsetDateTime;

use linelog_sink::{LogSink, SinkRegistry, thread_token};

use crate::config::LogConfig;
use crate::format::render_line;
use crate::logger::LogLine;
use crate::record::{Record, SourceLocation};
use crate::severity::Severity;

static GLOBAL: OnceLock<LogContext> = OnceLock::new();

/// Returns the process-wide logging context, creating it on first use.
///
/// The context is created lazily with the default configuration and a
/// [`ConsoleSink`](linelog_sink::ConsoleSink) registered, so output has a
/// destination before any explicit registration occurs. It lives for the
/// remainder of the process.
pub fn global() -> &'static LogContext {
    GLOBAL.get_or_init(LogContext::new)
}

/// Shared logging state read by every formatting and dispatch call.
///
/// Holds the single [`LogConfig`] behind a mutex (all reads and writes are
/// serialised; the last write wins and is visible to all subsequent calls)
/// and the ordered sink list. One context normally exists per process via
/// [`global`], but explicit contexts can be built for tests or embedding.
///
/// Logging never panics: poisoned locks are recovered rather than
/// propagated.
#[derive(Debug)]
pub struct LogContext {
    config: Mutex<LogConfig>,
    sinks: SinkRegistry,
}

impl LogContext {
    /// Creates a context with the default configuration and a console sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Mutex::new(LogConfig::default()),
            sinks: SinkRegistry::with_console(),
        }
    }

    /// Creates a context dispatching only to the given sinks.
    ///
    /// No console sink is registered; an empty iterator yields a context
    /// whose lines go nowhere. Intended for tests and embedding hosts.
    #[must_use]
    pub fn with_sinks<I>(sinks: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn LogSink>>,
    {
        let registry = SinkRegistry::new();
        for sink in sinks {
            registry.register(sink);
        }
        Self {
            config: Mutex::new(LogConfig::default()),
            sinks: registry,
        }
    }

    /// Returns a snapshot of the current configuration.
    #[must_use]
    pub fn config(&self) -> LogConfig {
        self.lock_config().clone()
    }

    /// Applies a mutation to the shared configuration.
    ///
    /// The closure runs under the config lock, so the change is observed
    /// atomically by concurrent logging calls.
    pub fn configure(&self, apply: impl FnOnce(&mut LogConfig)) {
        apply(&mut self.lock_config());
    }

    /// Returns the current minimum severity.
    #[must_use]
    pub fn min_severity(&self) -> Severity {
        self.lock_config().min_severity
    }

    /// Sets the minimum severity a record must reach to be emitted.
    pub fn set_min_severity(&self, severity: Severity) {
        self.lock_config().min_severity = severity;
    }

    /// Toggles the severity label field.
    pub fn set_show_label(&self, show: bool) {
        self.lock_config().show_label = show;
    }

    /// Toggles the date field.
    pub fn set_show_date(&self, show: bool) {
        self.lock_config().show_date = show;
    }

    /// Toggles the time field.
    pub fn set_show_time(&self, show: bool) {
        self.lock_config().show_time = show;
    }

    /// Toggles the thread token field.
    pub fn set_show_thread(&self, show: bool) {
        self.lock_config().show_thread = show;
    }

    /// Toggles the call-site field.
    pub fn set_show_source(&self, show: bool) {
        self.lock_config().show_source = show;
    }

    /// Appends a sink to the dispatch list.
    ///
    /// Affects subsequent lines only; already-dispatched lines are not
    /// redelivered.
    pub fn register_sink(&self, sink: Arc<dyn LogSink>) {
        self.sinks.register(sink);
    }

    /// Reports whether a record of `severity` would currently be emitted.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        self.lock_config().allows(severity)
    }

    /// Starts a gated log statement at `severity`.
    ///
    /// Returns `None` without any further work when the severity is below
    /// the configured minimum, so suppressed statements cost one
    /// comparison and no formatting.
    #[must_use]
    pub fn line(&self, severity: Severity, source: SourceLocation) -> Option<LogLine<'_>> {
        if self.enabled(severity) {
            Some(LogLine::new(self, Record::new(severity, source)))
        } else {
            None
        }
    }

    /// Starts a plain log statement that bypasses the severity gate.
    ///
    /// Plain lines carry no label and are always emitted, mirroring the
    /// severity-less log form.
    #[must_use]
    pub fn plain_line(&self, source: SourceLocation) -> LogLine<'_> {
        LogLine::new(self, Record::plain(source))
    }

    /// Count of sink writes that failed and were dropped.
    #[must_use]
    pub fn write_failures(&self) -> usize {
        self.sinks.write_failures()
    }

    /// Renders the completed record with the current config, wall-clock
    /// time, and thread identity, then fans the line out to every sink.
    pub(crate) fn emit(&self, record: &Record) {
        let config = self.config();
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let line = render_line(record, &config, now, &thread_token());
        self.sinks.dispatch(&line);
    }

    fn lock_config(&self) -> MutexGuard<'_, LogConfig> {
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new()
    }
}
