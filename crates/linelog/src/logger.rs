//! crates/linelog/src/logger.rs
//! Drop-guard facade: one statement, one rendered and dispatched line.

use std::fmt;

use crate::context::LogContext;
use crate::record::Record;

/// An in-progress log statement.
///
/// Created by [`LogContext::line`] or [`LogContext::plain_line`]. Message
/// fragments accumulate through [`append`](Self::append); when the value
/// goes out of scope, on any exit path including early returns, the
/// completed record is formatted and dispatched exactly once. [`finish`]
/// consumes the value for call sites that want the flush to be explicit.
/// No append is possible afterwards because both paths take ownership.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use linelog::{CaptureSink, LogContext, LogSink, Severity, source_location};
///
/// let capture = Arc::new(CaptureSink::new());
/// let context = LogContext::with_sinks([capture.clone() as Arc<dyn LogSink>]);
///
/// if let Some(mut line) = context.line(Severity::Warn, source_location!()) {
///     line.append("disk ").append("almost full");
/// }
///
/// assert!(capture.lines()[0].contains("disk almost full"));
/// ```
///
/// [`finish`]: Self::finish
#[must_use = "the line is rendered and dispatched when this value is dropped"]
pub struct LogLine<'a> {
    context: &'a LogContext,
    record: Option<Record>,
}

impl<'a> LogLine<'a> {
    pub(crate) fn new(context: &'a LogContext, record: Record) -> Self {
        Self {
            context,
            record: Some(record),
        }
    }

    /// Appends one fragment to the message text.
    pub fn append(&mut self, fragment: impl fmt::Display) -> &mut Self {
        if let Some(record) = self.record.as_mut() {
            record.append(fragment);
        }
        self
    }

    /// Completes the statement, rendering and dispatching the line now.
    ///
    /// Dropping the value has the same effect; `finish` only makes the
    /// flush point explicit.
    pub fn finish(self) {}
}

impl Drop for LogLine<'_> {
    fn drop(&mut self) {
        if let Some(record) = self.record.take() {
            self.context.emit(&record);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::context::LogContext;
    use crate::record::SourceLocation;
    use crate::severity::Severity;
    use linelog_sink::{CaptureSink, LogSink};
    use std::sync::Arc;

    fn capture_context() -> (LogContext, Arc<CaptureSink>) {
        let capture = Arc::new(CaptureSink::new());
        let context = LogContext::with_sinks([capture.clone() as Arc<dyn LogSink>]);
        (context, capture)
    }

    #[test]
    fn drop_dispatches_exactly_once() {
        let (context, capture) = capture_context();
        {
            let mut line = context
                .line(Severity::Warn, SourceLocation::from_parts("t.rs", 1))
                .expect("warn passes the default gate");
            line.append("once");
        }
        assert_eq!(capture.len(), 1);
    }

    #[test]
    fn finish_dispatches_exactly_once() {
        let (context, capture) = capture_context();
        let mut line = context
            .line(Severity::Error, SourceLocation::from_parts("t.rs", 2))
            .expect("error passes the default gate");
        line.append("flushed");
        line.finish();
        assert_eq!(capture.len(), 1);
    }

    #[test]
    fn early_return_still_flushes() {
        fn log_then_bail(context: &LogContext) -> Option<()> {
            let mut line =
                context.line(Severity::Warn, SourceLocation::from_parts("t.rs", 3))?;
            line.append("partial work");
            None?;
            unreachable!()
        }

        let (context, capture) = capture_context();
        assert!(log_then_bail(&context).is_none());
        assert_eq!(capture.len(), 1);
        assert!(capture.lines()[0].contains("partial work"));
    }

    #[test]
    fn fragments_concatenate_in_append_order() {
        let (context, capture) = capture_context();
        context
            .line(Severity::Info, SourceLocation::from_parts("t.rs", 4))
            .expect("info passes the default gate")
            .append("a=")
            .append(1)
            .append(" b=")
            .append(true);
        let lines = capture.lines();
        assert!(lines[0].contains("a=1 b=true"));
    }
}
