//! crates/linelog/src/config.rs
//! Display and gating configuration for rendered lines.

use crate::severity::Severity;

/// Settings governing which fields appear in a line and the minimum emitted
/// severity.
///
/// Plain data: any combination of toggles and any minimum severity is
/// accepted without validation. The shared, process-wide copy lives inside
/// [`LogContext`](crate::LogContext) behind a mutex; this type itself is a
/// value that callers snapshot and mutate freely.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    /// Minimum severity a record must reach to be emitted.
    pub min_severity: Severity,
    /// Render the single-letter severity label.
    pub show_label: bool,
    /// Render the `YYYY-MM-DD` date field.
    pub show_date: bool,
    /// Render the `HH:MM:SS.mmm` time field.
    pub show_time: bool,
    /// Render the bracketed thread token.
    pub show_thread: bool,
    /// Render the `(file:line)` call site.
    pub show_source: bool,
}

impl LogConfig {
    /// Reports whether a record of `severity` passes the gate.
    #[must_use]
    pub fn allows(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }
}

impl Default for LogConfig {
    /// Info minimum with every display field enabled.
    fn default() -> Self {
        Self {
            min_severity: Severity::Info,
            show_label: true,
            show_date: true,
            show_time: true,
            show_thread: true,
            show_source: true,
        }
    }
}
