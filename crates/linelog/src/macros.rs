//! crates/linelog/src/macros.rs
//! Call-site macros: capture file/line, gate, and emit one line per
//! statement through the global context.

/// Captures the current call site as a [`SourceLocation`](crate::SourceLocation).
///
/// # Examples
///
/// ```
/// use linelog::{SourceLocation, source_location};
///
/// let location: SourceLocation = source_location!();
/// assert!(location.file().ends_with(".rs"));
/// assert!(location.line() > 0);
/// ```
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::SourceLocation::from_parts(file!(), line!())
    };
}

/// Emits a debug line through the global context.
///
/// The gate is checked before any formatting work; a suppressed statement
/// costs one comparison.
///
/// # Example
/// ```ignore
/// log_debug!("resolved {} entries", count);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if let Some(mut line) =
            $crate::global().line($crate::Severity::Debug, $crate::source_location!())
        {
            line.append(format_args!($($arg)*));
        }
    };
}

/// Emits an info line through the global context.
///
/// # Example
/// ```ignore
/// log_info!("listening on {}", addr);
/// ```
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if let Some(mut line) =
            $crate::global().line($crate::Severity::Info, $crate::source_location!())
        {
            line.append(format_args!($($arg)*));
        }
    };
}

/// Emits a warning line through the global context.
///
/// # Example
/// ```ignore
/// log_warn!("retrying after {:?}", delay);
/// ```
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if let Some(mut line) =
            $crate::global().line($crate::Severity::Warn, $crate::source_location!())
        {
            line.append(format_args!($($arg)*));
        }
    };
}

/// Emits an error line through the global context.
///
/// # Example
/// ```ignore
/// log_error!("transfer failed: {err}");
/// ```
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if let Some(mut line) =
            $crate::global().line($crate::Severity::Error, $crate::source_location!())
        {
            line.append(format_args!($($arg)*));
        }
    };
}

/// Emits a plain line: no severity label, and no severity gate.
///
/// Plain lines are always emitted regardless of the configured minimum.
///
/// # Example
/// ```ignore
/// log_line!("build {} starting", id);
/// ```
#[macro_export]
macro_rules! log_line {
    ($($arg:tt)*) => {{
        let mut line = $crate::global().plain_line($crate::source_location!());
        line.append(format_args!($($arg)*));
    }};
}
