//! crates/linelog/src/record.rs
//! Per-statement record value and its call site.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::severity::Severity;

/// Call site associated with a record.
///
/// Captured by the [`source_location!`](crate::source_location) macro from
/// `file!()`/`line!()`, or built explicitly by callers that track their own
/// call sites.
///
/// # Examples
///
/// ```
/// use linelog::SourceLocation;
///
/// let location = SourceLocation::from_parts("src/net/session.rs", 120);
/// assert_eq!(location.file_name(), "session.rs");
/// assert_eq!(location.line(), 120);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceLocation {
    file: Cow<'static, str>,
    line: u32,
}

impl SourceLocation {
    /// Creates a source location from a static path and line number.
    #[must_use]
    pub const fn from_parts(file: &'static str, line: u32) -> Self {
        Self {
            file: Cow::Borrowed(file),
            line,
        }
    }

    /// Creates a source location from an owned path.
    #[must_use]
    pub const fn from_owned(file: String, line: u32) -> Self {
        Self {
            file: Cow::Owned(file),
            line,
        }
    }

    /// Returns the path exactly as recorded.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the line number recorded for the statement.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the file name with any directory prefix stripped.
    ///
    /// Both `/` and `\` count as separators, so `a/b/c.cc` and `a\b\c.cc`
    /// each yield `c.cc`.
    #[must_use]
    pub fn file_name(&self) -> &str {
        let file = self.file.as_ref();
        file.rfind(['/', '\\']).map_or(file, |at| &file[at + 1..])
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Inputs for one rendered log line.
///
/// A record is created at the start of a single log statement, owned
/// exclusively by that statement, and rendered at most once when the
/// statement completes. `severity == None` is the plain-log case: no label
/// is rendered and the severity gate does not apply.
#[derive(Clone, Debug)]
pub struct Record {
    severity: Option<Severity>,
    source: SourceLocation,
    message: String,
}

impl Record {
    /// Creates a record carrying an explicit severity.
    #[must_use]
    pub const fn new(severity: Severity, source: SourceLocation) -> Self {
        Self {
            severity: Some(severity),
            source,
            message: String::new(),
        }
    }

    /// Creates a severity-less record for the always-emitted plain log.
    #[must_use]
    pub const fn plain(source: SourceLocation) -> Self {
        Self {
            severity: None,
            source,
            message: String::new(),
        }
    }

    /// Returns the record's severity, or `None` for a plain record.
    #[must_use]
    pub const fn severity(&self) -> Option<Severity> {
        self.severity
    }

    /// Returns the call site the record was created at.
    #[must_use]
    pub const fn source(&self) -> &SourceLocation {
        &self.source
    }

    /// Returns the message text accumulated so far.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Appends one fragment to the message text.
    pub fn append(&mut self, fragment: impl fmt::Display) {
        // fmt::Write into a String cannot fail.
        let _ = write!(self.message, "{fragment}");
    }
}
