//! crates/linelog/src/severity.rs
//! Ordered severity classification used for gating and display labels.

/// Severity of a log record.
///
/// The declaration order fixes the total order used everywhere:
/// `Debug < Info < Warn < Error`. A record is emitted iff its severity is
/// at or above the configured minimum.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Diagnostic detail for development.
    Debug,
    /// Routine informational output.
    Info,
    /// Something unexpected that the program can continue past.
    Warn,
    /// A failure worth surfacing to an operator.
    Error,
}

impl Severity {
    /// Returns the single-letter label rendered at the start of a line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "D",
            Self::Info => "I",
            Self::Warn => "W",
            Self::Error => "E",
        }
    }

    /// Parses a case-insensitive severity name.
    ///
    /// Returns `None` for unrecognised names.
    ///
    /// # Examples
    ///
    /// ```
    /// use linelog::Severity;
    ///
    /// assert_eq!(Severity::from_name("warn"), Some(Severity::Warn));
    /// assert_eq!(Severity::from_name("WARNING"), Some(Severity::Warn));
    /// assert_eq!(Severity::from_name("verbose"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}
