//! crates/linelog/src/format.rs
//! Pure rendering of a completed record into one output line.

use std::fmt::Write as _;

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::config::LogConfig;
use crate::record::Record;

/// Date field format, local wall-clock.
const DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month padding:zero]-[day padding:zero]");

/// Time field format; the millisecond part is appended separately so it is
/// always exactly three digits.
const TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour padding:zero]:[minute padding:zero]:[second padding:zero]");

/// Renders one record into a newline-terminated line.
///
/// Fields appear in a fixed order, each only when its toggle in `config` is
/// on and each followed by a single space; the message is always last:
///
/// 1. severity label (`D`/`I`/`W`/`E`), skipped entirely for plain records
///    so no leading space artifact appears;
/// 2. date `YYYY-MM-DD`;
/// 3. time `HH:MM:SS.mmm`, millisecond zero-padded to width 3;
/// 4. thread token in brackets, `[ 1234 ]`;
/// 5. call site `(file:line)` with the directory prefix stripped.
///
/// The function is deterministic: the same record, config, timestamp, and
/// thread token always produce the same line. `timestamp` is expected to
/// already carry the local offset; formatting failures degrade to an epoch
/// placeholder rather than an error.
#[must_use]
pub fn render_line(
    record: &Record,
    config: &LogConfig,
    timestamp: OffsetDateTime,
    thread_token: &str,
) -> String {
    let mut line = String::new();

    if config.show_label {
        if let Some(severity) = record.severity() {
            line.push_str(severity.label());
            line.push(' ');
        }
    }

    if config.show_date {
        let date = timestamp
            .format(DATE_FORMAT)
            .unwrap_or_else(|_| String::from("1970-01-01"));
        line.push_str(&date);
        line.push(' ');
    }

    if config.show_time {
        let clock = timestamp
            .format(TIME_FORMAT)
            .unwrap_or_else(|_| String::from("00:00:00"));
        let millis = timestamp.millisecond();
        let _ = write!(line, "{clock}.{millis:03} ");
    }

    if config.show_thread {
        let _ = write!(line, "[ {thread_token} ] ");
    }

    if config.show_source {
        let source = record.source();
        let _ = write!(line, "({}:{}) ", source.file_name(), source.line());
    }

    line.push_str(record.message());
    line.push('\n');
    line
}
