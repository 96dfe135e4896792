//! Integration tests for sink dispatch.
//!
//! These tests verify fan-out order, failure isolation, and the per-line
//! atomicity guarantee under concurrent logging.

use std::io;
use std::sync::Arc;
use std::thread;

use linelog::{CaptureSink, LogContext, LogSink, Severity, SourceLocation};

struct FailingSink;

impl LogSink for FailingSink {
    fn append(&self, _line: &str) -> io::Result<()> {
        Err(io::Error::other("writer gone"))
    }
}

fn site(line: u32) -> SourceLocation {
    SourceLocation::from_parts("tests/dispatch.rs", line)
}

// ============================================================================
// Fan-Out Tests
// ============================================================================

/// Two registered sinks receive identical copies of each line, in
/// registration order.
#[test]
fn all_sinks_receive_identical_lines() {
    let first = Arc::new(CaptureSink::new());
    let second = Arc::new(CaptureSink::new());
    let context = LogContext::with_sinks([
        first.clone() as Arc<dyn LogSink>,
        second.clone() as Arc<dyn LogSink>,
    ]);

    for n in 0..3 {
        if let Some(mut line) = context.line(Severity::Warn, site(1)) {
            line.append("line ").append(n);
        }
    }

    assert_eq!(first.len(), 3);
    assert_eq!(first.lines(), second.lines());
}

/// A sink registered mid-stream sees subsequent lines only.
#[test]
fn late_registration_sees_later_lines_only() {
    let early = Arc::new(CaptureSink::new());
    let context = LogContext::with_sinks([early.clone() as Arc<dyn LogSink>]);

    if let Some(mut line) = context.line(Severity::Warn, site(2)) {
        line.append("first");
    }

    let late = Arc::new(CaptureSink::new());
    context.register_sink(late.clone());

    if let Some(mut line) = context.line(Severity::Warn, site(3)) {
        line.append("second");
    }

    assert_eq!(early.len(), 2);
    assert_eq!(late.len(), 1);
    assert!(late.lines()[0].contains("second"));
}

// ============================================================================
// Failure Isolation Tests
// ============================================================================

/// A failing sink neither reaches the caller nor blocks later sinks, and
/// the failure is counted.
#[test]
fn sink_failure_is_swallowed_and_counted() {
    let capture = Arc::new(CaptureSink::new());
    let context = LogContext::with_sinks([
        Arc::new(FailingSink) as Arc<dyn LogSink>,
        capture.clone() as Arc<dyn LogSink>,
    ]);

    if let Some(mut line) = context.line(Severity::Error, site(4)) {
        line.append("delivered anyway");
    }

    assert_eq!(capture.len(), 1);
    assert!(capture.lines()[0].contains("delivered anyway"));
    assert_eq!(context.write_failures(), 1);
}

/// Suppressed statements never touch the sinks or the failure counter.
#[test]
fn suppressed_statements_do_not_reach_sinks() {
    let context = LogContext::with_sinks([Arc::new(FailingSink) as Arc<dyn LogSink>]);
    context.set_min_severity(Severity::Error);

    assert!(context.line(Severity::Debug, site(5)).is_none());
    assert_eq!(context.write_failures(), 0);
}

// ============================================================================
// Concurrency Tests
// ============================================================================

/// Concurrent statements each land as one intact line; nothing interleaves
/// mid-line and nothing is lost.
#[test]
fn concurrent_statements_stay_intact() {
    const THREADS: usize = 8;
    const LINES_PER_THREAD: usize = 50;

    let capture = Arc::new(CaptureSink::new());
    let context = Arc::new(LogContext::with_sinks([
        capture.clone() as Arc<dyn LogSink>
    ]));
    context.set_min_severity(Severity::Debug);

    let mut handles = Vec::new();
    for worker in 0..THREADS {
        let context = context.clone();
        handles.push(thread::spawn(move || {
            for n in 0..LINES_PER_THREAD {
                if let Some(mut line) = context.line(Severity::Info, site(6)) {
                    line.append("worker=")
                        .append(worker)
                        .append(" n=")
                        .append(n)
                        .append(" end");
                }
            }
        }));
    }
    for handle in handles {
        handle.join().expect("worker thread joins");
    }

    let lines = capture.lines();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    for line in &lines {
        assert!(line.ends_with(" end\n"), "torn line {line:?}");
        assert_eq!(line.matches("worker=").count(), 1);
    }
}

/// Config mutation while other threads log never yields a torn snapshot:
/// a line either has both date and time or neither.
#[test]
fn config_writes_are_never_half_applied() {
    const FLIPS: usize = 200;

    let capture = Arc::new(CaptureSink::new());
    let context = Arc::new(LogContext::with_sinks([
        capture.clone() as Arc<dyn LogSink>
    ]));
    context.configure(|config| {
        config.show_label = false;
        config.show_thread = false;
        config.show_source = false;
    });

    let writer = {
        let context = context.clone();
        thread::spawn(move || {
            for n in 0..FLIPS {
                let on = n % 2 == 0;
                context.configure(|config| {
                    config.show_date = on;
                    config.show_time = on;
                });
            }
        })
    };

    for _ in 0..FLIPS {
        if let Some(mut line) = context.line(Severity::Info, site(7)) {
            line.append("tick");
        }
    }
    writer.join().expect("writer thread joins");

    for line in capture.lines() {
        let has_date = line.chars().next().is_some_and(|c| c.is_ascii_digit());
        let has_time = line.contains(':');
        assert_eq!(has_date, has_time, "torn config snapshot in {line:?}");
    }
}
