//! crates/linelog-sink/src/sink.rs
//! The sink capability trait shared by every output destination.

use std::io;

/// A destination capable of durably or visibly recording one formatted line.
///
/// Implementations receive complete, newline-terminated lines and must be
/// safe to call concurrently from multiple threads: each [`append`] call
/// writes its line atomically (one `write_all` under the implementation's
/// own lock) so that output from concurrent statements never interleaves
/// mid-line.
///
/// Errors returned from [`append`] are swallowed and counted by
/// [`SinkRegistry::dispatch`](crate::SinkRegistry::dispatch); a sink is
/// never given the chance to crash a logging caller.
///
/// [`append`]: LogSink::append
pub trait LogSink: Send + Sync {
    /// Writes one formatted line to the destination.
    fn append(&self, line: &str) -> io::Result<()>;
}
