//! crates/linelog-sink/src/thread_id.rs
//! OS thread identity for the formatted thread field.

/// Placeholder token used when no OS thread id can be obtained.
pub const UNKNOWN_THREAD: &str = "---";

/// Returns the calling thread's OS id as a display token.
///
/// On Linux and Android this is the kernel task id from `gettid(2)`, the
/// same value upstream tools print for the thread field. On platforms
/// without a comparable id the function degrades to [`UNKNOWN_THREAD`]
/// rather than failing; thread identity is display metadata, not an error
/// condition.
#[cfg(any(target_os = "linux", target_os = "android"))]
#[allow(unsafe_code)]
#[must_use]
pub fn thread_token() -> String {
    // SAFETY: gettid has no preconditions and always succeeds.
    let tid = unsafe { libc::gettid() };
    tid.to_string()
}

/// Returns the calling thread's OS id as a display token.
///
/// This platform exposes no stable numeric thread id, so the token is the
/// fixed [`UNKNOWN_THREAD`] placeholder.
#[cfg(not(any(target_os = "linux", target_os = "android")))]
#[must_use]
pub fn thread_token() -> String {
    UNKNOWN_THREAD.to_owned()
}
