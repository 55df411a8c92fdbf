//! Capture and reset of the calling thread's last OS error (`errno`)
//!
//! `SYSERR` lines append the reason text of the last failed system call and
//! then clear it. `errno` is thread local, so the read and the reset below are
//! never interleaved with another thread's capture.

use std::io;

/// Last OS error observed on the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsError {
    code: i32,
}

impl OsError {
    pub const fn from_raw(code: i32) -> Self {
        Self { code }
    }

    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Reads the current `errno` and sets it back to zero.
    pub fn take() -> Self {
        let error = Self::peek();
        set_errno(0);
        error
    }

    /// Captures the reason text of the current `errno`, then resets it.
    ///
    /// The reset happens after the reason lookup, which may itself touch
    /// `errno`.
    pub fn take_reason() -> String {
        let reason = Self::peek().reason();
        set_errno(0);
        reason
    }

    /// Reads the current `errno` without modifying it.
    pub fn peek() -> Self {
        Self {
            code: io::Error::last_os_error().raw_os_error().unwrap_or(0),
        }
    }

    /// Platform reason string, as `strerror(3)` renders it.
    pub fn reason(&self) -> String {
        reason_for(self.code)
    }
}

/// Overwrites the calling thread's `errno`.
#[cfg(any(target_os = "linux", target_os = "android", target_os = "emscripten"))]
pub fn set_errno(code: i32) {
    // SAFETY: __errno_location returns a valid pointer to this thread's errno.
    unsafe {
        *libc::__errno_location() = code;
    }
}

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly"
))]
pub fn set_errno(code: i32) {
    // SAFETY: __error returns a valid pointer to this thread's errno.
    unsafe {
        *libc::__error() = code;
    }
}

#[cfg(any(target_os = "openbsd", target_os = "netbsd"))]
pub fn set_errno(code: i32) {
    // SAFETY: __errno returns a valid pointer to this thread's errno.
    unsafe {
        *libc::__errno() = code;
    }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "emscripten",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "openbsd",
    target_os = "netbsd"
)))]
pub fn set_errno(_code: i32) {}

#[cfg(unix)]
fn reason_for(code: i32) -> String {
    let mut buf = [0 as libc::c_char; 256];

    // SAFETY: buf is writable for buf.len() bytes; strerror_r (XSI variant on
    // every libc the `libc` crate binds) NUL-terminates within that length on
    // success.
    let rc = unsafe { libc::strerror_r(code, buf.as_mut_ptr(), buf.len()) };
    if rc != 0 {
        return format!("Unknown error {}", code);
    }

    // SAFETY: strerror_r succeeded, so buf holds a NUL-terminated string.
    let reason = unsafe { std::ffi::CStr::from_ptr(buf.as_ptr()) };
    reason.to_string_lossy().into_owned()
}

#[cfg(not(unix))]
fn reason_for(code: i32) -> String {
    let text = io::Error::from_raw_os_error(code).to_string();
    match text.rfind(" (os error ") {
        Some(idx) => text[..idx].to_string(),
        None => text,
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_take_resets_errno() {
        set_errno(libc::ENOENT);
        let captured = OsError::take();
        assert_eq!(captured.code(), libc::ENOENT);
        assert_eq!(OsError::peek().code(), 0);
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(
            OsError::from_raw(libc::ENOENT).reason(),
            "No such file or directory"
        );
        assert!(!OsError::from_raw(0).reason().is_empty());
    }

    #[test]
    fn test_take_reason_resets_errno() {
        set_errno(libc::ENOENT);
        assert_eq!(OsError::take_reason(), "No such file or directory");
        assert_eq!(OsError::peek().code(), 0);
    }

    #[test]
    fn test_second_take_sees_zero() {
        set_errno(libc::EBADF);
        assert_eq!(OsError::take().code(), libc::EBADF);
        assert_eq!(OsError::take().code(), 0);
    }
}
