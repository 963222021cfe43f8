//! Host name lookup.

use std::ffi::CStr;

/// Fallback when the host name cannot be read.
pub const UNKNOWN_HOST: &str = "localhost";

/// The machine's host name.
#[must_use]
pub fn host_name() -> String {
    let mut buf = [0u8; 256];
    // SAFETY: the buffer is valid for `buf.len()` bytes and gethostname
    // writes at most that many.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
    if rc != 0 {
        return UNKNOWN_HOST.to_string();
    }
    // Truncated names may lack the terminator.
    let last = buf.len() - 1;
    buf[last] = 0;
    CStr::from_bytes_until_nul(&buf)
        .ok()
        .and_then(|name| name.to_str().ok())
        .filter(|name| !name.is_empty())
        .map_or_else(|| UNKNOWN_HOST.to_string(), str::to_string)
}
