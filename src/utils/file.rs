//! File reading utilities

use crate::error::{FetchError, Result};
use std::fs;
use std::path::Path;

/// Safely read a file to string with error handling
pub fn read_file_safe<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(FetchError::from)
}

/// Read first line of a file, trimmed
/// Meant for single-line files like /proc/uptime and /proc/sys/kernel/hostname
/// Uses direct syscalls, the first 256 bytes are all that is looked at
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path_cstr = CString::new(path.as_ref().as_os_str().as_bytes())
        .map_err(|_| FetchError::Parse("Invalid path".to_string()))?;

    let mut buffer = [0u8; 256];

    // SAFETY: `path_cstr` is NUL terminated, `buffer` outlives the read and
    // the descriptor is closed before leaving the block.
    let bytes_read = unsafe {
        let fd = libc::open(path_cstr.as_ptr(), libc::O_RDONLY | libc::O_CLOEXEC);
        if fd < 0 {
            return Err(FetchError::from(std::io::Error::last_os_error()));
        }

        let n = libc::read(fd, buffer.as_mut_ptr() as *mut libc::c_void, buffer.len());
        let read_error = std::io::Error::last_os_error();
        libc::close(fd);

        if n < 0 {
            return Err(FetchError::from(read_error));
        }
        n as usize
    };

    let read = &buffer[..bytes_read];
    let line_end = read.iter().position(|&b| b == b'\n').unwrap_or(read.len());
    let line = std::str::from_utf8(&read[..line_end])
        .map_err(|_| FetchError::Parse("Invalid UTF-8".to_string()))?;
    Ok(line.trim().to_string())
}
