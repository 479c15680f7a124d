//! System information collection (user, hostname, OS identity, uptime)

use crate::data::HostInfo;
use crate::error::{FetchError, Result};
use crate::utils::file::{read_file_safe, read_first_line};
use std::ffi::CStr;
use std::path::Path;

const OS_RELEASE_PATHS: [&str; 2] = ["/etc/os-release", "/usr/lib/os-release"];
const LSB_RELEASE_PATH: &str = "/etc/lsb-release";
const HOSTNAME_PATH: &str = "/proc/sys/kernel/hostname";
const UPTIME_PATH: &str = "/proc/uptime";

/// Name of the user owning this process.
///
/// Resolved through the passwd database; `$USER` is only consulted when the
/// database has no entry for the uid (containers, NSS-less setups).
pub fn current_user() -> Result<String> {
    // SAFETY: getuid cannot fail.
    let uid = unsafe { libc::getuid() };

    if let Some(name) = lookup_passwd_name(uid)? {
        return Ok(name);
    }

    match std::env::var("USER") {
        Ok(user) if !user.is_empty() => Ok(user),
        _ => Err(FetchError::Detection(format!(
            "No passwd entry for uid {}",
            uid
        ))),
    }
}

fn lookup_passwd_name(uid: libc::uid_t) -> Result<Option<String>> {
    let mut buffer: Vec<libc::c_char> = vec![0; 1024];

    loop {
        // SAFETY: `passwd` is plain old data, zeroed is a valid initial state.
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut entry: *mut libc::passwd = std::ptr::null_mut();

        // SAFETY: every pointer references a live local and `buffer.len()`
        // is the real capacity of `buffer`.
        let rc = unsafe {
            libc::getpwuid_r(uid, &mut pwd, buffer.as_mut_ptr(), buffer.len(), &mut entry)
        };

        if rc == libc::ERANGE && buffer.len() < 1 << 20 {
            buffer.resize(buffer.len() * 2, 0);
            continue;
        }
        if rc != 0 {
            return Err(FetchError::from(std::io::Error::from_raw_os_error(rc)));
        }
        if entry.is_null() || pwd.pw_name.is_null() {
            return Ok(None);
        }

        // SAFETY: on success pw_name points into `buffer`, NUL terminated.
        let name = unsafe { CStr::from_ptr(pwd.pw_name) }
            .to_string_lossy()
            .into_owned();
        return Ok(Some(name));
    }
}

/// Local host name, from procfs with a `gethostname(2)` fallback
pub fn hostname() -> Result<String> {
    match read_first_line(HOSTNAME_PATH) {
        Ok(name) if !name.is_empty() => Ok(name),
        _ => gethostname(),
    }
}

fn gethostname() -> Result<String> {
    let mut buffer = [0 as libc::c_char; 256];

    // SAFETY: the length passed is the buffer's size.
    let rc = unsafe { libc::gethostname(buffer.as_mut_ptr(), buffer.len()) };
    if rc != 0 {
        return Err(FetchError::from(std::io::Error::last_os_error()));
    }
    // Truncated names are not guaranteed to be terminated.
    buffer[buffer.len() - 1] = 0;

    // SAFETY: the buffer is NUL terminated above.
    let name = unsafe { CStr::from_ptr(buffer.as_ptr()) }
        .to_string_lossy()
        .trim()
        .to_string();

    if name.is_empty() {
        return Err(FetchError::Detection("Hostname is empty".to_string()));
    }
    Ok(name)
}

/// Distribution id and OS family of the running host
pub fn host_info() -> Result<HostInfo> {
    Ok(HostInfo {
        platform: read_platform()?,
        os_family: std::env::consts::OS.to_string(),
    })
}

fn read_platform() -> Result<String> {
    for path in OS_RELEASE_PATHS {
        if let Ok(content) = read_file_safe(path) {
            if let Some(id) = parse_os_release_id(&content) {
                return Ok(id);
            }
        }
    }

    if let Ok(content) = read_file_safe(LSB_RELEASE_PATH) {
        if let Some(id) = parse_lsb_release_id(&content) {
            return Ok(id);
        }
    }

    Err(FetchError::Detection("Platform not found".to_string()))
}

/// `ID=` value of an os-release file, unquoted
pub fn parse_os_release_id(content: &str) -> Option<String> {
    find_key(content, "ID")
}

/// `DISTRIB_ID=` value of an lsb-release file, lower-cased
pub fn parse_lsb_release_id(content: &str) -> Option<String> {
    find_key(content, "DISTRIB_ID").map(|id| id.to_lowercase())
}

fn find_key(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .find(|(k, _)| k.trim() == key)
        .map(|(_, value)| value.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|value| !value.is_empty())
}

/// Seconds since boot
pub fn read_uptime() -> Result<u64> {
    read_uptime_from(UPTIME_PATH)
}

pub fn read_uptime_from<P: AsRef<Path>>(path: P) -> Result<u64> {
    parse_uptime(&read_first_line(path)?)
}

/// First field of `/proc/uptime`, truncated to whole seconds
pub fn parse_uptime(line: &str) -> Result<u64> {
    let field = line
        .split_whitespace()
        .next()
        .ok_or_else(|| FetchError::Parse("Empty uptime".to_string()))?;

    let secs: f64 = field
        .parse()
        .map_err(|_| FetchError::Parse(format!("Invalid uptime: {}", field)))?;

    if !secs.is_finite() || secs < 0.0 {
        return Err(FetchError::Parse(format!("Invalid uptime: {}", field)));
    }
    Ok(secs as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const UBUNTU_OS_RELEASE: &str = r#"PRETTY_NAME="Ubuntu 22.04.3 LTS"
NAME="Ubuntu"
VERSION_ID="22.04"
VERSION="22.04.3 LTS (Jammy Jellyfish)"
VERSION_CODENAME=jammy
ID=ubuntu
ID_LIKE=debian
"#;

    #[test]
    fn test_parse_os_release_id() {
        assert_eq!(parse_os_release_id(UBUNTU_OS_RELEASE), Some("ubuntu".to_string()));
        assert_eq!(
            parse_os_release_id("ID=\"opensuse-leap\"\n"),
            Some("opensuse-leap".to_string())
        );
    }

    #[test]
    fn test_parse_os_release_id_ignores_id_like() {
        assert_eq!(parse_os_release_id("ID_LIKE=arch\n"), None);
        assert_eq!(parse_os_release_id("# ID=commented\nNAME=x\n"), None);
        assert_eq!(parse_os_release_id("ID=\n"), None);
    }

    #[test]
    fn test_parse_lsb_release_id() {
        let content = "DISTRIB_ID=LinuxMint\nDISTRIB_RELEASE=21\n";
        assert_eq!(parse_lsb_release_id(content), Some("linuxmint".to_string()));
    }

    #[test]
    fn test_parse_uptime() {
        assert_eq!(parse_uptime("350735.47 234388.90").unwrap(), 350_735);
        assert_eq!(parse_uptime("0.99 0.10").unwrap(), 0);
        assert!(parse_uptime("").is_err());
        assert!(parse_uptime("soon 1.0").is_err());
        assert!(parse_uptime("-4.0 1.0").is_err());
    }

    #[test]
    fn test_read_uptime_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "90000.12 170000.00").unwrap();
        assert_eq!(read_uptime_from(file.path()).unwrap(), 90_000);
    }

    #[test]
    fn test_host_info_reports_target_family() {
        if let Ok(info) = host_info() {
            assert_eq!(info.os_family, std::env::consts::OS);
            assert!(!info.platform.is_empty());
        }
    }
}
