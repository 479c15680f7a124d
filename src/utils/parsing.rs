//! String parsing and unit formatting utilities

use crate::error::{FetchError, Result};

/// Extract value after a colon and space
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse a `/proc/meminfo` style value (`"  16318032 kB"`) into bytes
pub fn kb_to_bytes(kb_str: &str) -> Result<u64> {
    let digits = kb_str.trim().trim_end_matches("kB").trim();
    let kb: u64 = digits
        .parse()
        .map_err(|_| FetchError::Parse(format!("Invalid memory value: {}", kb_str.trim())))?;
    Ok(kb.saturating_mul(1024))
}

/// Format a byte count with base-1000 units.
///
/// Below 1000 the count is printed as is, otherwise it is scaled to the
/// largest unit that keeps the integer part under 1000 and printed with one
/// decimal.
pub fn format_bytes(bytes: u64) -> String {
    const UNIT: u64 = 1000;

    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    let prefix = ['k', 'M', 'G', 'T', 'P', 'E'][exp];
    format!("{:.1} {}B", bytes as f64 / div as f64, prefix)
}

/// Format uptime from seconds as `D Days HH:MM:SS`
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds / 3600) % 24;
    let minutes = (seconds / 60) % 60;
    let secs = seconds % 60;

    format!("{} Days {:02}:{:02}:{:02}", days, hours, minutes, secs)
}

/// Capitalize the first letter of every word and lower-case the rest.
///
/// Case mapping is Unicode's default, independent of the current locale.
/// Apostrophes do not start a new word (`o'neil` becomes `O'neil`).
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphanumeric() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
                in_word = true;
            }
        } else {
            out.push(c);
            in_word = in_word && c == '\'';
        }
    }

    out
}
