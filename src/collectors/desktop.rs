//! Shell and desktop environment lookups

use std::env;

/// Read an environment variable.
///
/// A variable that is set counts as present even when empty or not valid
/// UTF-8; the latter is converted lossily.
pub fn read_env(key: &str) -> Option<String> {
    env::var_os(key).map(|value| value.to_string_lossy().into_owned())
}
