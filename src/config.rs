use crate::error::Result;
use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf, time::Duration};
use dirs::config_dir;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub probes: ProbeConfig,
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Per-probe deadline counted from dispatch. Unset means wait forever.
    pub timeout_ms: Option<u64>,
}

impl ProbeConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `FERROFETCH_LOG` is not set
    pub level: Option<String>,
}

/// `<config_dir>/ferrofetch/config.toml`, if a config dir exists at all
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("ferrofetch/config.toml"))
}

/// Load the user config; a missing file yields the defaults
pub fn load_config() -> Result<Config> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let config_data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => return Err(err.into()),
    };
    Ok(toml::de::from_str(&config_data)?)
}
