//! Probes: one query and one formatted line per fact

use crate::collectors::SystemSource;
use crate::data::Fact;
use crate::display::{format_error, format_line};
use crate::error::{FetchError, Result};
use crate::utils::parsing::{format_bytes, format_uptime, title_case};
use tracing::debug;

pub const SHELL_VAR: &str = "SHELL";
pub const DESKTOP_VAR: &str = "XDG_CURRENT_DESKTOP";

const SHELL_FALLBACK: &str = "/usr/bin/sh or Unknown";
const DESKTOP_FALLBACK: &str = "None/Unknown";

/// The line a probe hands back to the collector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub fact: Fact,
    pub line: String,
    pub failed: bool,
}

impl ProbeResult {
    pub fn success(fact: Fact, value: &str) -> Self {
        Self {
            fact,
            line: format_line(fact.label(), value),
            failed: false,
        }
    }

    pub fn failure(fact: Fact) -> Self {
        Self {
            fact,
            line: format_error(fact.label()),
            failed: true,
        }
    }
}

/// Query the source behind `fact` and format the outcome.
///
/// Never fails: any error from the source becomes the fact's error line.
pub fn run(fact: Fact, source: &dyn SystemSource) -> ProbeResult {
    let value = match fact {
        Fact::User => user(source),
        Fact::Os => os(source),
        Fact::Cpu => cpu(source),
        Fact::Memory => memory(source),
        Fact::Uptime => uptime(source),
        Fact::Shell => Ok(shell(source)),
        Fact::Desktop => Ok(desktop(source)),
    };

    match value {
        Ok(value) => ProbeResult::success(fact, &value),
        Err(err) => {
            debug!(fact = %fact, error = %err, "probe failed");
            ProbeResult::failure(fact)
        }
    }
}

fn user(source: &dyn SystemSource) -> Result<String> {
    let user = source.current_user()?;
    let host = source.hostname()?;
    Ok(format!("{}@{}", user, host))
}

fn os(source: &dyn SystemSource) -> Result<String> {
    let info = source.host_info()?;
    Ok(format!(
        "{} ({})",
        title_case(&info.platform),
        title_case(&info.os_family)
    ))
}

fn cpu(source: &dyn SystemSource) -> Result<String> {
    let cpus = source.cpu_info()?;
    let first = cpus
        .first()
        .ok_or_else(|| FetchError::Detection("No CPU descriptors reported".to_string()))?;
    Ok(format!("{}x {}", cpus.len(), first.model_name))
}

fn memory(source: &dyn SystemSource) -> Result<String> {
    let mem = source.virtual_memory()?;
    Ok(format!(
        "{} / {} ({} free)",
        format_bytes(mem.used),
        format_bytes(mem.total),
        format_bytes(mem.free)
    ))
}

fn uptime(source: &dyn SystemSource) -> Result<String> {
    Ok(format_uptime(source.uptime()?))
}

fn shell(source: &dyn SystemSource) -> String {
    source
        .env_var(SHELL_VAR)
        .unwrap_or_else(|| SHELL_FALLBACK.to_string())
}

fn desktop(source: &dyn SystemSource) -> String {
    source
        .env_var(DESKTOP_VAR)
        .unwrap_or_else(|| DESKTOP_FALLBACK.to_string())
}
