//! In-memory source for exercising the report engine without a real host.
//!
//! Every collaborator can be switched off individually, slowed down, or made
//! to panic, so tests can check ordering and failure isolation.

use super::SystemSource;
use crate::data::{CpuDescriptor, Fact, HostInfo, MemoryStats};
use crate::error::{FetchError, Result};
use crate::probe::{DESKTOP_VAR, SHELL_VAR};
use std::collections::{HashMap, HashSet};
use std::thread;
use std::time::Duration;

/// Scriptable [`SystemSource`].
///
/// A `None` field makes the matching query fail with a detection error.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    pub user: Option<String>,
    pub hostname: Option<String>,
    pub host: Option<HostInfo>,
    pub cpus: Option<Vec<CpuDescriptor>>,
    pub memory: Option<MemoryStats>,
    pub uptime: Option<u64>,
    pub env: HashMap<String, String>,
    delays: HashMap<Fact, Duration>,
    panics: HashSet<Fact>,
}

impl MockSource {
    /// A source where every query fails and no variable is set
    pub fn new() -> Self {
        Self::default()
    }

    /// A source where every query succeeds with fixed values
    pub fn healthy() -> Self {
        let mut env = HashMap::new();
        env.insert(SHELL_VAR.to_string(), "/bin/zsh".to_string());
        env.insert(DESKTOP_VAR.to_string(), "Hyprland".to_string());

        Self {
            user: Some("ferris".to_string()),
            hostname: Some("crab".to_string()),
            host: Some(HostInfo {
                platform: "arch".to_string(),
                os_family: "linux".to_string(),
            }),
            cpus: Some(vec![
                CpuDescriptor {
                    model_name: "AMD Ryzen 7 5800X 8-Core Processor".to_string(),
                };
                16
            ]),
            memory: Some(MemoryStats {
                used: 4_200_000_000,
                total: 16_709_664_768,
                free: 9_500_000_000,
            }),
            uptime: Some(90_061),
            env,
            delays: HashMap::new(),
            panics: HashSet::new(),
        }
    }

    /// Make the queries behind `fact` fail.
    ///
    /// Shell and desktop cannot fail; for them the variable is unset instead.
    pub fn fail(mut self, fact: Fact) -> Self {
        match fact {
            Fact::User => self.user = None,
            Fact::Os => self.host = None,
            Fact::Cpu => self.cpus = None,
            Fact::Memory => self.memory = None,
            Fact::Uptime => self.uptime = None,
            Fact::Shell => {
                self.env.remove(SHELL_VAR);
            }
            Fact::Desktop => {
                self.env.remove(DESKTOP_VAR);
            }
        }
        self
    }

    /// Sleep before answering any query behind `fact`
    pub fn with_delay(mut self, fact: Fact, delay: Duration) -> Self {
        self.delays.insert(fact, delay);
        self
    }

    /// Panic instead of answering any query behind `fact`
    pub fn with_panic(mut self, fact: Fact) -> Self {
        self.panics.insert(fact);
        self
    }

    fn before(&self, fact: Fact) {
        if let Some(delay) = self.delays.get(&fact) {
            thread::sleep(*delay);
        }
        if self.panics.contains(&fact) {
            panic!("mock source for {} panicked", fact);
        }
    }

    fn answer<T: Clone>(fact: Fact, value: &Option<T>) -> Result<T> {
        value
            .clone()
            .ok_or_else(|| FetchError::Detection(format!("{} source unavailable", fact)))
    }
}

impl SystemSource for MockSource {
    fn current_user(&self) -> Result<String> {
        self.before(Fact::User);
        Self::answer(Fact::User, &self.user)
    }

    fn hostname(&self) -> Result<String> {
        // The user query already applied this fact's delay and panic.
        Self::answer(Fact::User, &self.hostname)
    }

    fn host_info(&self) -> Result<HostInfo> {
        self.before(Fact::Os);
        Self::answer(Fact::Os, &self.host)
    }

    fn cpu_info(&self) -> Result<Vec<CpuDescriptor>> {
        self.before(Fact::Cpu);
        Self::answer(Fact::Cpu, &self.cpus)
    }

    fn virtual_memory(&self) -> Result<MemoryStats> {
        self.before(Fact::Memory);
        Self::answer(Fact::Memory, &self.memory)
    }

    fn uptime(&self) -> Result<u64> {
        self.before(Fact::Uptime);
        Self::answer(Fact::Uptime, &self.uptime)
    }

    fn env_var(&self, key: &str) -> Option<String> {
        match key {
            SHELL_VAR => self.before(Fact::Shell),
            DESKTOP_VAR => self.before(Fact::Desktop),
            _ => {}
        }
        self.env.get(key).cloned()
    }
}
