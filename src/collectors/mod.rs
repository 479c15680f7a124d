//! Sources the probes query.
//!
//! `SystemSource` is the seam between the report engine and the host: the
//! live implementation reads procfs, libc and the process environment, while
//! [`mock::MockSource`] lets tests inject slow, failing or panicking sources.

pub mod desktop;
pub mod hardware;
pub mod mock;
pub mod system;

use crate::data::{CpuDescriptor, HostInfo, MemoryStats};
use crate::error::Result;

/// Everything the probes need from the host.
///
/// Each method is an independent query; implementations must tolerate being
/// called concurrently from the probe pool.
pub trait SystemSource: Send + Sync {
    /// Login name of the current user
    fn current_user(&self) -> Result<String>;

    /// Local host name
    fn hostname(&self) -> Result<String>;

    /// Platform (distribution) and OS family names, untransformed
    fn host_info(&self) -> Result<HostInfo>;

    /// One descriptor per logical CPU. May legitimately be empty.
    fn cpu_info(&self) -> Result<Vec<CpuDescriptor>>;

    /// Memory counters in bytes
    fn virtual_memory(&self) -> Result<MemoryStats>;

    /// Seconds since boot
    fn uptime(&self) -> Result<u64>;

    /// Environment variable lookup; `None` when unset
    fn env_var(&self, key: &str) -> Option<String>;
}

/// The running host
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveSource;

impl LiveSource {
    pub fn new() -> Self {
        Self
    }
}

impl SystemSource for LiveSource {
    fn current_user(&self) -> Result<String> {
        system::current_user()
    }

    fn hostname(&self) -> Result<String> {
        system::hostname()
    }

    fn host_info(&self) -> Result<HostInfo> {
        system::host_info()
    }

    fn cpu_info(&self) -> Result<Vec<CpuDescriptor>> {
        hardware::cpu_info()
    }

    fn virtual_memory(&self) -> Result<MemoryStats> {
        hardware::virtual_memory()
    }

    fn uptime(&self) -> Result<u64> {
        system::read_uptime()
    }

    fn env_var(&self, key: &str) -> Option<String> {
        desktop::read_env(key)
    }
}
