//! Data structures shared between collectors, probes and the collector

pub mod fact;
pub mod hardware;
pub mod system;

pub use fact::Fact;
pub use hardware::{CpuDescriptor, MemoryStats};
pub use system::HostInfo;
