//! Hardware-specific information structures

/// One logical CPU as reported by the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuDescriptor {
    pub model_name: String,
}

/// Virtual memory counters, all in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStats {
    pub used: u64,
    pub total: u64,
    pub free: u64,
}
