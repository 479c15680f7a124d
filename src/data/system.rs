//! System-wide information structures

/// Operating system identity, raw as the platform reports it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    /// Distribution identifier, e.g. `ubuntu`
    pub platform: String,
    /// OS family, e.g. `linux`
    pub os_family: String,
}
