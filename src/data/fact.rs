//! The fixed set of facts shown in the report

use std::fmt;

/// One line of the report.
///
/// Declaration order is the print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fact {
    User,
    Os,
    Cpu,
    Memory,
    Uptime,
    Shell,
    Desktop,
}

impl Fact {
    /// Every fact, in report order
    pub const ALL: [Fact; 7] = [
        Fact::User,
        Fact::Os,
        Fact::Cpu,
        Fact::Memory,
        Fact::Uptime,
        Fact::Shell,
        Fact::Desktop,
    ];

    /// Label printed in front of the value
    pub fn label(self) -> &'static str {
        match self {
            Fact::User => "User",
            Fact::Os => "OS",
            Fact::Cpu => "CPU",
            Fact::Memory => "Memory",
            Fact::Uptime => "Uptime",
            Fact::Shell => "Shell",
            Fact::Desktop => "WM/DE",
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
