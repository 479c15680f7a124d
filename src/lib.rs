//! ferrofetch library
//!
//! A concurrent system information summary: seven independent probes run in
//! parallel and their lines are printed in a fixed order.

pub mod collector;
pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod probe;
pub mod utils;

pub use collector::{Collector, CollectorOptions};
pub use collectors::{LiveSource, SystemSource};
pub use data::{CpuDescriptor, Fact, HostInfo, MemoryStats};
pub use error::{FetchError, Result};
pub use probe::ProbeResult;

use std::io::Write;
use std::sync::Arc;

/// Print the report for the running host
pub fn print_report<W: Write>(out: &mut W, options: CollectorOptions) -> Result<()> {
    Collector::new(Arc::new(LiveSource::new()))
        .with_options(options)
        .run(out)
}
