//! Fan-out/fan-in report engine.
//!
//! Every fact gets its own probe task on a dedicated rayon pool and its own
//! single-slot channel. The slots are then drained strictly in
//! [`Fact::ALL`] order, printing each line as soon as it arrives, so a slow
//! probe only delays the lines after it and a failing one only replaces its
//! own line.

use crate::collectors::SystemSource;
use crate::data::Fact;
use crate::display;
use crate::error::Result;
use crate::probe::{self, ProbeResult};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::any::Any;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{sync_channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectorOptions {
    /// Deadline per probe, counted from dispatch. `None` waits forever.
    pub probe_timeout: Option<Duration>,
}

/// A pending probe result, tagged with the fact it belongs to
struct Slot {
    fact: Fact,
    receiver: Receiver<ProbeResult>,
}

pub struct Collector {
    source: Arc<dyn SystemSource>,
    options: CollectorOptions,
}

impl Collector {
    pub fn new(source: Arc<dyn SystemSource>) -> Self {
        Self {
            source,
            options: CollectorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CollectorOptions) -> Self {
        self.options = options;
        self
    }

    /// Print the banner, the seven fact lines and the closing banner.
    ///
    /// Lines are flushed one at a time. Only write errors are returned;
    /// probe failures show up as error lines.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        self.run_on(out, build_pool())
    }

    /// Same as [`Collector::run`]; without a pool every probe runs inline
    fn run_on<W: Write>(&self, out: &mut W, pool: Option<ThreadPool>) -> Result<()> {
        writeln!(out, "{}", display::header())?;
        out.flush()?;

        let dispatched = Instant::now();
        let slots = self.dispatch(pool);

        for slot in slots {
            let result = self.await_slot(slot, dispatched);
            writeln!(out, "{}", result.line)?;
            out.flush()?;
        }
        debug!(elapsed = ?dispatched.elapsed(), "report collected");

        writeln!(out, "{}", display::footer())?;
        out.flush()?;
        Ok(())
    }

    /// Render the whole report into a string
    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.run(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Start one probe per fact and hand back their slots in report order
    fn dispatch(&self, pool: Option<ThreadPool>) -> Vec<Slot> {
        Fact::ALL
            .iter()
            .map(|&fact| {
                let (sender, receiver) = sync_channel(1);
                let source = Arc::clone(&self.source);
                let task = move || {
                    // Fails only when the collector gave up on this slot.
                    let _ = sender.send(probe::run(fact, source.as_ref()));
                };

                match &pool {
                    Some(pool) => pool.spawn(task),
                    None => {
                        // Unwinding drops the sender, which the slot reports as a failure.
                        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(task)) {
                            log_panic(payload);
                        }
                    }
                }
                Slot { fact, receiver }
            })
            .collect()
        // Dropping the pool lets queued probes finish without waiting on them.
    }

    fn await_slot(&self, slot: Slot, dispatched: Instant) -> ProbeResult {
        let received = match self.options.probe_timeout {
            Some(timeout) => {
                let remaining = (dispatched + timeout).saturating_duration_since(Instant::now());
                slot.receiver
                    .recv_timeout(remaining)
                    .map_err(|err| match err {
                        RecvTimeoutError::Timeout => "deadline expired",
                        RecvTimeoutError::Disconnected => "probe exited without a result",
                    })
            }
            None => slot
                .receiver
                .recv()
                .map_err(|_| "probe exited without a result"),
        };

        match received {
            Ok(result) => {
                debug_assert_eq!(result.fact, slot.fact);
                result
            }
            Err(reason) => {
                warn!(fact = %slot.fact, reason, "substituting error line");
                ProbeResult::failure(slot.fact)
            }
        }
    }
}

fn build_pool() -> Option<ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(Fact::ALL.len())
        .thread_name(|i| format!("probe-{}", i))
        .panic_handler(log_panic)
        .build()
        .map_err(|err| warn!(error = %err, "probe pool unavailable, probing inline"))
        .ok()
}

fn log_panic(payload: Box<dyn Any + Send>) {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    warn!(panic = %message, "probe panicked");
}
