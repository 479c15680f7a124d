use ferrofetch::config::{self, Config};
use ferrofetch::CollectorOptions;
use std::io;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FERROFETCH_LOG";
const DEFAULT_LOG_LEVEL: &str = "warn";

fn main() {
    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_logging(config.logging.level.as_deref());

    if let Some(err) = config_error {
        warn!(
            path = ?config::config_path(),
            error = %err,
            "ignoring config file, using defaults"
        );
    }

    let options = CollectorOptions {
        probe_timeout: config.probes.timeout(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = ferrofetch::print_report(&mut out, options) {
        error!(error = %err, "failed to write report");
    }
}

/// Diagnostics go to stderr so stdout carries nothing but the report
fn init_logging(level: Option<&str>) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::try_new(level.unwrap_or(DEFAULT_LOG_LEVEL))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
