//! Log subscriber setup.
//!
//! Library crates only emit `tracing` events; the binary decides where they
//! go. Logs are written to stderr so stdout carries only command output.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, LogFormat};

/// Build the filter for the configured level. `verbose` forces debug.
pub fn filter(config: &LogConfig, verbose: bool) -> Result<EnvFilter> {
    let directive = if verbose { "debug" } else { config.level.as_str() };
    EnvFilter::try_new(directive).map_err(|e| anyhow!("invalid log level {:?}: {}", directive, e))
}

/// Install the global subscriber.
pub fn init(config: &LogConfig, verbose: bool) -> Result<()> {
    let filter = filter(config, verbose)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose);

    match config.format {
        LogFormat::Human => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}
