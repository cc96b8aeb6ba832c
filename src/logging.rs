use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::error::{GodzinaError, Result};

pub const DEFAULT_LEVEL: &str = "warn";

/// Maps the number of `-v` flags to a filter level.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LEVEL,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// The `RUST_LOG` directive, when set and not blank.
pub fn env_directive() -> Option<String> {
    std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Picks the filter directive: `RUST_LOG`, then `-v`, then the config
/// `log_level`, then [`DEFAULT_LEVEL`].
pub fn resolve_level(rust_log: Option<&str>, verbosity: u8, config_level: Option<&str>) -> String {
    match (rust_log, verbosity, config_level) {
        (Some(directive), _, _) if !directive.trim().is_empty() => directive.to_string(),
        (_, v, _) if v > 0 => level_for_verbosity(v).to_string(),
        (_, _, Some(level)) if !level.trim().is_empty() => level.to_string(),
        _ => DEFAULT_LEVEL.to_string(),
    }
}

/// Installs the stderr subscriber for an already resolved directive.
pub fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|err| GodzinaError::Logging(format!("bad filter '{}': {}", directive, err)))?;

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| GodzinaError::Logging(err.to_string()))?;

    Ok(())
}
