//! Structured logging via the `tracing` ecosystem.
//!
//! Console output with uptime timestamps and module paths, plus optional
//! JSON file logging in debug builds. The configuration system's log-level
//! override takes precedence over the built-in default; `RUST_LOG` beats both.

use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use windfall_config::Config;

/// Default filter: info everywhere, with the physics backend quieted down.
const DEFAULT_FILTER: &str = "info,rapier3d=warn";

/// Initialize the tracing subscriber.
///
/// * `log_dir` — optional directory for a JSON log file (debug builds only).
/// * `debug_build` — whether this is a debug build (enables file logging).
/// * `config` — optional configuration supplying a log-level override.
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = config
        .map(|c| c.debug.log_level.as_str())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string();

    // RUST_LOG wins over both the config override and the default.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    // In debug builds, also log to a file for post-mortem analysis.
    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("windfall.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Create an `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
