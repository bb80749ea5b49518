//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the configuration names one.
pub const DEFAULT_FILTER: &str = "info,salem=debug";

/// Picks the log filter: `--verbose` forces debug, then `RUST_LOG`, then the
/// configured level.
pub fn filter_directive(verbose: bool, env: Option<&str>, configured: &str) -> String {
    if verbose {
        return "debug".to_string();
    }
    match env.filter(|e| !e.is_empty()) {
        Some(env) => env.to_string(),
        None if configured.is_empty() => DEFAULT_FILTER.to_string(),
        None => configured.to_string(),
    }
}

/// Installs a stderr fmt subscriber. Safe to call more than once.
pub fn init(verbose: bool, configured: &str) {
    let env = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(verbose, env.as_deref(), configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| DEFAULT_FILTER.into());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
