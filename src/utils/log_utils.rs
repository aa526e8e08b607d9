use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `log` records are bridged into it, so the
/// `log` macros used across the crate end up here too. Defaults to `warn` so
/// the human summary on stdout stays readable; set `RUST_LOG=debug` to see
/// every probe attempt.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))
}
