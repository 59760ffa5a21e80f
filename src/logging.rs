use tracing_subscriber::EnvFilter;

/// Install the global subscriber: plain text on stderr, filtered by
/// `RUST_LOG` (default `warn`). Stdout stays reserved for command output.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(target: "todolist", "Logging initialized");
    }
}
