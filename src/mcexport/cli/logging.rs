use tracing_subscriber::EnvFilter;

/// Filter directives for diagnostics, e.g. `MCEXPORT_LOG=debug`.
pub const LOG_ENV: &str = "MCEXPORT_LOG";

/// Installs the stderr subscriber. `$MCEXPORT_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
