use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialises the global `tracing` subscriber, logging to stderr.
///
/// `RUST_LOG` takes precedence over `log_level`. An unparsable directive
/// falls back to `"warn"`.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;

    Ok(())
}
