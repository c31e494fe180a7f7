//! Tracing subscriber setup for the command line tool.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `warn`.
pub fn init_logging(verbose: bool) -> Result<()> {
  let default_level = if verbose { "debug" } else { "warn" };
  let env_filter = if verbose {
    EnvFilter::new(default_level)
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
  };

  tracing_subscriber::registry()
    .with(env_filter)
    .with(
      tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true),
    )
    .try_init()
    .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

  tracing::debug!(verbose, "logging initialized");
  Ok(())
}
