use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug`
/// with `--verbose`. Stdout is left to command output.
pub fn init(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| CliError::user(format!("Invalid log filter: {e}")))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::user(format!("Failed to install logger: {e}")))?;

    Ok(())
}
