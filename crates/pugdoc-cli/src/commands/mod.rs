//! Command implementations
//!
//! Every command resolves a [`RunConfig`] the same way: the configuration
//! file first, then the patterns given on the command line.

mod check;
mod render;

use std::path::Path;

use pugdoc_blocks::RunConfig;
use pugdoc_fs::{ConfigStore, NormalizedPath};

use crate::cli::Selection;
use crate::error::{CliError, Result};

pub use check::run_check;
pub use render::{run_explain, run_render};

/// Configuration file picked up from the root when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "pugdoc.toml";

/// Load the run configuration and apply command-line overrides.
pub fn resolve_config(
    root: &NormalizedPath,
    config: Option<&Path>,
    selection: &Selection,
) -> Result<RunConfig> {
    let mut resolved = match config {
        Some(path) => {
            let path = NormalizedPath::new(path);
            if !path.to_native().is_file() {
                return Err(CliError::user(format!("Config file not found: {path}")));
            }
            load(&path)?
        }
        None => {
            let path = root.join(DEFAULT_CONFIG_FILE);
            if path.to_native().is_file() {
                load(&path)?
            } else {
                tracing::debug!(root = %root, "No config file, using defaults");
                RunConfig::default()
            }
        }
    };

    if !selection.include.is_empty() {
        resolved.include = selection.include.clone();
    }
    resolved.exclude.extend(selection.exclude.iter().cloned());

    Ok(resolved)
}

fn load(path: &NormalizedPath) -> Result<RunConfig> {
    tracing::debug!(path = %path, "Loading config");
    Ok(ConfigStore::new().load(path)?)
}
