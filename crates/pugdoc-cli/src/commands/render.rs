//! `render` and `explain`: the two output modes of a run.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use pugdoc_blocks::{ErrorPolicy, RunConfig, RunResult, Runner};
use pugdoc_fs::NormalizedPath;

use crate::error::Result;

fn execute(root: &NormalizedPath, config: &RunConfig, keep_going: bool) -> Result<RunResult> {
    let mut runner = Runner::new(config);
    if keep_going {
        runner = runner.with_policy(ErrorPolicy::Collect);
    }

    let sources = config.file_set(root.clone()).sources()?;
    let result = runner.run(sources)?;

    for error in &result.errors {
        eprintln!("{}: {}", "warning".yellow().bold(), error);
    }
    Ok(result)
}

/// Emit the concatenated comment text, to `output` or stdout.
pub fn run_render(
    root: &NormalizedPath,
    config: &RunConfig,
    keep_going: bool,
    output: Option<&Path>,
) -> Result<()> {
    let result = execute(root, config, keep_going)?;

    match output {
        Some(path) => {
            fs::write(path, &result.raw)?;
            tracing::info!(path = %path.display(), bytes = result.raw.len(), "Wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(result.raw.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Emit the full result with per-file provenance as JSON.
pub fn run_explain(root: &NormalizedPath, config: &RunConfig, keep_going: bool) -> Result<()> {
    let result = execute(root, config, keep_going)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
