//! `check`: scan everything and report, without emitting output.

use std::collections::{HashMap, HashSet};

use colored::Colorize;
use pugdoc_blocks::{Error, ErrorPolicy, RunConfig, Runner, markers_balanced};
use pugdoc_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Run the check command
///
/// Malformed files never stop the scan. Fails when any file had errors.
pub fn run_check(root: &NormalizedPath, config: &RunConfig) -> Result<()> {
    let mut scanned = Vec::new();
    let mut unbalanced = Vec::new();
    let sources = config.file_set(root.clone()).sources()?.inspect(|file| {
        if let Ok(file) = file {
            scanned.push(file.path.clone());
            if !markers_balanced(&file.content) {
                unbalanced.push(file.path.clone());
            }
        }
    });

    let result = Runner::new(config)
        .with_policy(ErrorPolicy::Collect)
        .run(sources)?;

    let counts: HashMap<&NormalizedPath, usize> = result
        .files
        .iter()
        .map(|file| (&file.path, file.blocks.len()))
        .collect();
    let failed: HashSet<&NormalizedPath> = result.errors.iter().filter_map(Error::path).collect();

    for path in scanned.iter().filter(|path| !failed.contains(path)) {
        let count = counts.get(path).copied().unwrap_or(0);
        println!("{} {} ({} block(s))", "ok".green(), path, count);
    }
    for path in &unbalanced {
        println!(
            "{} {} has unequal @pugdoc and @endpugdoc counts",
            "warning".yellow(),
            path
        );
    }
    for error in &result.errors {
        eprintln!("{}: {}", "error".red().bold(), error);
    }

    if !result.errors.is_empty() {
        return Err(CliError::CheckFailed {
            count: result.errors.len(),
        });
    }

    println!(
        "{} {} block(s) in {} file(s)",
        "OK".green().bold(),
        result.block_count(),
        result.files.len()
    );
    Ok(())
}
