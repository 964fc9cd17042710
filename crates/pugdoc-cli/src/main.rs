//! pugdoc CLI
//!
//! Extracts `@pugdoc` blocks from pug templates and prints them as
//! `/** ... */` comments or as a JSON result.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use pugdoc_fs::NormalizedPath;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    tracing::debug!(root = %cli.root.display(), "Starting");

    let root = NormalizedPath::new(&cli.root);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Render {
            selection,
            keep_going,
            output,
        } => {
            let config = commands::resolve_config(&root, config_path, &selection)?;
            commands::run_render(&root, &config, keep_going, output.as_deref())
        }
        Commands::Explain {
            selection,
            keep_going,
        } => {
            let config = commands::resolve_config(&root, config_path, &selection)?;
            commands::run_explain(&root, &config, keep_going)
        }
        Commands::Check { selection } => {
            let config = commands::resolve_config(&root, config_path, &selection)?;
            commands::run_check(&root, &config)
        }
    }
}
