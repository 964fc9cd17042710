//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Extract @pugdoc documentation blocks from pug templates
#[derive(Parser, Debug)]
#[command(name = "pugdoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to pugdoc.toml in the root, if present)
    #[arg(short, long, global = true, env = "PUGDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory the glob patterns are resolved against
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Pattern arguments shared by every command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Include patterns; replace the configured ones when given
    #[arg(value_name = "GLOB")]
    pub include: Vec<String>,

    /// Additional exclude patterns
    #[arg(short, long, value_name = "GLOB")]
    pub exclude: Vec<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the concatenated /** ... */ comments
    Render {
        #[command(flatten)]
        selection: Selection,

        /// Skip malformed files instead of stopping at the first one
        #[arg(short, long)]
        keep_going: bool,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the full extraction result as JSON
    Explain {
        #[command(flatten)]
        selection: Selection,

        /// Skip malformed files instead of stopping at the first one
        #[arg(short, long)]
        keep_going: bool,
    },

    /// Scan every file and report block counts and errors
    Check {
        #[command(flatten)]
        selection: Selection,
    },
}
