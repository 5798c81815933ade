//! CLI Argument Parsing
//!
//! Global flags (--config, --json, --color, --verbose) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// wsmirror - mirror saved files to a remote host over scp
#[derive(Parser, Debug)]
#[command(name = "wsmirror")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: $WSMIRROR_CONFIG, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v also reports skipped saves)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch the sync folders and mirror every saved file
    Watch,

    /// Mirror the given files now
    Push {
        /// Files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Upload even if a file is outside the sync folders or excluded
        #[arg(short, long)]
        force: bool,
    },

    /// Show what would happen for the given files without uploading
    Check {
        /// Files to evaluate
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Write a commented starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
