//! wsmirror CLI - mirror saved files to a remote host over scp
//!
//! Usage: wsmirror <COMMAND>
//!
//! Commands:
//!   watch   Watch the sync folders and mirror every saved file
//!   push    Mirror the given files now
//!   check   Show what would happen for the given files
//!   init    Write a commented starter config file

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use ui::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Watch => commands::watch::cmd_watch(config, ui),
        Commands::Push { files, force } => commands::push::cmd_push(config, &files, force, ui),
        Commands::Check { files } => commands::check::cmd_check(config, &files, ui),
        Commands::Init { force } => commands::init::cmd_init(config, force, ui),
    }
}
