//! Organisation specification CLI
//!
//! Read-only command-line surface over resolved organisation specifications.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::SpecContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} failed to initialise logging: {}", "warning:".yellow().bold(), e);
    }
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    let cwd = std::env::current_dir()?;
    let ctx = SpecContext::load(&cwd, cli.config.as_deref(), cli.config_dir.as_deref())?;

    match cli.command {
        Some(cmd) => execute_command(&ctx, cmd),
        None => commands::run_show(&ctx, None, None),
    }
}

fn execute_command(ctx: &SpecContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Show { short_name, format } => {
            commands::run_show(ctx, short_name.as_deref(), format.as_deref())
        }
        Commands::List => commands::run_list(ctx),
        Commands::Env {
            short_name,
            name,
            format,
        } => commands::run_env(ctx, &short_name, &name, format.as_deref()),
    }
}
