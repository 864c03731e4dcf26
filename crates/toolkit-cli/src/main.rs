//! Toolkit CLI
//!
//! The command-line interface for browsing the widget catalog.

mod cli;
mod commands;
mod config;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use toolkit_registry::Catalog;

use cli::{Cli, Commands};
use config::{CliConfig, OutputFormat};
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

    let config = CliConfig::load(cli.config.as_deref())?;
    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = config.format(cli.json);

    match cli.command {
        Some(cmd) => execute_command(cmd, format),
        None => {
            // No command provided - show help hint
            println!("{} Widget catalog browser", "toolkit".green().bold());
            println!();
            println!("Run {} for available commands.", "toolkit --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, format: OutputFormat) -> Result<()> {
    let catalog = Catalog::builtin();
    match cmd {
        Commands::List { category, popular } => {
            commands::run_list(catalog, category.as_deref(), popular, format)
        }
        Commands::Categories => commands::run_categories(catalog, format),
        Commands::Show { tool } => commands::run_show(catalog, &tool, format),
        Commands::Search { query } => commands::run_search(catalog, &query, format),
    }
}
