//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Toolkit - Browse the catalog of calculators, converters and generators
#[derive(Parser, Debug)]
#[command(name = "toolkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a toolkit.toml config file
    #[arg(short, long, global = true, env = "TOOLKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List tools grouped by category
    ///
    /// Examples:
    ///   toolkit list                        # Every tool
    ///   toolkit list --category converters  # One category
    ///   toolkit list --popular              # Featured tools only
    List {
        /// Only show tools in this category (use 'toolkit categories' to see options)
        #[arg(long)]
        category: Option<String>,

        /// Only show tools flagged as popular
        #[arg(long)]
        popular: bool,
    },

    /// List categories with their tool counts
    Categories,

    /// Show details for one tool
    ///
    /// Examples:
    ///   toolkit show tip-calculator
    ///   toolkit show /tools/tip-calculator
    Show {
        /// Tool id, or a navigation path starting with '/'
        tool: String,
    },

    /// Search tool names and descriptions
    ///
    /// Matching is case-insensitive and finds partial words.
    Search {
        /// Text to look for
        query: String,
    },
}
