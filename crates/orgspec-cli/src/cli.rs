//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Organisation specification browser - Inspect resolved organisations and environments
#[derive(Parser, Debug)]
#[command(name = "orgspec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Additional manifest, merged after the global and project manifests
    #[arg(short, long, global = true, env = "ORGSPEC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the global config directory
    #[arg(long, global = true, env = "ORGSPEC_CONFIG_DIR", hide = true)]
    pub config_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show organisation specifications
    ///
    /// Examples:
    ///   orgspec show                 # Every organisation
    ///   orgspec show org1            # A single organisation
    ///   orgspec show org2 -f json    # As JSON
    Show {
        /// Organisation short name (all organisations when omitted)
        short_name: Option<String>,

        /// Output format (text, json or yaml)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List organisations
    List,

    /// Show a single environment
    Env {
        /// Organisation short name
        short_name: String,

        /// Environment name
        name: String,

        /// Output format (text, json or yaml)
        #[arg(short, long)]
        format: Option<String>,
    },
}
