//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rnconf - Resolve the native project configuration of an app
#[derive(Parser, Debug)]
#[command(name = "rnconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Root of the app (the directory containing package.json)
    #[arg(long, global = true, default_value = ".", env = "RNCONF_PROJECT_ROOT")]
    pub project_root: PathBuf,

    /// Only resolve this platform
    #[arg(long, global = true)]
    pub platform: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the resolved configuration as JSON
    ///
    /// Warnings about individual dependencies are printed to stderr.
    Config,

    /// List the Xcode schemes of the root iOS project
    Schemes {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
