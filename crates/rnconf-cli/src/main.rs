//! rnconf CLI
//!
//! Prints the resolved native configuration of an app and inspects its
//! Xcode project.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use rnconf_fs::NormalizedPath;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warn".yellow().bold(), e);
    }
    tracing::debug!(root = %cli.project_root.display(), "Starting");

    let Some(command) = cli.command else {
        println!("{} Native project config resolver", "rnconf".green().bold());
        println!();
        println!("Run {} for available commands.", "rnconf --help".cyan());
        return Ok(());
    };

    let root = NormalizedPath::new(std::path::absolute(&cli.project_root)?);
    match command {
        Commands::Config => commands::run_config(root, cli.platform).await,
        Commands::Schemes { json } => commands::run_schemes(root, json).await,
    }
}
