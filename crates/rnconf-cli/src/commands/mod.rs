//! Command implementations

mod config;
mod schemes;

pub use config::run_config;
pub use schemes::run_schemes;

use colored::Colorize;
use rnconf_core::Warning;

/// Print resolution warnings to stderr, keeping stdout clean for JSON.
pub(crate) fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("{}: {}", "warn".yellow().bold(), warning);
    }
}
