//! The `config` command

use rnconf_core::{LoadConfigOptions, load_config};
use rnconf_fs::NormalizedPath;

use super::print_warnings;
use crate::error::Result;

/// Resolve the configuration and print it as pretty JSON.
pub async fn run_config(project_root: NormalizedPath, platform: Option<String>) -> Result<()> {
    let config = load_config(LoadConfigOptions {
        project_root,
        selected_platform: platform,
    })
    .await?;

    print_warnings(&config.warnings);
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
