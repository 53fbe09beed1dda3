//! The `schemes` command

use colored::Colorize;
use rnconf_core::{LoadConfigOptions, load_config};
use rnconf_fs::NormalizedPath;
use rnconf_platforms::ProcessRunner;
use rnconf_platforms::ios::IosProjectConfig;
use rnconf_platforms::ios::xcode::get_info;

use super::print_warnings;
use crate::error::{CliError, Result};

const IOS: &str = "ios";

/// List the schemes of the root project's Xcode project or workspace.
pub async fn run_schemes(project_root: NormalizedPath, json: bool) -> Result<()> {
    let config = load_config(LoadConfigOptions {
        project_root: project_root.clone(),
        selected_platform: Some(IOS.to_string()),
    })
    .await?;
    print_warnings(&config.warnings);

    let ios = config
        .project
        .get(IOS)
        .cloned()
        .flatten()
        .ok_or_else(|| CliError::user(format!("No iOS project found in {project_root}")))?;
    let ios: IosProjectConfig = serde_json::from_value(ios)?;

    let Some(xcode_project) = ios.xcode_project else {
        return Err(CliError::user(format!(
            "No Xcode project found in {}",
            ios.source_dir
        )));
    };

    let info = get_info(&xcode_project, &ios.source_dir, &ProcessRunner)
        .await?
        .ok_or_else(|| {
            CliError::user(format!("xcodebuild returned no data for {}", xcode_project.name))
        })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{} {}", "Schemes of".bold(), xcode_project.name.cyan());
    for scheme in &info.schemes {
        println!("  {scheme}");
    }
    Ok(())
}
