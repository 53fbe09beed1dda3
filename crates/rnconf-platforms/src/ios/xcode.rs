//! Xcode project inspection
//!
//! Wraps `xcodebuild -list -json`. Workspaces are expanded into their
//! member projects (CocoaPods' `Pods.xcodeproj` excluded); the first member
//! in lexicographic order is the primary project and later members only
//! contribute their schemes.

use async_trait::async_trait;
use regex::Regex;
use rnconf_fs::{NormalizedPath, io};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::process::Stdio;
use std::sync::LazyLock;
use tokio::process::Command;

use crate::{Error, Result};

const XCODEBUILD: &str = "xcodebuild";
const WORKSPACE_DATA: &str = "contents.xcworkspacedata";

static XCODEBUILD_ERROR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"xcodebuild: error: (.*)").expect("valid regex"));

static FILE_REF_LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<FileRef\b[^>]*?\blocation\s*=\s*["']([^"']*)["']"#).expect("valid regex")
});

/// An `.xcodeproj` or `.xcworkspace` found in an iOS source directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XcodeProject {
    /// Bundle name, e.g. `App.xcworkspace`
    pub name: String,
    /// Directory containing the bundle
    pub path: NormalizedPath,
    pub is_workspace: bool,
}

/// The `project` (or `workspace`) object printed by `xcodebuild -list -json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XcodeInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub configurations: Vec<String>,
    #[serde(default)]
    pub schemes: Vec<String>,
    #[serde(default)]
    pub targets: Vec<String>,
}

/// Captured output of a finished subprocess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs native tools. Swapped out in tests.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}

/// [`CommandRunner`] backed by real subprocesses
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        tracing::debug!(program, ?args, "Running native tool");
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::CommandNotFound {
                        command: program.to_string(),
                    }
                } else {
                    Error::CommandFailed {
                        command: program.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn xcodebuild_error(text: &str) -> Option<String> {
    XCODEBUILD_ERROR
        .find(text)
        .map(|m| m.as_str().trim_end().to_string())
}

/// Parse `xcodebuild -list -json` output.
pub fn parse_target_list(output: &str) -> Result<Option<XcodeInfo>> {
    let info: Value = match serde_json::from_str(output) {
        Ok(info) => info,
        Err(e) => {
            return Err(match xcodebuild_error(output) {
                Some(line) => Error::Xcodebuild(line),
                None => Error::MalformedOutput {
                    command: XCODEBUILD.to_string(),
                    message: e.to_string(),
                },
            });
        }
    };

    let Some(section) = info.get("project").or_else(|| info.get("workspace")) else {
        return Ok(None);
    };

    serde_json::from_value(section.clone())
        .map(Some)
        .map_err(|e| Error::MalformedOutput {
            command: XCODEBUILD.to_string(),
            message: e.to_string(),
        })
}

/// Member project locations of a workspace, relative to its source dir.
///
/// Location prefixes (`group:`, `container:`) are stripped, `Pods.xcodeproj`
/// is skipped and the result is sorted.
pub fn workspace_projects(workspace_data: &str) -> Vec<String> {
    let mut locations: Vec<String> = FILE_REF_LOCATION
        .captures_iter(workspace_data)
        .filter_map(|caps| caps.get(1))
        .map(|m| {
            let location = m.as_str();
            location
                .strip_prefix("group:")
                .or_else(|| location.strip_prefix("container:"))
                .unwrap_or(location)
                .to_string()
        })
        .filter(|location| location.ends_with(".xcodeproj"))
        .filter(|location| NormalizedPath::new(location).file_name() != Some("Pods.xcodeproj"))
        .collect();
    locations.sort();
    locations.dedup();
    locations
}

async fn list(runner: &dyn CommandRunner, project: &NormalizedPath) -> Result<Option<XcodeInfo>> {
    let args = vec![
        "-list".to_string(),
        "-json".to_string(),
        "-project".to_string(),
        project.to_string(),
    ];
    let output = runner.run(XCODEBUILD, &args).await?;

    if !output.success {
        let text = format!("{}\n{}", output.stderr, output.stdout);
        return Err(match xcodebuild_error(&text) {
            Some(line) => Error::Xcodebuild(line),
            None => Error::CommandFailed {
                command: format!("{XCODEBUILD} {}", args.join(" ")),
                message: output.stderr.trim().to_string(),
            },
        });
    }

    parse_target_list(&output.stdout)
}

/// Collect configurations, schemes and targets for a project or workspace.
pub async fn get_info(
    project: &XcodeProject,
    source_dir: &NormalizedPath,
    runner: &dyn CommandRunner,
) -> Result<Option<XcodeInfo>> {
    if !project.is_workspace {
        return list(runner, &source_dir.join(&project.name)).await;
    }

    let workspace_file = source_dir.join(&project.name).join(WORKSPACE_DATA);
    let content = io::read_text(&workspace_file).map_err(|e| Error::Workspace {
        path: workspace_file.to_native(),
        message: e.to_string(),
    })?;

    let mut result: Option<XcodeInfo> = None;
    for location in workspace_projects(&content) {
        let Some(info) = list(runner, &source_dir.resolve(&location)).await? else {
            continue;
        };

        if let Some(primary) = result.as_mut() {
            primary.schemes.extend(info.schemes);
        } else {
            result = Some(info);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_target_list_reads_project_section() {
        let info = parse_target_list(
            r#"{"project": {"name": "App", "configurations": ["Debug", "Release"], "schemes": ["App"], "targets": ["App"]}}"#,
        )
        .unwrap()
        .unwrap();

        assert_eq!(info.name.as_deref(), Some("App"));
        assert_eq!(info.schemes, vec!["App"]);
    }

    #[test]
    fn parse_target_list_defaults_missing_schemes() {
        let info = parse_target_list(r#"{"workspace": {"name": "App"}}"#)
            .unwrap()
            .unwrap();
        assert!(info.schemes.is_empty());
    }

    #[test]
    fn parse_target_list_without_known_section_is_none() {
        assert_eq!(parse_target_list("{}").unwrap(), None);
    }

    #[test]
    fn parse_target_list_surfaces_xcodebuild_error_line() {
        let err = parse_target_list(
            "xcodebuild: error: The project named \"App\" does not contain a scheme.\n",
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "xcodebuild: error: The project named \"App\" does not contain a scheme."
        );
    }

    #[test]
    fn parse_target_list_reports_garbage() {
        let err = parse_target_list("not json").unwrap_err();
        assert!(matches!(err, Error::MalformedOutput { .. }));
    }

    #[test]
    fn workspace_projects_filters_and_sorts() {
        let data = r#"<?xml version="1.0" encoding="UTF-8"?>
<Workspace
   version = "1.0">
   <FileRef
      location = "group:Zeta.xcodeproj">
   </FileRef>
   <FileRef
      location = "group:Pods/Pods.xcodeproj">
   </FileRef>
   <FileRef
      location = "container:App.xcodeproj">
   </FileRef>
   <FileRef
      location = "group:README.md">
   </FileRef>
</Workspace>"#;

        assert_eq!(
            workspace_projects(data),
            vec!["App.xcodeproj", "Zeta.xcodeproj"]
        );
    }
}
