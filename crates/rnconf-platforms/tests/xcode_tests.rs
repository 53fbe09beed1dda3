//! Integration tests for Xcode project inspection against a faked xcodebuild.

mod common;

use common::{FakeXcodebuild, write_files};
use pretty_assertions::assert_eq;
use rnconf_fs::NormalizedPath;
use rnconf_platforms::ios::finders::find_xcode_project;
use rnconf_platforms::ios::xcode::get_info;
use rnconf_platforms::{Error, XcodeProject};
use tempfile::TempDir;

const WORKSPACE_DATA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Workspace
   version = "1.0">
   <FileRef
      location = "group:Lib/Lib.xcodeproj">
   </FileRef>
   <FileRef
      location = "group:App.xcodeproj">
   </FileRef>
   <FileRef
      location = "group:Pods/Pods.xcodeproj">
   </FileRef>
</Workspace>
"#;

fn workspace(temp: &TempDir) -> (NormalizedPath, XcodeProject) {
    write_files(
        temp.path(),
        &[("ios/App.xcworkspace/contents.xcworkspacedata", WORKSPACE_DATA)],
    );
    let source_dir = NormalizedPath::new(temp.path()).join("ios");
    let project = find_xcode_project(&source_dir).unwrap().unwrap();
    (source_dir, project)
}

#[tokio::test]
async fn test_plain_project_is_listed_directly() {
    let temp = TempDir::new().unwrap();
    let source_dir = NormalizedPath::new(temp.path());
    let project = XcodeProject {
        name: "App.xcodeproj".to_string(),
        path: source_dir.clone(),
        is_workspace: false,
    };
    let project_path = source_dir.join("App.xcodeproj").to_string();
    let runner = FakeXcodebuild::new().with_project(
        project_path.clone(),
        r#"{"project": {"name": "App", "configurations": ["Debug", "Release"], "schemes": ["App"], "targets": ["App"]}}"#,
    );

    let info = get_info(&project, &source_dir, &runner).await.unwrap().unwrap();

    assert_eq!(info.configurations, vec!["Debug", "Release"]);
    assert_eq!(info.schemes, vec!["App"]);
    assert_eq!(
        runner.calls(),
        vec![vec![
            "-list".to_string(),
            "-json".to_string(),
            "-project".to_string(),
            project_path
        ]]
    );
}

#[tokio::test]
async fn test_workspace_members_contribute_schemes() {
    let temp = TempDir::new().unwrap();
    let (source_dir, project) = workspace(&temp);
    assert!(project.is_workspace);

    let runner = FakeXcodebuild::new()
        .with_project(
            source_dir.resolve("App.xcodeproj").to_string(),
            r#"{"project": {"name": "App", "configurations": ["Debug"], "schemes": ["App"], "targets": ["App"]}}"#,
        )
        .with_project(
            source_dir.resolve("Lib/Lib.xcodeproj").to_string(),
            r#"{"project": {"name": "Lib", "configurations": ["Staging"], "schemes": ["Lib", "LibTests"], "targets": ["Lib"]}}"#,
        );

    let info = get_info(&project, &source_dir, &runner).await.unwrap().unwrap();

    assert_eq!(info.name.as_deref(), Some("App"));
    assert_eq!(info.configurations, vec!["Debug"]);
    assert_eq!(info.schemes, vec!["App", "Lib", "LibTests"]);
    assert_eq!(runner.calls().len(), 2, "Pods.xcodeproj must not be listed");
}

#[tokio::test]
async fn test_primary_project_without_schemes_defaults_to_empty() {
    let temp = TempDir::new().unwrap();
    let (source_dir, project) = workspace(&temp);

    let runner = FakeXcodebuild::new().with_project(
        source_dir.resolve("App.xcodeproj").to_string(),
        r#"{"project": {"name": "App", "configurations": ["Debug"]}}"#,
    );

    let info = get_info(&project, &source_dir, &runner).await.unwrap().unwrap();
    assert!(info.schemes.is_empty());
}

#[tokio::test]
async fn test_xcodebuild_error_line_is_reported() {
    let temp = TempDir::new().unwrap();
    let (source_dir, project) = workspace(&temp);

    let runner = FakeXcodebuild::new().with_failure(
        source_dir.resolve("App.xcodeproj").to_string(),
        "2024-01-01 xcodebuild[123] warning\nxcodebuild: error: Unable to read project 'App.xcodeproj'.\n",
    );

    let err = get_info(&project, &source_dir, &runner).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "xcodebuild: error: Unable to read project 'App.xcodeproj'."
    );
}

#[tokio::test]
async fn test_missing_workspace_data_is_an_error() {
    let temp = TempDir::new().unwrap();
    let source_dir = NormalizedPath::new(temp.path());
    let project = XcodeProject {
        name: "Broken.xcworkspace".to_string(),
        path: source_dir.clone(),
        is_workspace: true,
    };

    let err = get_info(&project, &source_dir, &FakeXcodebuild::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Workspace { .. }));
}
