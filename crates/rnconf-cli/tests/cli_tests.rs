//! End-to-end tests for the rnconf binary

use assert_cmd::Command;
use predicates::prelude::*;
use rnconf_test_utils::{TestProject, mocks};
use serde_json::Value;

fn rnconf() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("rnconf"))
}

fn app_with_dependencies() -> TestProject {
    TestProject::new()
        .with_files(mocks::REACT_NATIVE)
        .with_files(mocks::PODSPEC_LIBRARY)
        .with_package_json(
            r#"{"dependencies": {"react-native": "0.0.1", "react-native-test": "1.0.0"}}"#,
        )
}

#[test]
fn test_help() {
    rnconf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("schemes"));
}

#[test]
fn test_no_command_prints_hint() {
    rnconf()
        .assert()
        .success()
        .stdout(predicate::str::contains("rnconf --help"));
}

#[test]
fn test_config_prints_json() {
    let project = app_with_dependencies();

    let output = rnconf()
        .arg("--project-root")
        .arg(project.path())
        .arg("config")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let config: Value = serde_json::from_slice(&output).unwrap();
    assert!(config["dependencies"]["react-native-test"]["platforms"]["ios"]["podspecPath"]
        .as_str()
        .unwrap()
        .ends_with("ReactNativeTest.podspec"));
    assert_eq!(config["reactNativeVersion"], "0.0.1");
}

#[test]
fn test_config_selected_platform() {
    let project = app_with_dependencies();

    let output = rnconf()
        .arg("--project-root")
        .arg(project.path())
        .args(["config", "--platform", "ios"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let config: Value = serde_json::from_slice(&output).unwrap();
    let platforms = config["platforms"].as_object().unwrap();
    assert_eq!(platforms.keys().collect::<Vec<_>>(), vec!["ios"]);
}

#[test]
fn test_missing_dependency_is_a_warning() {
    let project = TestProject::new()
        .with_files(mocks::REACT_NATIVE)
        .with_package_json(r#"{"dependencies": {"react-native": "0.0.1", "ghost": "1.0.0"}}"#);

    rnconf()
        .arg("--project-root")
        .arg(project.path())
        .arg("config")
        .assert()
        .success()
        .stderr(predicate::str::contains("ghost"));
}

#[test]
fn test_each_warning_is_printed_once() {
    let project = TestProject::new()
        .with_files(mocks::REACT_NATIVE)
        .with_package_json(r#"{"dependencies": {"react-native": "0.0.1", "ghost": "1.0.0"}}"#);

    let output = rnconf()
        .arg("--project-root")
        .arg(project.path())
        .arg("config")
        .assert()
        .success()
        .get_output()
        .stderr
        .clone();

    let stderr = String::from_utf8(output).unwrap();
    assert_eq!(
        stderr
            .matches(r#"Unable to find the installation directory of "ghost""#)
            .count(),
        1,
        "{stderr}"
    );
}

#[test]
fn test_missing_package_json_fails() {
    let project = TestProject::new();

    rnconf()
        .arg("--project-root")
        .arg(project.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_schemes_without_ios_project_fails() {
    let project = app_with_dependencies();

    rnconf()
        .arg("--project-root")
        .arg(project.path())
        .arg("schemes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No iOS project found"));
}
