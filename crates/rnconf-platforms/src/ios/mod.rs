//! iOS platform provider
//!
//! A dependency contributes to iOS when it ships a podspec. The root project
//! is an iOS project when it has a Podfile (or declares `sourceDir`).

pub mod finders;
pub mod xcode;

use async_trait::async_trait;
use rnconf_fs::NormalizedPath;
use rnconf_schema::PackageManifest;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::params::{parse_params, to_value};
use crate::provider::PlatformProvider;
use crate::Result;
use xcode::XcodeProject;

const IOS: &str = "ios";
const UNRESOLVED_VERSION: &str = "unresolved";

/// Parameters a dependency may declare for iOS
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DependencyParams {
    podspec_path: Option<String>,
    version: Option<String>,
    configurations: Option<Vec<String>>,
    script_phases: Option<Vec<Value>>,
}

/// Merged iOS settings for one dependency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosDependencyConfig {
    pub podspec_path: String,
    pub version: String,
    pub configurations: Vec<String>,
    pub script_phases: Vec<Value>,
}

/// Parameters the root project may declare for iOS
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ProjectParams {
    source_dir: Option<String>,
    watch_mode_command_params: Option<Vec<String>>,
    automatic_pods_installation: Option<bool>,
    assets: Option<Vec<String>>,
}

/// Merged iOS settings for the root project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosProjectConfig {
    pub source_dir: NormalizedPath,
    pub xcode_project: Option<XcodeProject>,
    pub watch_mode_command_params: Option<Vec<String>>,
    pub automatic_pods_installation: Option<bool>,
    pub assets: Vec<String>,
}

/// Built-in iOS provider
#[derive(Debug, Default, Clone, Copy)]
pub struct IosPlatform;

impl IosPlatform {
    pub fn new() -> Self {
        Self
    }
}

fn package_version(package_root: &NormalizedPath) -> String {
    PackageManifest::load(package_root)
        .ok()
        .and_then(|manifest| manifest.version)
        .unwrap_or_else(|| UNRESOLVED_VERSION.to_string())
}

#[async_trait]
impl PlatformProvider for IosPlatform {
    fn id(&self) -> &str {
        IOS
    }

    async fn project_config(
        &self,
        project_root: &NormalizedPath,
        user: &Value,
    ) -> Result<Option<Value>> {
        let params: ProjectParams = parse_params(IOS, user)?;

        let source_dir = match &params.source_dir {
            Some(dir) => project_root.resolve(dir),
            None => match finders::find_podfile(project_root).and_then(|podfile| podfile.parent()) {
                Some(dir) => dir,
                None => return Ok(None),
            },
        };

        let config = IosProjectConfig {
            xcode_project: finders::find_xcode_project(&source_dir)?,
            source_dir,
            watch_mode_command_params: params.watch_mode_command_params,
            automatic_pods_installation: params.automatic_pods_installation,
            assets: params.assets.unwrap_or_default(),
        };
        to_value(IOS, &config).map(Some)
    }

    async fn dependency_config(
        &self,
        package_root: &NormalizedPath,
        user: &Value,
    ) -> Result<Option<Value>> {
        let params: DependencyParams = parse_params(IOS, user)?;

        let podspec_path = match params.podspec_path {
            Some(path) => path,
            None => match finders::find_podspec(package_root)? {
                Some(path) => path.to_string(),
                None => return Ok(None),
            },
        };

        let config = IosDependencyConfig {
            podspec_path,
            version: params
                .version
                .unwrap_or_else(|| package_version(package_root)),
            configurations: params.configurations.unwrap_or_default(),
            script_phases: params.script_phases.unwrap_or_default(),
        };
        to_value(IOS, &config).map(Some)
    }
}
