//! Android platform provider
//!
//! Both the root project and dependencies keep their native code in an
//! `android` directory unless `sourceDir` says otherwise. A dependency only
//! contributes when it has a `ReactPackage` to register.

pub mod finders;
pub mod manifest;

use async_trait::async_trait;
use rnconf_fs::{NormalizedPath, io};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::params::{parse_params, to_value};
use crate::provider::PlatformProvider;
use crate::Result;

const ANDROID: &str = "android";
const DEFAULT_SOURCE_DIR: &str = "android";
const DEFAULT_APP_NAME: &str = "app";

/// Parameters a dependency may declare for Android
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DependencyParams {
    source_dir: Option<String>,
    manifest_path: Option<String>,
    package_name: Option<String>,
    package_import_path: Option<String>,
    package_instance: Option<String>,
    dependency_configuration: Option<String>,
    build_types: Option<Vec<String>>,
    library_name: Option<String>,
    component_descriptors: Option<Vec<String>>,
    cmake_lists_path: Option<String>,
}

/// Merged Android settings for one dependency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidDependencyConfig {
    pub source_dir: NormalizedPath,
    pub package_import_path: String,
    pub package_instance: String,
    pub dependency_configuration: Option<String>,
    pub build_types: Vec<String>,
    pub library_name: Option<String>,
    pub component_descriptors: Option<Vec<String>>,
    pub cmake_lists_path: Option<NormalizedPath>,
}

/// Parameters the root project may declare for Android
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ProjectParams {
    source_dir: Option<String>,
    app_name: Option<String>,
    manifest_path: Option<String>,
    package_name: Option<String>,
    application_id: Option<String>,
    main_activity: Option<String>,
    dependency_configuration: Option<String>,
    watch_mode_command_params: Option<Vec<String>>,
    assets: Option<Vec<String>>,
}

/// Merged Android settings for the root project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidProjectConfig {
    pub source_dir: NormalizedPath,
    pub app_name: String,
    pub manifest_path: Option<NormalizedPath>,
    pub package_name: Option<String>,
    pub application_id: Option<String>,
    pub main_activity: Option<String>,
    pub dependency_configuration: Option<String>,
    pub watch_mode_command_params: Option<Vec<String>>,
    pub assets: Vec<String>,
}

/// Built-in Android provider
#[derive(Debug, Default, Clone, Copy)]
pub struct AndroidPlatform;

impl AndroidPlatform {
    pub fn new() -> Self {
        Self
    }
}

fn resolve_source_dir(root: &NormalizedPath, declared: Option<&str>) -> NormalizedPath {
    root.resolve(declared.unwrap_or(DEFAULT_SOURCE_DIR))
}

fn locate_manifest(source_dir: &NormalizedPath, declared: Option<&str>) -> Option<NormalizedPath> {
    match declared {
        Some(path) => Some(source_dir.resolve(path)),
        None => finders::find_manifest(source_dir),
    }
}

/// Package name from the manifest, falling back to the Gradle `namespace`.
fn detect_package_name(
    manifest_path: Option<&NormalizedPath>,
    gradle_dirs: &[NormalizedPath],
) -> Option<String> {
    manifest_path
        .and_then(|path| io::read_text(path).ok())
        .and_then(|text| manifest::manifest_package(&text))
        .or_else(|| {
            gradle_dirs
                .iter()
                .filter_map(finders::read_build_script)
                .find_map(|script| manifest::gradle_namespace(&script))
        })
}

#[async_trait]
impl PlatformProvider for AndroidPlatform {
    fn id(&self) -> &str {
        ANDROID
    }

    async fn project_config(
        &self,
        project_root: &NormalizedPath,
        user: &Value,
    ) -> Result<Option<Value>> {
        let params: ProjectParams = parse_params(ANDROID, user)?;

        let source_dir = resolve_source_dir(project_root, params.source_dir.as_deref());
        if params.source_dir.is_none() && !source_dir.is_dir() {
            return Ok(None);
        }

        let app_name = params.app_name.unwrap_or_else(|| {
            if source_dir.join(DEFAULT_APP_NAME).is_dir() {
                DEFAULT_APP_NAME.to_string()
            } else {
                String::new()
            }
        });
        let app_dir = source_dir.resolve(&app_name);
        let gradle_dirs = [app_dir.clone(), source_dir.clone()];

        let manifest_path = locate_manifest(&source_dir, params.manifest_path.as_deref());
        let manifest_text = manifest_path
            .as_ref()
            .and_then(|path| io::read_text(path).ok());

        let package_name = params
            .package_name
            .or_else(|| detect_package_name(manifest_path.as_ref(), &gradle_dirs));
        let application_id = params.application_id.or_else(|| {
            gradle_dirs
                .iter()
                .filter_map(finders::read_build_script)
                .find_map(|script| manifest::gradle_application_id(&script))
                .or_else(|| package_name.clone())
        });
        let main_activity = params
            .main_activity
            .or_else(|| manifest_text.as_deref().and_then(manifest::main_activity));

        let config = AndroidProjectConfig {
            source_dir,
            app_name,
            manifest_path,
            package_name,
            application_id,
            main_activity,
            dependency_configuration: params.dependency_configuration,
            watch_mode_command_params: params.watch_mode_command_params,
            assets: params.assets.unwrap_or_default(),
        };
        to_value(ANDROID, &config).map(Some)
    }

    async fn dependency_config(
        &self,
        package_root: &NormalizedPath,
        user: &Value,
    ) -> Result<Option<Value>> {
        let params: DependencyParams = parse_params(ANDROID, user)?;

        let source_dir = resolve_source_dir(package_root, params.source_dir.as_deref());
        if !source_dir.is_dir() {
            return Ok(None);
        }

        let package_class = finders::find_package_class(&source_dir);
        let Some(package_instance) = params.package_instance.or_else(|| {
            package_class
                .as_ref()
                .map(|class| format!("new {}()", class.name))
        }) else {
            tracing::debug!(%source_dir, "No ReactPackage implementation found");
            return Ok(None);
        };

        let package_import_path = match params.package_import_path {
            Some(path) => path,
            None => {
                let Some(class) = &package_class else {
                    return Ok(None);
                };
                let manifest_path = locate_manifest(&source_dir, params.manifest_path.as_deref());
                let package = params
                    .package_name
                    .or_else(|| {
                        detect_package_name(manifest_path.as_ref(), std::slice::from_ref(&source_dir))
                    })
                    .or_else(|| class.source_package.clone());
                match package {
                    Some(package) => format!("import {package}.{};", class.name),
                    None => format!("import {};", class.name),
                }
            }
        };

        let config = AndroidDependencyConfig {
            cmake_lists_path: params
                .cmake_lists_path
                .as_deref()
                .map(|path| source_dir.resolve(path)),
            source_dir,
            package_import_path,
            package_instance,
            dependency_configuration: params.dependency_configuration,
            build_types: params.build_types.unwrap_or_default(),
            library_name: params.library_name,
            component_descriptors: params.component_descriptors,
        };
        to_value(ANDROID, &config).map(Some)
    }
}
