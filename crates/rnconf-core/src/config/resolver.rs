//! Configuration resolution entry point
//!
//! The `ConfigResolver` reads the root project, discovers its dependencies
//! and assembles the dependency, project and command sections into one
//! [`ResolvedConfig`].

use rnconf_fs::NormalizedPath;
use rnconf_platforms::PlatformRegistry;
use rnconf_schema::{Command, PackageManifest, PlatformDeclaration};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::commands::merge_commands;
use super::dependency::{
    DependencyConfig, NodeModulesLocator, PackageLocator, discover_packages, resolve_dependencies,
};
use super::loader::load_root_config;
use super::platform::KnownPlatforms;
use super::project::merge_project;
use crate::diagnostics::{Diagnostics, Warning, WarningKind};
use crate::{Error, Result};

const REACT_NATIVE: &str = "react-native";

/// The final resolved configuration after merging all sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub root: NormalizedPath,
    pub react_native_path: Option<NormalizedPath>,
    pub react_native_version: Option<String>,
    pub dependencies: BTreeMap<String, DependencyConfig>,
    pub commands: Vec<Command>,
    pub platforms: BTreeMap<String, PlatformDeclaration>,
    pub project: BTreeMap<String, Option<Value>>,
    pub assets: Vec<String>,

    /// Everything that went wrong without stopping resolution
    #[serde(skip)]
    pub warnings: Vec<crate::Warning>,
}

/// Options for [`load_config`]
#[derive(Debug, Clone)]
pub struct LoadConfigOptions {
    pub project_root: NormalizedPath,
    /// Restrict `platforms`, `project` and every dependency's platforms to
    /// this platform
    pub selected_platform: Option<String>,
}

/// Resolve the configuration of a project with the built-in platforms and
/// the `node_modules` locator.
pub async fn load_config(options: LoadConfigOptions) -> Result<ResolvedConfig> {
    ConfigResolver::new(options.project_root)
        .with_selected_platform(options.selected_platform)
        .resolve()
        .await
}

/// Resolves configuration by merging multiple sources
///
/// Sources, lowest precedence first:
/// 1. Defaults detected by the platform providers
/// 2. Each dependency's own config file
/// 3. The root project's config file
pub struct ConfigResolver {
    /// Project root directory containing `package.json`
    root: NormalizedPath,
    selected_platform: Option<String>,
    registry: PlatformRegistry,
    locator: Arc<dyn PackageLocator>,
}

impl ConfigResolver {
    /// Create a resolver for the given project root with the built-in
    /// providers and the `node_modules` locator.
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            selected_platform: None,
            registry: PlatformRegistry::with_builtins(),
            locator: Arc::new(NodeModulesLocator),
        }
    }

    pub fn with_selected_platform(mut self, platform: Option<String>) -> Self {
        self.selected_platform = platform;
        self
    }

    /// Replace the provider registry, e.g. to add out-of-tree platforms.
    pub fn with_registry(mut self, registry: PlatformRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_locator(mut self, locator: Arc<dyn PackageLocator>) -> Self {
        self.locator = locator;
        self
    }

    /// Get the project root path
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Resolve the configuration.
    ///
    /// Fails only when the root project itself cannot be read: the root is
    /// not a directory, its `package.json` is missing or unparseable, or its
    /// config file is unparseable or invalid. Everything else is collected
    /// as warnings on the result.
    pub async fn resolve(&self) -> Result<ResolvedConfig> {
        let root = &self.root;
        if !root.is_dir() {
            return Err(rnconf_fs::Error::NotADirectory {
                path: root.to_native(),
            }
            .into());
        }
        if !PackageManifest::exists_in(root) {
            return Err(Error::ManifestNotFound {
                path: root.to_native(),
            });
        }

        let mut diagnostics = Diagnostics::new();

        tracing::debug!(%root, "Loading root manifest");
        let manifest = PackageManifest::load(root)?;
        let root_config = load_root_config(root)?;

        let packages = discover_packages(
            root,
            &manifest,
            &root_config.dependencies,
            self.locator.as_ref(),
            &mut diagnostics,
        );
        tracing::debug!(count = packages.len(), "Dependencies loaded");

        let sources = std::iter::once(("<root>", &root_config.platforms)).chain(
            packages
                .iter()
                .map(|package| (package.name.as_str(), &package.config.platforms)),
        );
        let known = KnownPlatforms::collect(sources, &self.registry, &mut diagnostics)
            .select(self.selected_platform.as_deref());
        tracing::debug!(platforms = ?known.names(), "Platforms resolved");

        let dependencies =
            resolve_dependencies(&packages, &root_config.dependencies, &known, &mut diagnostics)
                .await;
        let project = merge_project(root, &root_config.project, &known, &mut diagnostics).await;

        let dependency_commands = packages
            .iter()
            .flat_map(|package| package.config.commands.iter().cloned())
            .collect();
        let commands = merge_commands(&root_config.commands, dependency_commands);

        let react_native_path = match &root_config.react_native_path {
            Some(path) => Some(root.resolve(path)),
            None => self.locator.locate(root, REACT_NATIVE),
        };
        if react_native_path.is_none() {
            diagnostics.warn(Warning::new(
                WarningKind::ReactNativeNotFound,
                format!("Unable to find the \"{REACT_NATIVE}\" package from {root}"),
            ));
        }
        let react_native_version = react_native_path
            .as_ref()
            .and_then(|path| PackageManifest::load(path).ok())
            .and_then(|manifest| manifest.version);

        Ok(ResolvedConfig {
            root: root.clone(),
            react_native_path,
            react_native_version,
            dependencies,
            commands,
            platforms: known.declarations().clone(),
            project,
            assets: root_config.assets,
            warnings: diagnostics.into_warnings(),
        })
    }
}
