//! Dependency discovery and merging
//!
//! Candidates come from the root `package.json` (`dependencies` then
//! `devDependencies`) followed by names only the root config declares.
//! Each candidate's platform entries are built from three layers, lowest
//! precedence first:
//!
//! 1. auto-detected defaults from the platform provider
//! 2. the package's own `dependency.platforms`
//! 3. the root config's `dependencies[name].platforms`
//!
//! Layers 1 and 2 are merged by the provider; layer 3 is a field-level
//! [`deep_merge_value`](super::merge::deep_merge_value).

use rnconf_fs::{NormalizedPath, ProjectFile};
use rnconf_schema::{PackageManifest, UserDependencyConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use super::loader::{LoadedPackage, load_package};
use super::merge::apply_override;
use super::platform::{KnownPlatforms, merge_platforms, warn_unknown_platforms};
use crate::diagnostics::{Diagnostics, Warning, WarningKind};

/// Finds where a package is installed.
pub trait PackageLocator: Send + Sync {
    fn locate(&self, project_root: &NormalizedPath, name: &str) -> Option<NormalizedPath>;
}

/// Looks for `node_modules/<name>` in the project root and every ancestor.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeModulesLocator;

impl PackageLocator for NodeModulesLocator {
    fn locate(&self, project_root: &NormalizedPath, name: &str) -> Option<NormalizedPath> {
        let mut dir = Some(project_root.clone());
        while let Some(current) = dir {
            let candidate = current.join(ProjectFile::NodeModules.as_str()).join(name);
            if candidate.is_dir() {
                return Some(candidate);
            }
            dir = current.parent();
        }
        None
    }
}

/// Final per-dependency config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyConfig {
    pub name: String,
    pub root: NormalizedPath,
    /// One entry per known platform; `None` means no contribution.
    pub platforms: BTreeMap<String, Option<Value>>,
}

/// Candidate names in discovery order, without duplicates.
pub fn candidate_names(
    manifest: &PackageManifest,
    user_dependencies: &BTreeMap<String, UserDependencyConfig>,
) -> Vec<String> {
    let mut seen = BTreeSet::new();
    manifest
        .dependency_names()
        .into_iter()
        .chain(user_dependencies.keys().cloned())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Locate and load every candidate dependency.
///
/// An explicit `root` from the root config wins over the locator; relative
/// roots resolve against the project root. Candidates that cannot be found
/// are skipped with a warning.
pub fn discover_packages(
    project_root: &NormalizedPath,
    manifest: &PackageManifest,
    user_dependencies: &BTreeMap<String, UserDependencyConfig>,
    locator: &dyn PackageLocator,
    diagnostics: &mut Diagnostics,
) -> Vec<LoadedPackage> {
    let mut packages = Vec::new();
    for name in candidate_names(manifest, user_dependencies) {
        let declared_root = user_dependencies
            .get(&name)
            .and_then(|user| user.root.as_deref())
            .map(|root| project_root.resolve(root));

        let Some(root) = declared_root.or_else(|| locator.locate(project_root, &name)) else {
            diagnostics.warn(
                Warning::new(
                    WarningKind::MissingDependency,
                    format!("Unable to find the installation directory of \"{name}\""),
                )
                .with_package(&name),
            );
            continue;
        };

        packages.push(load_package(&name, root, diagnostics));
    }
    packages
}

/// Build the final config of one dependency.
pub async fn resolve_dependency(
    package: &LoadedPackage,
    user: Option<&UserDependencyConfig>,
    known: &KnownPlatforms,
    diagnostics: &mut Diagnostics,
) -> DependencyConfig {
    let mut platforms = if package.is_platform_package() {
        known.names().into_iter().map(|name| (name, None)).collect()
    } else {
        merge_platforms(
            &package.name,
            &package.root,
            &package.config.dependency.platforms,
            known,
            diagnostics,
        )
        .await
    };

    if let Some(user) = user {
        warn_unknown_platforms(user.platforms.keys(), known, &package.name, diagnostics);
        for (name, entry) in platforms.iter_mut() {
            if let Some(over) = user.platforms.get(name) {
                *entry = apply_override(entry.take(), over.as_ref());
            }
        }
    }

    DependencyConfig {
        name: package.name.clone(),
        root: package.root.clone(),
        platforms,
    }
}

/// Resolve every loaded dependency, keyed by name.
pub async fn resolve_dependencies(
    packages: &[LoadedPackage],
    user_dependencies: &BTreeMap<String, UserDependencyConfig>,
    known: &KnownPlatforms,
    diagnostics: &mut Diagnostics,
) -> BTreeMap<String, DependencyConfig> {
    let mut resolved = BTreeMap::new();
    for package in packages {
        let config = resolve_dependency(
            package,
            user_dependencies.get(&package.name),
            known,
            diagnostics,
        )
        .await;
        resolved.insert(package.name.clone(), config);
    }
    resolved
}
