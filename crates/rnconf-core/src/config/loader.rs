//! Package config loading
//!
//! A package's config file is a declarative document at the package root.
//! The first existing candidate from [`ProjectFile::CONFIG_CANDIDATES`] wins.
//! For dependencies every failure degrades to an empty contribution plus a
//! warning; for the root project it is fatal.

use rnconf_fs::{ConfigStore, NormalizedPath, ProjectFile};
use rnconf_schema::{ConfigKind, PackageConfig, PackageManifest};
use serde_json::Value;

use crate::diagnostics::{Diagnostics, Warning, WarningKind};
use crate::{Error, Result};

/// A dependency package after its files were read
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPackage {
    pub name: String,
    pub root: NormalizedPath,
    pub config: PackageConfig,
    pub manifest: PackageManifest,
}

impl LoadedPackage {
    /// Whether this package makes platforms available.
    ///
    /// Platform packages are never linked as dependencies themselves.
    pub fn is_platform_package(&self) -> bool {
        !self.config.platforms.is_empty()
    }
}

/// Path of the config file in `dir`, if there is one.
pub fn find_config_file(dir: &NormalizedPath) -> Option<NormalizedPath> {
    ProjectFile::CONFIG_CANDIDATES
        .iter()
        .map(|candidate| dir.join(candidate.as_str()))
        .find(|path| path.is_file())
}

/// Read the untyped config document of `dir`.
pub fn read_config_document(
    dir: &NormalizedPath,
) -> rnconf_fs::Result<Option<(NormalizedPath, Value)>> {
    let Some(path) = find_config_file(dir) else {
        return Ok(None);
    };
    tracing::debug!(%path, "Loading package config");
    let raw: Value = ConfigStore::new().load(&path)?;
    Ok(Some((path, raw)))
}

/// Load the root project's config. A missing file gives an empty config.
pub fn load_root_config(project_root: &NormalizedPath) -> Result<PackageConfig> {
    let Some((path, raw)) = read_config_document(project_root)? else {
        tracing::debug!(%project_root, "No root config found, using defaults");
        return Ok(PackageConfig::default());
    };

    PackageConfig::from_value(raw, ConfigKind::Project).map_err(|e| Error::InvalidRootConfig {
        path: path.to_native(),
        message: match e {
            rnconf_schema::Error::Invalid(report) => report.to_string(),
            other => other.to_string(),
        },
    })
}

fn load_dependency_config(
    name: &str,
    root: &NormalizedPath,
    diagnostics: &mut Diagnostics,
) -> PackageConfig {
    let (path, raw) = match read_config_document(root) {
        Ok(Some(document)) => document,
        Ok(None) => return PackageConfig::default(),
        Err(e) => {
            diagnostics.warn(
                Warning::new(
                    WarningKind::ConfigParse,
                    format!("Package {name} contains an unreadable configuration and contributes only detected defaults. Reason: {e}"),
                )
                .with_package(name),
            );
            return PackageConfig::default();
        }
    };

    match PackageConfig::from_value(raw, ConfigKind::Dependency) {
        Ok(config) => config,
        Err(e) => {
            let reason = match e {
                rnconf_schema::Error::Invalid(report) => report.to_string(),
                other => other.to_string(),
            };
            diagnostics.warn(
                Warning::new(
                    WarningKind::InvalidConfig,
                    format!("Package {name} contains invalid configuration and contributes only detected defaults. Reason: {reason}"),
                )
                .with_package(name)
                .with_path(path),
            );
            PackageConfig::default()
        }
    }
}

fn load_dependency_manifest(
    name: &str,
    root: &NormalizedPath,
    diagnostics: &mut Diagnostics,
) -> PackageManifest {
    if !PackageManifest::exists_in(root) {
        return PackageManifest::default();
    }
    PackageManifest::load(root).unwrap_or_else(|e| {
        diagnostics.warn(
            Warning::new(
                WarningKind::ManifestParse,
                format!("Could not read package.json: {e}"),
            )
            .with_package(name)
            .with_path(root.join(ProjectFile::PackageJson.as_str())),
        );
        PackageManifest::default()
    })
}

/// Load one dependency. Never fails; problems become warnings.
pub fn load_package(name: &str, root: NormalizedPath, diagnostics: &mut Diagnostics) -> LoadedPackage {
    tracing::debug!(package = name, %root, "Loading dependency");
    LoadedPackage {
        name: name.to_string(),
        config: load_dependency_config(name, &root, diagnostics),
        manifest: load_dependency_manifest(name, &root, diagnostics),
        root,
    }
}
