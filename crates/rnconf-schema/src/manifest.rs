//! `package.json` manifest
//!
//! Only `name`, `version`, `dependencies` and `devDependencies` are read.
//! The `"react-native"` key is deliberately absent from this type: it is a
//! bundler entry point, not a configuration signal. Dependency maps keep the
//! order they are declared in, which fixes the order dependencies are visited.

use rnconf_fs::{ConfigStore, NormalizedPath, ProjectFile};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: Map<String, Value>,
    #[serde(default)]
    pub dev_dependencies: Map<String, Value>,
}

impl PackageManifest {
    /// Load `package.json` from a package directory.
    pub fn load(package_dir: &NormalizedPath) -> Result<Self> {
        let path = package_dir.join(ProjectFile::PackageJson.as_str());
        tracing::debug!(%path, "Loading package manifest");
        Ok(ConfigStore::new().load(&path)?)
    }

    /// Whether a `package.json` exists in the package directory.
    pub fn exists_in(package_dir: &NormalizedPath) -> bool {
        package_dir.join(ProjectFile::PackageJson.as_str()).is_file()
    }

    /// Names of `dependencies` followed by `devDependencies`, without duplicates.
    pub fn dependency_names(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .filter(|name| seen.insert(name.as_str()))
            .cloned()
            .collect()
    }
}
