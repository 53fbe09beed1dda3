//! Package configuration document
//!
//! The same document shape is used by dependencies and by the root project.
//! Dependencies only contribute `dependency`, `platforms` and `commands`; the
//! remaining sections are read from the root project only.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "dependency": {
//!     "platforms": {
//!       "ios": { "configurations": ["debug"] },
//!       "android": null
//!     }
//!   }
//! }
//! ```
//!
//! TOML has no `null`, so `false` is accepted wherever a platform entry may
//! be disabled and is read as `null`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::{Command, PlatformDeclaration};
use crate::validation::{ConfigKind, validate};
use crate::{Error, Result};

/// Per-platform parameters. `None` means the platform was explicitly disabled.
pub type PlatformParams = BTreeMap<String, Option<Value>>;

/// Sections only read from the root project's config
pub const ROOT_ONLY_KEYS: &[&str] = &["project", "reactNativePath", "dependencies", "assets"];

/// A validated package configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageConfig {
    /// This package's contribution when it is consumed as a dependency
    #[serde(default)]
    pub dependency: DependencySection,

    /// Platforms this package makes available
    #[serde(default)]
    pub platforms: BTreeMap<String, PlatformDeclaration>,

    /// Commands this package contributes
    #[serde(default)]
    pub commands: Vec<Command>,

    /// Root only: per-platform project declarations; `Null` opts out
    #[serde(default)]
    pub project: BTreeMap<String, Value>,

    /// Root only: location of the framework package, relative to the root
    #[serde(default)]
    pub react_native_path: Option<String>,

    /// Root only: per-dependency overrides, keyed by package name
    #[serde(default)]
    pub dependencies: BTreeMap<String, UserDependencyConfig>,

    /// Root only: asset directories
    #[serde(default)]
    pub assets: Vec<String>,
}

/// The `dependency` section of a package config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencySection {
    #[serde(default)]
    pub platforms: PlatformParams,
}

/// A root-declared override for one dependency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDependencyConfig {
    /// Package location; relative paths resolve against the project root
    #[serde(default)]
    pub root: Option<String>,

    #[serde(default)]
    pub platforms: PlatformParams,
}

impl PackageConfig {
    /// Validate an untyped document and convert it into the strict model.
    ///
    /// Returns [`Error::Invalid`] with every validation error when the
    /// document does not match the expected shape.
    /// Root-only sections of a dependency document are discarded unread.
    pub fn from_value(mut raw: Value, kind: ConfigKind) -> Result<Self> {
        if kind == ConfigKind::Dependency
            && let Value::Object(map) = &mut raw
        {
            map.retain(|key, _| !ROOT_ONLY_KEYS.contains(&key.as_str()));
        }
        disabled_platforms_to_null(&mut raw);

        let report = validate(&raw, kind);
        if !report.is_valid() {
            return Err(Error::Invalid(report));
        }

        Ok(serde_json::from_value(raw)?)
    }
}

/// Rewrite `false` platform entries to `null` in every platform map.
fn disabled_platforms_to_null(raw: &mut Value) {
    fn rewrite(platforms: Option<&mut Value>) {
        if let Some(Value::Object(map)) = platforms {
            for value in map.values_mut() {
                if *value == Value::Bool(false) {
                    *value = Value::Null;
                }
            }
        }
    }

    rewrite(raw.pointer_mut("/dependency/platforms"));
    rewrite(raw.get_mut("project"));
    if let Some(Value::Object(dependencies)) = raw.get_mut("dependencies") {
        for dependency in dependencies.values_mut() {
            rewrite(dependency.get_mut("platforms"));
        }
    }
}
