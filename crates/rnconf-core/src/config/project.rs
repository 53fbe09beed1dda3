//! Root project config per platform

use rnconf_fs::NormalizedPath;
use serde_json::{Value, json};
use std::collections::BTreeMap;

use super::platform::{KnownPlatforms, warn_unknown_platforms};
use crate::diagnostics::{Diagnostics, Warning, WarningKind};

/// Path-valued fields resolved against the project root
const PATH_FIELDS: &[&str] = &["sourceDir", "manifestPath", "cmakeListsPath", "podfile"];

/// Resolve relative path fields of a project entry against `project_root`.
fn resolve_paths(project_root: &NormalizedPath, config: &mut Value) {
    let Value::Object(map) = config else {
        return;
    };
    for field in PATH_FIELDS {
        if let Some(Value::String(path)) = map.get_mut(*field) {
            *path = project_root.resolve(path).to_string();
        }
    }
}

/// Build the project section: one entry per known platform.
pub async fn merge_project(
    project_root: &NormalizedPath,
    raw_project: &BTreeMap<String, Value>,
    known: &KnownPlatforms,
    diagnostics: &mut Diagnostics,
) -> BTreeMap<String, Option<Value>> {
    warn_unknown_platforms(raw_project.keys(), known, "project", diagnostics);

    let mut project = BTreeMap::new();
    for (name, provider) in known.providers() {
        let user = match raw_project.get(name) {
            Some(Value::Null) => {
                project.insert(name.clone(), None);
                continue;
            }
            Some(user) => user.clone(),
            None => json!({}),
        };

        let config = match provider.project_config(project_root, &user).await {
            Ok(config) => config,
            Err(e) => {
                diagnostics.warn(
                    Warning::new(
                        WarningKind::ProviderFailed,
                        format!("Failed to read {name} project config: {e}"),
                    )
                    .with_path(project_root.clone()),
                );
                None
            }
        };

        project.insert(
            name.clone(),
            config.map(|mut config| {
                resolve_paths(project_root, &mut config);
                config
            }),
        );
    }
    project
}
