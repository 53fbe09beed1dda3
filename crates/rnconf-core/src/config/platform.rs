//! Platform set and per-dependency platform merging

use rnconf_fs::NormalizedPath;
use rnconf_platforms::{PlatformProvider, PlatformRegistry};
use rnconf_schema::{PlatformDeclaration, PlatformParams};
use serde_json::{Value, json};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::diagnostics::{Diagnostics, Warning, WarningKind};

/// The platforms known to one resolution run.
///
/// `declared` remembers every platform any package declared, so keys for
/// platforms filtered out by a selection are not reported as unknown.
#[derive(Clone, Default)]
pub struct KnownPlatforms {
    providers: BTreeMap<String, Arc<dyn PlatformProvider>>,
    declarations: BTreeMap<String, PlatformDeclaration>,
    declared: BTreeSet<String>,
}

impl KnownPlatforms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect platform declarations in order; the first declaration of a
    /// name wins. Declarations naming an unregistered implementation are
    /// dropped with a warning.
    pub fn collect<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a BTreeMap<String, PlatformDeclaration>)>,
        registry: &PlatformRegistry,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let mut known = Self::new();
        for (package, declarations) in sources {
            for (name, declaration) in declarations {
                if known.declared.contains(name) {
                    continue;
                }
                let Some(provider) = registry.get(&declaration.implementation) else {
                    diagnostics.warn(
                        Warning::new(
                            WarningKind::UnregisteredImplementation,
                            format!(
                                "Platform \"{name}\" uses implementation \"{}\" which is not registered",
                                declaration.implementation
                            ),
                        )
                        .with_package(package),
                    );
                    continue;
                };
                tracing::debug!(platform = %name, package, "Platform declared");
                known.insert(name.clone(), declaration.clone(), provider);
            }
        }
        known
    }

    pub fn insert(
        &mut self,
        name: String,
        declaration: PlatformDeclaration,
        provider: Arc<dyn PlatformProvider>,
    ) {
        self.declared.insert(name.clone());
        self.declarations.insert(name.clone(), declaration);
        self.providers.insert(name, provider);
    }

    /// Keep only the selected platform. Unknown selections keep nothing.
    pub fn select(self, selected: Option<&str>) -> Self {
        Self {
            providers: select_platform(self.providers, selected),
            declarations: select_platform(self.declarations, selected),
            declared: self.declared,
        }
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    pub fn providers(&self) -> impl Iterator<Item = (&String, &Arc<dyn PlatformProvider>)> {
        self.providers.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }

    pub fn declarations(&self) -> &BTreeMap<String, PlatformDeclaration> {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for KnownPlatforms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnownPlatforms")
            .field("platforms", &self.names())
            .finish()
    }
}

/// Keep only the `selected` key of a platform-keyed map.
pub fn select_platform<V>(map: BTreeMap<String, V>, selected: Option<&str>) -> BTreeMap<String, V> {
    match selected {
        None => map,
        Some(selected) => map.into_iter().filter(|(name, _)| name == selected).collect(),
    }
}

/// Warn about keys of a platform map that no package declares.
pub fn warn_unknown_platforms<'a>(
    keys: impl IntoIterator<Item = &'a String>,
    known: &KnownPlatforms,
    package: &str,
    diagnostics: &mut Diagnostics,
) {
    for key in keys {
        if !known.is_declared(key) {
            diagnostics.warn(
                Warning::new(
                    WarningKind::UnknownPlatform,
                    format!("Unknown platform \"{key}\" is ignored"),
                )
                .with_package(package),
            );
        }
    }
}

/// Merge a dependency's own platform section over the detected defaults.
///
/// Every known platform gets an entry: `null` when the package disables it,
/// when nothing was detected, or when the provider failed.
pub async fn merge_platforms(
    package: &str,
    package_root: &NormalizedPath,
    raw: &PlatformParams,
    known: &KnownPlatforms,
    diagnostics: &mut Diagnostics,
) -> BTreeMap<String, Option<Value>> {
    warn_unknown_platforms(raw.keys(), known, package, diagnostics);

    let mut merged = BTreeMap::new();
    for (name, provider) in known.providers() {
        let user = match raw.get(name) {
            Some(None) => {
                merged.insert(name.clone(), None);
                continue;
            }
            Some(Some(params)) => params.clone(),
            None => json!({}),
        };

        let config = match provider.dependency_config(package_root, &user).await {
            Ok(config) => config,
            Err(e) => {
                diagnostics.warn(
                    Warning::new(
                        WarningKind::ProviderFailed,
                        format!("Failed to read {name} config: {e}"),
                    )
                    .with_package(package)
                    .with_path(package_root.clone()),
                );
                None
            }
        };
        merged.insert(name.clone(), config);
    }
    merged
}
