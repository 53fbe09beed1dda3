//! Provider registry for platform implementations
//!
//! Platform declarations in config files name an implementation id; the
//! registry maps those ids to the provider that implements them.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::{AndroidPlatform, IosPlatform, PlatformProvider};

/// Registry mapping implementation ids to providers.
///
/// # Example
///
/// ```
/// use rnconf_platforms::PlatformRegistry;
///
/// let registry = PlatformRegistry::with_builtins();
/// assert!(registry.has_provider("ios"));
/// assert!(registry.get("macos").is_none());
/// ```
#[derive(Clone, Default)]
pub struct PlatformRegistry {
    providers: BTreeMap<String, Arc<dyn PlatformProvider>>,
}

impl PlatformRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in `ios` and `android` providers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(IosPlatform::new()));
        registry.register(Arc::new(AndroidPlatform::new()));
        registry
    }

    /// Register a provider under its own id, replacing any previous one.
    pub fn register(&mut self, provider: Arc<dyn PlatformProvider>) {
        self.providers.insert(provider.id().to_string(), provider);
    }

    /// Get the provider for an implementation id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn PlatformProvider>> {
        self.providers.get(id).cloned()
    }

    /// Check if a provider is registered for an implementation id.
    pub fn has_provider(&self, id: &str) -> bool {
        self.providers.contains_key(id)
    }

    /// Registered implementation ids, sorted.
    pub fn list_ids(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for PlatformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformRegistry")
            .field("providers", &self.list_ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = PlatformRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_with_builtins() {
        let registry = PlatformRegistry::with_builtins();
        assert_eq!(registry.list_ids(), vec!["android", "ios"]);
        assert_eq!(registry.get("ios").unwrap().id(), "ios");
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = PlatformRegistry::with_builtins();
        registry.register(Arc::new(IosPlatform::new()));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_debug_lists_ids() {
        let registry = PlatformRegistry::with_builtins();
        assert_eq!(
            format!("{registry:?}"),
            "PlatformRegistry { providers: [\"android\", \"ios\"] }"
        );
    }
}
