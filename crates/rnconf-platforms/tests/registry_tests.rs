//! Integration tests for registering out-of-tree platform providers.

use async_trait::async_trait;
use rnconf_fs::NormalizedPath;
use rnconf_platforms::{PlatformProvider, PlatformRegistry, Result};
use serde_json::{Value, json};
use std::sync::Arc;

struct WindowsPlatform;

#[async_trait]
impl PlatformProvider for WindowsPlatform {
    fn id(&self) -> &str {
        "windows"
    }

    async fn project_config(
        &self,
        project_root: &NormalizedPath,
        _user: &Value,
    ) -> Result<Option<Value>> {
        Ok(Some(json!({"sourceDir": project_root.join("windows").to_string()})))
    }

    async fn dependency_config(
        &self,
        _package_root: &NormalizedPath,
        user: &Value,
    ) -> Result<Option<Value>> {
        Ok(Some(user.clone()))
    }
}

#[test]
fn test_custom_provider_sits_beside_builtins() {
    let mut registry = PlatformRegistry::with_builtins();
    registry.register(Arc::new(WindowsPlatform));

    assert_eq!(registry.list_ids(), vec!["android", "ios", "windows"]);
    assert!(registry.has_provider("windows"));
}

#[tokio::test]
async fn test_registered_provider_is_callable_through_registry() {
    let mut registry = PlatformRegistry::new();
    registry.register(Arc::new(WindowsPlatform));

    let provider = registry.get("windows").unwrap();
    let config = provider
        .dependency_config(&NormalizedPath::new("/lib"), &json!({"solutionFile": "Lib.sln"}))
        .await
        .unwrap();

    assert_eq!(config, Some(json!({"solutionFile": "Lib.sln"})));
}
