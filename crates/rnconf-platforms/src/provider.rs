//! PlatformProvider trait

use crate::Result;
use async_trait::async_trait;
use rnconf_fs::NormalizedPath;
use serde_json::Value;

/// Core trait for platform providers.
///
/// Both methods return `Ok(None)` when the platform has nothing to
/// contribute (no native project found). Returned objects are opaque to the
/// resolver beyond structural merging.
#[async_trait]
pub trait PlatformProvider: Send + Sync {
    /// Implementation id referenced by platform declarations (e.g. `ios`).
    fn id(&self) -> &str;

    /// Root project settings. `user` is the root project's declaration for
    /// this platform, or an empty object.
    async fn project_config(
        &self,
        project_root: &NormalizedPath,
        user: &Value,
    ) -> Result<Option<Value>>;

    /// Settings for one dependency. `user` holds the parameters the
    /// dependency declared for this platform, or an empty object; declared
    /// fields override the detected defaults one by one.
    async fn dependency_config(
        &self,
        package_root: &NormalizedPath,
        user: &Value,
    ) -> Result<Option<Value>>;
}
