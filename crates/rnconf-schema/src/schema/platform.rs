//! Platform declarations

use serde::{Deserialize, Serialize};

/// A platform made available by a package (usually the framework package
/// itself, or an out-of-tree platform such as a desktop target).
///
/// The platform's name is the key in the `platforms` map; `implementation`
/// names the registered provider that knows how to detect and merge its
/// project and dependency configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDeclaration {
    pub implementation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm_package_name: Option<String>,
}

impl PlatformDeclaration {
    pub fn new(implementation: impl Into<String>) -> Self {
        Self {
            implementation: implementation.into(),
            npm_package_name: None,
        }
    }
}
