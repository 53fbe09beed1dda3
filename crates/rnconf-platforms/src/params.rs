//! Typed platform parameters

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, Result};

/// Convert declared platform parameters into a provider's typed param struct.
///
/// `null` is treated like an empty object; callers handle explicit opt-outs
/// before reaching a provider.
pub fn parse_params<T: DeserializeOwned + Default>(platform: &str, user: &Value) -> Result<T> {
    if user.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(user.clone()).map_err(|e| Error::InvalidParams {
        platform: platform.to_string(),
        message: e.to_string(),
    })
}

/// Serialize a provider's merged config into the opaque value the resolver stores.
pub fn to_value<T: serde::Serialize>(platform: &str, config: &T) -> Result<Value> {
    serde_json::to_value(config).map_err(|e| Error::InvalidParams {
        platform: platform.to_string(),
        message: e.to_string(),
    })
}
