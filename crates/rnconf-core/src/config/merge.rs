//! Field-level merge of platform entries

use serde_json::Value;

/// Deep merge two JSON values
///
/// If both values are objects, merge them recursively with `other` taking precedence.
/// Otherwise, `other` replaces `base`, so arrays and scalars are replaced
/// wholesale and an explicit `null` clears the field.
pub fn deep_merge_value(base: &mut Value, other: &Value) {
    match (base, other) {
        (Value::Object(base_map), Value::Object(other_map)) => {
            for (key, other_val) in other_map {
                if let Some(base_val) = base_map.get_mut(key) {
                    deep_merge_value(base_val, other_val);
                } else {
                    base_map.insert(key.clone(), other_val.clone());
                }
            }
        }
        (base, other) => {
            *base = other.clone();
        }
    }
}

/// Apply a root-declared override to one platform entry.
///
/// `None` as the override disables the platform. Overriding a platform
/// that had no contribution yields the override itself.
pub fn apply_override(base: Option<Value>, over: Option<&Value>) -> Option<Value> {
    let over = over?;
    match base {
        Some(mut base) => {
            deep_merge_value(&mut base, over);
            Some(base)
        }
        None => Some(over.clone()),
    }
}
