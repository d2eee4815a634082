use crate::provisioning::domain::ConfigMap;
use serde_json::Value;

/// Merges `overrides` on top of `base`, recursing into nested objects
///
/// For every key present in `overrides` the override wins. When both sides
/// hold an object under the same key the two objects are merged instead of
/// replaced, so defaults the caller did not mention survive. Arrays and
/// scalars are replaced wholesale. Keys present on only one side are kept.
pub fn deep_merge(base: &mut ConfigMap, overrides: &ConfigMap) {
    for (key, override_value) in overrides {
        match (base.get_mut(key), override_value) {
            (Some(Value::Object(base_map)), Value::Object(override_map)) => {
                deep_merge(base_map, override_map);
            }
            _ => {
                base.insert(key.clone(), override_value.clone());
            }
        }
    }
}

/// Returns `base` with `overrides` merged on top, leaving the inputs untouched
pub fn merged(base: &ConfigMap, overrides: &ConfigMap) -> ConfigMap {
    let mut result = base.clone();
    deep_merge(&mut result, overrides);
    result
}
