use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Types that can be asked whether they are an object without own keys.
pub trait EmptyObject {
    fn is_empty_object(&self) -> bool;
}

impl EmptyObject for Value {
    /// Only `{}` counts. `null`, scalars and arrays are not objects at all.
    fn is_empty_object(&self) -> bool {
        matches!(self, Value::Object(map) if map.is_empty())
    }
}

impl EmptyObject for Map<String, Value> {
    fn is_empty_object(&self) -> bool {
        self.is_empty()
    }
}

impl<V> EmptyObject for BTreeMap<String, V> {
    fn is_empty_object(&self) -> bool {
        self.is_empty()
    }
}

impl<V, S> EmptyObject for HashMap<String, V, S> {
    fn is_empty_object(&self) -> bool {
        self.is_empty()
    }
}

/// Check whether a value is an object with no keys.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::is_empty::is_empty_object;
///
/// assert!(is_empty_object(&json!({})));
/// assert!(!is_empty_object(&json!({"a": 1})));
/// assert!(!is_empty_object(&json!(null)));
/// ```
pub fn is_empty_object<T: EmptyObject + ?Sized>(value: &T) -> bool {
    value.is_empty_object()
}
