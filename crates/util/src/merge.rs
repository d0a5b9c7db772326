//! Recursive merging of JSON mappings.
//!
//! The source always wins. When the source holds a mapping at a key, the
//! target's value there is merged recursively. A missing or falsy target
//! value (`null`, `false`, `0`, `""`) is first replaced by an empty mapping;
//! any other non-mapping target value is left as it is. Every other source
//! value, arrays included, replaces the target's value wholesale.

use std::ops::Deref;

use serde_json::{Map, Value};

/// The result of [`deep_merge`].
///
/// Both variants deref to the merged [`Value`].
#[derive(Debug)]
pub enum Merged<'t, 's> {
    /// Both inputs were mappings; the target was mutated and is handed back.
    Target(&'t mut Value),
    /// At least one input was not a mapping; the target was left untouched
    /// and the result is the source.
    Source(&'s Value),
}

impl Merged<'_, '_> {
    /// Whether the merge happened in place on the target.
    pub fn is_target(&self) -> bool {
        matches!(self, Merged::Target(_))
    }
}

impl Deref for Merged<'_, '_> {
    type Target = Value;

    fn deref(&self) -> &Value {
        match self {
            Merged::Target(value) => value,
            Merged::Source(value) => value,
        }
    }
}

/// Deep merge `source` into `target`, mutating `target` in place.
///
/// If both values are objects, `target` is updated and returned as
/// [`Merged::Target`], so the result aliases the receiver. Otherwise no merge
/// is attempted: `target` is untouched and [`Merged::Source`] is returned.
///
/// Replaced values are cloned out of `source`. Use [`deep_merge_owned`] to
/// move them instead, or [`merged`] to leave `target` untouched.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::merge::deep_merge;
///
/// let mut target = json!({"foo": {"a": 1}, "x": 1});
/// let source = json!({"foo": {"b": 2}, "y": 2});
///
/// let result = deep_merge(&mut target, &source);
/// assert!(result.is_target());
/// assert_eq!(*result, json!({"foo": {"a": 1, "b": 2}, "x": 1, "y": 2}));
/// ```
pub fn deep_merge<'t, 's>(target: &'t mut Value, source: &'s Value) -> Merged<'t, 's> {
    if let (Value::Object(target_map), Value::Object(source_map)) = (&mut *target, source) {
        deep_merge_map(target_map, source_map);
    } else {
        return Merged::Source(source);
    }
    Merged::Target(target)
}

/// Deep merge two mappings in place, returning the (aliased) target.
pub fn deep_merge_map<'t>(
    target: &'t mut Map<String, Value>,
    source: &Map<String, Value>,
) -> &'t mut Map<String, Value> {
    for (key, source_value) in source {
        match source_value {
            Value::Object(nested) => {
                let slot = target.entry(key.clone()).or_insert(Value::Null);
                if is_falsy(slot) {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(inner) = slot {
                    deep_merge_map(inner, nested);
                }
            }
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
    target
}

/// Deep merge by value, moving replaced values out of `source`.
///
/// Returns the merged target when both inputs are objects and `source`
/// otherwise.
///
/// ```
/// use serde_json::json;
/// use utilkit::merge::deep_merge_owned;
///
/// let merged = deep_merge_owned(json!({"a": [1, 2]}), json!({"a": [3]}));
/// assert_eq!(merged, json!({"a": [3]}));
///
/// assert_eq!(deep_merge_owned(json!({"a": 1}), json!(5)), json!(5));
/// ```
pub fn deep_merge_owned(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            merge_map_owned(&mut target_map, source_map);
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Non-mutating deep merge: returns a new value and leaves both inputs alone.
pub fn merged(target: &Value, source: &Value) -> Value {
    let mut result = target.clone();
    let outcome = deep_merge(&mut result, source);
    if outcome.is_target() {
        result
    } else {
        source.clone()
    }
}

fn merge_map_owned(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, source_value) in source {
        match source_value {
            Value::Object(nested) => {
                let slot = target.entry(key).or_insert(Value::Null);
                if is_falsy(slot) {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(inner) = slot {
                    merge_map_owned(inner, nested);
                }
            }
            other => {
                target.insert(key, other);
            }
        }
    }
}

/// JSON falsiness: `null`, `false`, zero and the empty string.
///
/// Arrays and mappings are truthy even when empty.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
