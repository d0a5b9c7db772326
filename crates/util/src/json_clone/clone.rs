use serde_json::{Map, Value};

/// Creates a structural deep copy of a JSON value.
///
/// Equivalent to `Value::clone`, spelled out as an explicit walk: every
/// nested array and object is rebuilt, so the copy shares nothing with the
/// original. Any `Value` is representable, so this cannot fail.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::json_clone::clone_value;
///
/// let original = json!({"a": 1, "b": {"c": 2}});
/// let mut copy = clone_value(&original);
/// copy["b"]["c"] = json!(3);
///
/// assert_eq!(original["b"]["c"], json!(2));
/// ```
pub fn clone_value(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(n.clone()),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(items) => Value::Array(items.iter().map(clone_value).collect()),
        Value::Object(entries) => {
            let mut copy = Map::with_capacity(entries.len());
            for (key, val) in entries {
                copy.insert(key.clone(), clone_value(val));
            }
            Value::Object(copy)
        }
    }
}
