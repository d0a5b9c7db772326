use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse JSON into `T`, returning `fallback` on any failure.
///
/// Both malformed input and well-formed JSON that does not fit `T` produce
/// the fallback. The error is logged at `debug` and otherwise discarded.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use utilkit::json_parse::safe_json_parse;
///
/// let parsed: HashMap<String, i32> = safe_json_parse(r#"{"a":1}"#, HashMap::new());
/// assert_eq!(parsed["a"], 1);
///
/// assert_eq!(safe_json_parse("not json", 7), 7);
/// ```
pub fn safe_json_parse<T: DeserializeOwned>(input: &str, fallback: T) -> T {
    match serde_json::from_str(input) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!(error = %err, "json parse failed, using fallback");
            fallback
        }
    }
}

/// Untyped form of [`safe_json_parse`].
pub fn safe_json_parse_value(input: &str, fallback: Value) -> Value {
    safe_json_parse(input, fallback)
}
