use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Deep clone any serde type by round-tripping it through the JSON value model.
///
/// This is a value-based copy: the result is rebuilt from a
/// [`serde_json::Value`], never from the original's memory. Data the model
/// cannot represent is rejected with [`Error::Clone`](crate::Error::Clone):
///
/// - maps whose keys do not serialize to strings or integers fail while
///   serializing;
/// - non-finite floats (`NaN`, `inf`) serialize as `null` and fail when read
///   back into an `f64` field. Inside an `Option<f64>` they come back as `None`.
///
/// Prefer [`clone_value`](super::clone_value) when the data is already a
/// `Value`, and `Clone` when the type implements it; this function is for
/// types that only speak serde.
///
/// # Examples
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use utilkit::json_clone::deep_clone;
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Config {
///     name: String,
///     tags: Vec<String>,
/// }
///
/// let original = Config { name: "a".into(), tags: vec!["x".into()] };
/// let copy = deep_clone(&original).unwrap();
/// assert_eq!(copy, original);
/// ```
pub fn deep_clone<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let intermediate = serde_json::to_value(value)?;
    Ok(serde_json::from_value(intermediate)?)
}
