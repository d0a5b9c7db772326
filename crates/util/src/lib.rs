//! utilkit - small generic helpers
//!
//! Array helpers (deduplicate, flatten, chunk), value helpers over
//! [`serde_json::Value`] (deep clone, deep merge, empty-object check, safe
//! parsing), identifiers and randomness, string capitalization, and the
//! timing primitives debounce, throttle and sleep.

pub mod array;
pub mod error;
pub mod is_empty;
pub mod json_clone;
pub mod json_parse;
pub mod merge;
pub mod random;
pub mod strings;
pub mod timing;
pub mod uuid_v4;

// Re-exports for convenience
pub use array::{chunk_array, flatten_array, remove_duplicates};
pub use error::{Error, Result};
pub use is_empty::{is_empty_object, EmptyObject};
pub use json_clone::{clone_value, deep_clone};
pub use json_parse::{safe_json_parse, safe_json_parse_value};
pub use merge::{deep_merge, deep_merge_map, deep_merge_owned, merged, Merged};
pub use random::{random_in_range, random_in_range_with};
pub use strings::capitalize;
pub use timing::{debounce, sleep, throttle, Clock, Debounce, ManualClock, Throttle, TimingOptions, TokioClock};
pub use uuid_v4::{generate_uuid, generate_uuid_with_source, UuidSource};
