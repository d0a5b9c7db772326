//! Deep cloning utilities.
//!
//! [`clone_value`] copies a [`serde_json::Value`] structurally. [`deep_clone`]
//! clones any serde type by passing it through the same value model, which
//! fails explicitly on data the model cannot represent.

mod clone;
mod deep_clone;

pub use clone::clone_value;
pub use deep_clone::deep_clone;
