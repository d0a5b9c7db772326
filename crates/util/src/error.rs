use thiserror::Error;

/// Errors produced by utilkit helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// A debounced wrapper needs a tokio runtime to schedule its timer.
    #[error("no tokio runtime available to schedule debounced calls")]
    NoRuntime,
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,
    /// The value could not be represented by the JSON value model.
    #[error("value cannot be cloned through the JSON value model: {0}")]
    Clone(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
