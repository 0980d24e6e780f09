//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("malformed version {input:?}")]
    MalformedVersion { input: String },

    #[error("Failed to serialize output value: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn malformed(input: &str) -> Self {
        Self::MalformedVersion {
            input: input.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
