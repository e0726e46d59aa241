//! Error types for model loading and inference

use crate::serde_canon::CanonicalError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, validating or evaluating a model
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Model validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Canonical serialization error: {0}")]
    CanonicalError(#[from] CanonicalError),

    #[error("Model expects {expected} features, encoder produces {found}")]
    FeatureCountMismatch { expected: usize, found: usize },

    #[error("Model hash mismatch: expected {expected}, computed {actual}")]
    HashMismatch { expected: String, actual: String },
}

/// Result type for classifier operations
pub type Result<T> = std::result::Result<T, ModelError>;
