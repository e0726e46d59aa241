//! Error types for the prediction pipeline

use marsh_classifier::ModelError;
use marsh_types::CategoryId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarshError {
    /// The classifier artifact is missing, corrupt or does not match its pinned hash
    #[error("Failed to load classifier from {path}: {source}")]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    /// The classifier produced a category with no reference record
    #[error("Classifier returned unknown category {0}; expected 0, 1 or 2")]
    UnknownCategory(CategoryId),

    #[error("Prediction failed: {0}")]
    Prediction(#[source] ModelError),

    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, MarshError>;
