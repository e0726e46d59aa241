//! Classifier adapter for the Marsh predictor.
//!
//! Modules:
//! - `adapter`: the single-method [`Classifier`] capability and the GBDT-backed implementation
//! - `gbdt`: integer-only gradient boosted tree ensemble
//! - `serde_canon`: canonical JSON and BLAKE3 hashing for model artifacts
//! - `errors`: model loading and validation errors

pub mod adapter;
pub mod errors;
pub mod gbdt;
pub mod serde_canon;

pub use adapter::{Classifier, GbdtClassifier};
pub use errors::{ModelError, Result};
pub use gbdt::{Model, Node, Tree, SCALE};
