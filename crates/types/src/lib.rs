//! Shared data model for the Marsh score predictor.
//!
//! - `patient`: the six collected attributes and their collection-time parsing
//! - `features`: the fixed-order numeric encoding consumed by classifiers
//! - `category`: the classifier's output class index

pub mod category;
pub mod errors;
pub mod features;
pub mod patient;

pub use category::CategoryId;
pub use errors::InputError;
pub use features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use patient::{DiabetesType, ImmunoglobulinLevel, PatientInput, ShortStature, YesNo};
