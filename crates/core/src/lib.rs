//! Marsh score prediction pipeline.
//!
//! Collected patient input is encoded into a fixed-order feature vector,
//! classified by an injected [`Classifier`], and enriched with the static
//! reference record for the predicted category.
//!
//! Modules:
//! - `encoder`: `PatientInput` → `FeatureVector`
//! - `reference`: static Marsh category records
//! - `presenter`: table and message rendering for a category
//! - `session`: one Idle → Predicting → Presenting cycle per submission
//! - `config`: TOML configuration
//! - `errors`: startup and invariant errors

pub mod config;
pub mod encoder;
pub mod errors;
pub mod presenter;
pub mod reference;
pub mod session;

pub use config::{DisplayConfig, MarshConfig, ModelConfig, SessionConfig};
pub use encoder::encode;
pub use errors::{MarshError, Result};
pub use presenter::{present, Presentation, Presenter, RenderedTable, TableRow};
pub use reference::{lookup, ReferenceRecord, REFERENCE_TABLE};
pub use session::{Outcome, Session, SessionState};

pub use marsh_classifier::{Classifier, GbdtClassifier, ModelError};
pub use marsh_types::{
    CategoryId, DiabetesType, FeatureVector, ImmunoglobulinLevel, PatientInput, ShortStature,
    YesNo,
};

use tracing::warn;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load the classifier artifact named by `config`.
///
/// Any failure here is fatal: no prediction can be served without a model.
pub fn load_classifier(config: &ModelConfig) -> Result<GbdtClassifier> {
    let fail = |source: ModelError| MarshError::ModelLoad {
        path: config.path.clone(),
        source,
    };

    let classifier = GbdtClassifier::load(&config.path).map_err(fail)?;

    match config.expected_hash.as_deref().map(str::trim) {
        Some(expected) if !expected.is_empty() => {
            classifier.verify_hash(expected).map_err(fail)?;
        }
        _ => warn!(
            hash = classifier.hash_hex(),
            "Model hash is not pinned; set model.expected_hash to verify the artifact"
        ),
    }

    Ok(classifier)
}
