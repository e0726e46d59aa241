//! The classifier capability consumed by the session driver.

use crate::errors::{ModelError, Result};
use crate::gbdt::Model;
use marsh_types::{CategoryId, FeatureVector, FEATURE_COUNT};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// A pre-trained model that maps a feature vector to a class index.
///
/// Implementations are immutable once built and may be shared freely.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<CategoryId>;
}

impl<C: Classifier + ?Sized> Classifier for Arc<C> {
    fn predict(&self, features: &FeatureVector) -> Result<CategoryId> {
        (**self).predict(features)
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn predict(&self, features: &FeatureVector) -> Result<CategoryId> {
        (**self).predict(features)
    }
}

/// Classifier backed by a fixed-point GBDT artifact
#[derive(Debug, Clone)]
pub struct GbdtClassifier {
    model: Model,
    hash: String,
}

impl GbdtClassifier {
    /// Load, validate and hash the artifact at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let model = Model::load_json(path)?;
        let classifier = Self::from_model(model)?;
        info!(
            path = %path.display(),
            trees = classifier.model.num_trees(),
            classes = classifier.model.num_class,
            hash = %classifier.hash,
            "Loaded GBDT model"
        );
        Ok(classifier)
    }

    /// Wrap an in-memory model, checking it against the encoder's feature layout
    pub fn from_model(model: Model) -> Result<Self> {
        model.validate()?;

        if let Some(declared) = model.num_features {
            if declared as usize != FEATURE_COUNT {
                return Err(ModelError::FeatureCountMismatch {
                    expected: declared as usize,
                    found: FEATURE_COUNT,
                });
            }
        }
        if let Some(max_idx) = model.trees.iter().filter_map(|t| t.max_feature_idx()).max() {
            if max_idx >= FEATURE_COUNT {
                return Err(ModelError::FeatureCountMismatch {
                    expected: max_idx + 1,
                    found: FEATURE_COUNT,
                });
            }
        }

        let hash = model.hash_hex()?;
        Ok(Self { model, hash })
    }

    /// Fail unless the model hash equals `expected` (case-insensitive hex)
    pub fn verify_hash(&self, expected: &str) -> Result<()> {
        let expected = expected.trim();
        if !self.hash.eq_ignore_ascii_case(expected) {
            return Err(ModelError::HashMismatch {
                expected: expected.to_string(),
                actual: self.hash.clone(),
            });
        }
        Ok(())
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn hash_hex(&self) -> &str {
        &self.hash
    }
}

impl Classifier for GbdtClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<CategoryId> {
        let fixed = features.to_fixed(self.model.scale);
        let class = self.model.predict_class(&fixed);
        debug!(?fixed, class, "GBDT prediction");
        Ok(CategoryId::new(class))
    }
}
