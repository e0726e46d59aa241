//! Multi-class GBDT ensemble with integer-only inference
//!
//! Each tree adds to the margin of one class. The predicted class is the
//! argmax of the per-class margins; with a single class the margin is read
//! as a binary logit and positive margins predict class 1.

use super::tree::Tree;
use crate::errors::{ModelError, Result};
use crate::serde_canon::{hash_canonical_hex, to_canonical_json};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default scale factor for fixed-point arithmetic (1e6)
pub const SCALE: i64 = 1_000_000;

/// Largest accepted scale; keeps fixed-point features (up to 500 g/L) well inside i64
pub const MAX_SCALE: i64 = 1_000_000_000;

/// Supported artifact format version
pub const FORMAT_VERSION: i32 = 1;

fn default_num_class() -> u32 {
    1
}

/// GBDT ensemble with all values as fixed-point integers at `scale`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Model {
    /// Model format version
    pub version: i32,

    /// Fixed-point scale factor for thresholds, leaves and weights
    pub scale: i64,

    /// Number of output classes
    #[serde(default = "default_num_class")]
    pub num_class: u32,

    /// Feature count the model was trained on, when the exporter recorded it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_features: Option<u32>,

    /// Decision trees in the ensemble
    pub trees: Vec<Tree>,

    /// Base margin added to every class
    pub bias: i64,

    /// Output scale of the margins
    pub post_scale: i64,
}

impl Model {
    /// Create a model with one tree group per class
    pub fn new(trees: Vec<Tree>, bias: i64, num_class: u32) -> Self {
        Self {
            version: FORMAT_VERSION,
            scale: SCALE,
            num_class,
            num_features: None,
            trees,
            bias,
            post_scale: SCALE,
        }
    }

    pub fn with_num_features(mut self, num_features: u32) -> Self {
        self.num_features = Some(num_features);
        self
    }

    /// Validate model structure
    pub fn validate(&self) -> Result<()> {
        if self.version != FORMAT_VERSION {
            return Err(ModelError::ValidationFailed(format!(
                "Unsupported model version: {}",
                self.version
            )));
        }

        if self.scale <= 0 || self.scale > MAX_SCALE {
            return Err(ModelError::ValidationFailed(format!(
                "Invalid scale: {}",
                self.scale
            )));
        }

        if self.post_scale <= 0 {
            return Err(ModelError::ValidationFailed(format!(
                "Invalid post_scale: {}",
                self.post_scale
            )));
        }

        if self.num_class == 0 {
            return Err(ModelError::ValidationFailed(
                "Model must declare at least one class".to_string(),
            ));
        }

        if self.trees.is_empty() {
            return Err(ModelError::ValidationFailed(
                "Model must have at least one tree".to_string(),
            ));
        }

        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate().map_err(|e| {
                ModelError::ValidationFailed(format!("Tree {} validation failed: {}", i, e))
            })?;

            if tree.class >= self.num_class {
                return Err(ModelError::ValidationFailed(format!(
                    "Tree {} targets class {} but the model has {} classes",
                    i, tree.class, self.num_class
                )));
            }

            if let (Some(declared), Some(max_idx)) = (self.num_features, tree.max_feature_idx()) {
                if max_idx >= declared as usize {
                    return Err(ModelError::ValidationFailed(format!(
                        "Tree {} splits on feature {} but the model declares {} features",
                        i, max_idx, declared
                    )));
                }
            }
        }

        Ok(())
    }

    /// Per-class margins for a fixed-point feature vector
    ///
    /// margin[c] = bias + Σ (leaf * weight / scale) over trees of class c
    pub fn class_scores(&self, features: &[i64]) -> Vec<i64> {
        let mut margins = vec![self.bias; self.num_class as usize];

        for tree in &self.trees {
            let Some(slot) = margins.get_mut(tree.class as usize) else {
                continue;
            };
            let weighted = tree.evaluate(features).checked_mul(tree.weight).unwrap_or(0);
            *slot = slot.saturating_add(weighted / self.scale);
        }

        margins
    }

    /// Predicted class index; ties resolve to the lowest index
    pub fn predict_class(&self, features: &[i64]) -> u32 {
        let margins = self.class_scores(features);

        if self.num_class == 1 {
            return u32::from(margins[0] > 0);
        }

        let mut best = 0usize;
        for (i, margin) in margins.iter().enumerate().skip(1) {
            if *margin > margins[best] {
                best = i;
            }
        }
        best as u32
    }

    /// Serialize model to canonical JSON (sorted keys, no whitespace)
    pub fn to_canonical_json(&self) -> Result<String> {
        Ok(to_canonical_json(self)?)
    }

    /// BLAKE3 hash of the canonical JSON as hex
    pub fn hash_hex(&self) -> Result<String> {
        Ok(hash_canonical_hex(self)?)
    }

    /// Save model to a file as canonical JSON
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_canonical_json()?;
        fs::write(path, json).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load and validate a model from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Model = serde_json::from_str(&json)?;
        model.validate()?;
        Ok(model)
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }
}
