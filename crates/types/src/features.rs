//! Fixed-order numeric encoding of a patient.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Number of features every classifier is trained on.
pub const FEATURE_COUNT: usize = 6;

/// Column names in feature order, as used when the model was trained.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Diabetes Type",
    "Short_Stature",
    "Sticky_Stool",
    "Weight_loss",
    "IgA",
    "IgG",
];

/// `[diabetes, stature, sticky_stool, weight_loss, iga, igg]`
///
/// Categorical positions hold small integers stored as `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub const fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn to_array(self) -> [f64; FEATURE_COUNT] {
        self.0
    }

    /// Convert to fixed-point integers at `scale` (round half away from zero).
    ///
    /// Values beyond the `i64` range saturate; callers bound `scale` so that
    /// in-range levels never reach it.
    pub fn to_fixed(&self, scale: i64) -> Vec<i64> {
        self.0
            .iter()
            .map(|value| (value * scale as f64).round() as i64)
            .collect()
    }

    /// Pairs of (column name, value) in feature order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_conversion() {
        let v = FeatureVector::new([1.0, 2.0, 0.0, 1.0, 12.5, 3.4]);
        assert_eq!(
            v.to_fixed(1_000_000),
            vec![1_000_000, 2_000_000, 0, 1_000_000, 12_500_000, 3_400_000]
        );
    }

    #[test]
    fn named_pairs_follow_feature_order() {
        let v = FeatureVector::new([0.0, 1.0, 0.0, 0.0, 2.0, 1.0]);
        let names: Vec<_> = v.named().map(|(name, _)| name).collect();
        assert_eq!(names, FEATURE_NAMES.to_vec());
        assert_eq!(v[4], 2.0);
    }
}
