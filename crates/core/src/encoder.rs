//! Feature encoding for the classifier.
//!
//! Column order and category codes must match what the model was trained
//! on; see [`marsh_types::FEATURE_NAMES`].

use marsh_types::{DiabetesType, FeatureVector, PatientInput, ShortStature, YesNo};

fn diabetes_code(value: DiabetesType) -> f64 {
    match value {
        DiabetesType::Type1 => 0.0,
        DiabetesType::Type2 => 1.0,
    }
}

// Variant is kept as its literal third code.
fn stature_code(value: ShortStature) -> f64 {
    match value {
        ShortStature::Dss => 0.0,
        ShortStature::Pss => 1.0,
        ShortStature::Variant => 2.0,
    }
}

fn flag_code(value: YesNo) -> f64 {
    match value {
        YesNo::Yes => 1.0,
        YesNo::No => 0.0,
    }
}

/// Encode a patient as `[diabetes, stature, sticky_stool, weight_loss, iga, igg]`.
pub fn encode(input: &PatientInput) -> FeatureVector {
    FeatureVector::new([
        diabetes_code(input.diabetes_type),
        stature_code(input.short_stature),
        flag_code(input.sticky_stool),
        flag_code(input.weight_loss),
        input.iga.value(),
        input.igg.value(),
    ])
}
