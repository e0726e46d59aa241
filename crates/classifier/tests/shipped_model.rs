//! Checks the model artifact shipped in `models/` against known inputs.

use marsh_classifier::{Classifier, GbdtClassifier, ModelError};
use marsh_types::{CategoryId, FeatureVector};
use std::path::PathBuf;

fn shipped_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../models/marsh_gbdt.json")
}

#[test]
fn shipped_model_loads_and_validates() {
    let classifier = GbdtClassifier::load(shipped_model_path()).unwrap();
    assert_eq!(classifier.model().num_class, 3);
    assert_eq!(classifier.model().num_features, Some(6));
    assert_eq!(classifier.hash_hex().len(), 64);
}

#[test]
fn shipped_model_covers_all_categories() {
    let classifier = GbdtClassifier::load(shipped_model_path()).unwrap();

    let normal = FeatureVector::new([0.0, 0.0, 0.0, 0.0, 2.0, 1.0]);
    let mild = FeatureVector::new([1.0, 2.0, 1.0, 1.0, 12.5, 3.4]);
    let severe = FeatureVector::new([1.0, 1.0, 1.0, 1.0, 40.0, 30.0]);

    assert_eq!(classifier.predict(&normal).unwrap(), CategoryId::new(0));
    assert_eq!(classifier.predict(&mild).unwrap(), CategoryId::new(1));
    assert_eq!(classifier.predict(&severe).unwrap(), CategoryId::new(2));
}

#[test]
fn prediction_is_deterministic() {
    let classifier = GbdtClassifier::load(shipped_model_path()).unwrap();
    let features = FeatureVector::new([0.0, 1.0, 1.0, 0.0, 7.3, 18.2]);

    let first = classifier.predict(&features).unwrap();
    for _ in 0..100 {
        assert_eq!(classifier.predict(&features).unwrap(), first);
    }
}

#[test]
fn hash_is_independent_of_file_formatting() {
    let pretty = GbdtClassifier::load(shipped_model_path()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let compact_path = dir.path().join("compact.json");
    pretty.model().save_json(&compact_path).unwrap();
    let compact = GbdtClassifier::load(&compact_path).unwrap();

    assert_eq!(pretty.hash_hex(), compact.hash_hex());
}

#[test]
fn corrupt_artifact_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.json");
    std::fs::write(&path, b"{\"version\": 1, \"trees\": [").unwrap();

    assert!(matches!(
        GbdtClassifier::load(&path),
        Err(ModelError::JsonError(_))
    ));
}
