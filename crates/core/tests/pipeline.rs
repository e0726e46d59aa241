//! End-to-end cycles against the shipped model artifact.

use marsh_core::{
    encode, load_classifier, CategoryId, DiabetesType, ImmunoglobulinLevel, MarshConfig,
    MarshError, ModelConfig, PatientInput, Presenter, Session, SessionState, ShortStature, YesNo,
    REFERENCE_TABLE,
};
use std::path::PathBuf;
use std::time::Duration;

fn shipped_model() -> ModelConfig {
    ModelConfig {
        path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../models/marsh_gbdt.json"),
        expected_hash: None,
    }
}

fn level(value: f64) -> ImmunoglobulinLevel {
    ImmunoglobulinLevel::new(value).unwrap()
}

fn baseline_patient() -> PatientInput {
    PatientInput::new(
        DiabetesType::Type1,
        ShortStature::Dss,
        YesNo::No,
        YesNo::No,
        level(2.0),
        level(1.0),
    )
}

#[test]
fn baseline_patient_end_to_end() {
    let classifier = load_classifier(&shipped_model()).unwrap();
    let mut session = Session::new(classifier, Presenter::new(false)).with_delay(Duration::ZERO);

    let input = baseline_patient();
    assert_eq!(encode(&input).to_array(), [0.0, 0.0, 0.0, 0.0, 2.0, 1.0]);

    let outcome = session.submit(&input).unwrap();
    let record = &REFERENCE_TABLE[outcome.category.index()];
    let row = &outcome.presentation.table.rows[0];

    assert_eq!(outcome.features.to_array(), [0.0, 0.0, 0.0, 0.0, 2.0, 1.0]);
    assert_eq!(row.cells[0], record.label);
    assert!(row.cells.iter().all(|cell| !cell.is_empty()));
    assert_eq!(session.state(), SessionState::Presenting);
}

#[test]
fn repeated_cycles_render_identically() {
    let classifier = load_classifier(&shipped_model()).unwrap();
    let mut session = Session::new(classifier, Presenter::new(true)).with_delay(Duration::ZERO);

    let input = PatientInput::new(
        DiabetesType::Type2,
        ShortStature::Variant,
        YesNo::Yes,
        YesNo::Yes,
        level(12.5),
        level(3.4),
    );
    let first = session.submit(&input).unwrap();
    let second = session.submit(&input).unwrap();

    assert_eq!(first.presentation.table, second.presentation.table);
    assert_eq!(
        first.presentation.to_string(),
        second.presentation.to_string()
    );
    assert_eq!(first.category, CategoryId::new(1));
}

#[test]
fn hash_pinning() {
    let unpinned = load_classifier(&shipped_model()).unwrap();

    let pinned = ModelConfig {
        expected_hash: Some(unpinned.hash_hex().to_string()),
        ..shipped_model()
    };
    assert!(load_classifier(&pinned).is_ok());

    let wrong = ModelConfig {
        expected_hash: Some("0".repeat(64)),
        ..shipped_model()
    };
    assert!(matches!(
        load_classifier(&wrong),
        Err(MarshError::ModelLoad { .. })
    ));
}

#[test]
fn missing_artifact_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = ModelConfig {
        path: dir.path().join("missing.json"),
        expected_hash: None,
    };
    let err = load_classifier(&config).unwrap_err();
    assert!(matches!(err, MarshError::ModelLoad { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn shipped_config_points_at_shipped_model() {
    let config_path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/marsh.toml");
    let config = MarshConfig::load(config_path).unwrap();
    assert_eq!(config.model, ModelConfig::default());
    assert_eq!(config.session.predict_delay(), Duration::from_secs(2));
}
