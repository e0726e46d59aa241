use thiserror::Error;

/// Errors raised while collecting patient input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("unknown diabetes type `{0}` (expected `Type 1` or `Type 2`)")]
    UnknownDiabetesType(String),

    #[error("unknown short stature variant `{0}` (expected DSS, PSS or Variant)")]
    UnknownShortStature(String),

    #[error("expected yes or no, got `{0}`")]
    NotYesNo(String),

    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("immunoglobulin level {value} is outside [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
}
