//! Patient attributes as collected from the operator.
//!
//! Every field type only admits values from its valid domain, so a built
//! [`PatientInput`] can always be encoded.

use crate::errors::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Diabetes type of the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiabetesType {
    Type1,
    Type2,
}

impl DiabetesType {
    pub const ALL: [DiabetesType; 2] = [DiabetesType::Type1, DiabetesType::Type2];

    pub fn as_str(self) -> &'static str {
        match self {
            DiabetesType::Type1 => "Type 1",
            DiabetesType::Type2 => "Type 2",
        }
    }
}

impl FromStr for DiabetesType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match compact.as_str() {
            "type1" | "t1" | "1" => Ok(DiabetesType::Type1),
            "type2" | "t2" | "2" => Ok(DiabetesType::Type2),
            _ => Err(InputError::UnknownDiabetesType(s.trim().to_string())),
        }
    }
}

impl fmt::Display for DiabetesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short stature variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortStature {
    Dss,
    Pss,
    Variant,
}

impl ShortStature {
    pub const ALL: [ShortStature; 3] =
        [ShortStature::Dss, ShortStature::Pss, ShortStature::Variant];

    pub fn as_str(self) -> &'static str {
        match self {
            ShortStature::Dss => "DSS",
            ShortStature::Pss => "PSS",
            ShortStature::Variant => "Variant",
        }
    }
}

impl FromStr for ShortStature {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dss" => Ok(ShortStature::Dss),
            "pss" => Ok(ShortStature::Pss),
            "variant" => Ok(ShortStature::Variant),
            _ => Err(InputError::UnknownShortStature(s.trim().to_string())),
        }
    }
}

impl fmt::Display for ShortStature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer to a yes/no question on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }

    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

impl FromStr for YesNo {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Ok(YesNo::Yes),
            "no" | "n" | "false" | "0" => Ok(YesNo::No),
            _ => Err(InputError::NotYesNo(s.trim().to_string())),
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immunoglobulin measurement in g/L, bounded to `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ImmunoglobulinLevel(f64);

impl ImmunoglobulinLevel {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 500.0;

    pub fn new(value: f64) -> Result<Self, InputError> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(InputError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for ImmunoglobulinLevel {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<f64> for ImmunoglobulinLevel {
    type Error = InputError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImmunoglobulinLevel> for f64 {
    fn from(level: ImmunoglobulinLevel) -> Self {
        level.0
    }
}

impl FromStr for ImmunoglobulinLevel {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| InputError::NotANumber(s.trim().to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for ImmunoglobulinLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The six attributes collected for one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    pub diabetes_type: DiabetesType,
    pub short_stature: ShortStature,
    pub sticky_stool: YesNo,
    pub weight_loss: YesNo,
    /// IgA level (g/L)
    pub iga: ImmunoglobulinLevel,
    /// IgG level (g/L)
    pub igg: ImmunoglobulinLevel,
}

impl PatientInput {
    pub fn new(
        diabetes_type: DiabetesType,
        short_stature: ShortStature,
        sticky_stool: YesNo,
        weight_loss: YesNo,
        iga: ImmunoglobulinLevel,
        igg: ImmunoglobulinLevel,
    ) -> Self {
        Self {
            diabetes_type,
            short_stature,
            sticky_stool,
            weight_loss,
            iga,
            igg,
        }
    }
}
