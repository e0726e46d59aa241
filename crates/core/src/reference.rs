//! Static reference records for each Marsh category.

use crate::errors::{MarshError, Result};
use marsh_types::CategoryId;
use serde::Serialize;

/// Descriptive record shown for a predicted category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceRecord {
    pub id: CategoryId,
    /// Short category name
    pub label: &'static str,
    /// Category name with the Marsh grades it covers
    pub headline: &'static str,
    pub description: &'static str,
    pub likelihood: &'static str,
    pub severity: &'static str,
    pub clinical_indications: &'static str,
}

/// Records ordered by category id.
pub static REFERENCE_TABLE: [ReferenceRecord; 3] = [
    ReferenceRecord {
        id: CategoryId::new(0),
        label: "Normal",
        headline: "Normal Category(Marsh 0)",
        description: "Normal Mucosa: No visible damage to villi.",
        likelihood: "Unlikely: Symptoms may suggest other conditions.",
        severity: "None",
        clinical_indications:
            "No villous damage detected. Symptoms may suggest IBS or other conditions",
    },
    ReferenceRecord {
        id: CategoryId::new(1),
        label: "Mild",
        headline: "Mild Category(Marsh 1, Marsh 2)",
        description: "Increased immune activity or crypt hyperplasia with mild to moderate villous atrophy:",
        likelihood: "Possible: Indicates early-stage, latent, or moderate celiac disease. Other conditions like infections or intolerances could contribute.",
        severity: "Mild to Moderate",
        clinical_indications: "Mild or moderate damage to villi causing some nutrient absorption issues. Patient may experience mild fatigue, anemia, and digestive discomfort",
    },
    ReferenceRecord {
        id: CategoryId::new(2),
        label: "Severe",
        headline: "Severe Category(Marsh 3a, 3b, 3c)",
        description: "Severe villous atrophy or total villous atrophy: Complete loss of villi leading to nutrient malabsorption.",
        likelihood: "Very likely: Severe damage strongly indicative of advanced celiac disease.",
        severity: "Severe",
        clinical_indications: "Complete or near-complete damage to villi. Patient may experience severe malnutrition, chronic diarrhea, and weight loss.",
    },
];

/// Record for `id`; unknown ids are an invariant violation, never a default row.
pub fn lookup(id: CategoryId) -> Result<&'static ReferenceRecord> {
    REFERENCE_TABLE
        .get(id.index())
        .ok_or(MarshError::UnknownCategory(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_id() {
        for (i, record) in REFERENCE_TABLE.iter().enumerate() {
            assert_eq!(record.id.index(), i);
        }
    }

    #[test]
    fn labels_follow_marsh_buckets() {
        assert_eq!(lookup(CategoryId::new(0)).unwrap().label, "Normal");
        assert_eq!(lookup(CategoryId::new(1)).unwrap().label, "Mild");
        assert_eq!(lookup(CategoryId::new(2)).unwrap().label, "Severe");
    }

    #[test]
    fn unknown_ids_fail() {
        for id in [3, 4, 42, u32::MAX] {
            assert!(matches!(
                lookup(CategoryId::new(id)),
                Err(MarshError::UnknownCategory(found)) if found == CategoryId::new(id)
            ));
        }
    }

    #[test]
    fn every_text_field_is_populated() {
        for record in &REFERENCE_TABLE {
            for text in [
                record.label,
                record.headline,
                record.description,
                record.likelihood,
                record.severity,
                record.clinical_indications,
            ] {
                assert!(!text.trim().is_empty());
            }
        }
    }
}
