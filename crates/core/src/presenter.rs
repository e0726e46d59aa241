//! Rendering of reference records.
//!
//! A prediction is shown as a success message naming the category followed
//! by a one-row table with a blank row label. Styling only affects the
//! header cells.

use crate::errors::Result;
use crate::reference::{lookup, ReferenceRecord, REFERENCE_TABLE};
use marsh_types::CategoryId;
use serde::Serialize;
use std::fmt;

pub const TITLE: &str = "Celiac Disease Prediction and Severity for Diabetic Patients";
pub const SUBTITLE: &str =
    "Input patient data to predict the likelihood and severity of Celiac Disease using a trained gradient boosted tree model.";
pub const DISCLAIMER: &str =
    "Note: This tool is not a replacement for medical advice. Please consult a healthcare professional.";

/// Column headers, in display order
pub const HEADERS: [&str; 5] = [
    "Category",
    "Description",
    "Likelihood of Celiac Disease",
    "Severity",
    "Clinical Indications",
];

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub label: String,
    pub cells: [&'static str; 5],
}

impl TableRow {
    fn from_record(label: impl Into<String>, record: &ReferenceRecord) -> Self {
        Self {
            label: label.into(),
            cells: [
                record.label,
                record.description,
                record.likelihood,
                record.severity,
                record.clinical_indications,
            ],
        }
    }
}

/// Table of reference rows under the fixed headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
    pub headers: [&'static str; 5],
    pub rows: Vec<TableRow>,
    #[serde(skip)]
    pub styled: bool,
}

impl RenderedTable {
    fn new(rows: Vec<TableRow>, styled: bool) -> Self {
        Self {
            headers: HEADERS,
            rows,
            styled,
        }
    }

    fn widths(&self) -> (usize, [usize; 5]) {
        let label_width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);
        let mut widths = self.headers.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        (label_width, widths)
    }
}

impl fmt::Display for RenderedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label_width, widths) = self.widths();

        write!(f, "| {:label_width$} |", "")?;
        for (header, width) in self.headers.iter().zip(widths) {
            if self.styled {
                write!(f, " {BOLD}{header:<width$}{RESET} |")?;
            } else {
                write!(f, " {header:<width$} |")?;
            }
        }
        writeln!(f)?;

        write!(f, "|{}|", "-".repeat(label_width + 2))?;
        for width in widths {
            write!(f, "{}|", "-".repeat(width + 2))?;
        }
        writeln!(f)?;

        for row in &self.rows {
            write!(f, "| {:label_width$} |", row.label)?;
            for (cell, width) in row.cells.iter().zip(widths) {
                write!(f, " {cell:<width$} |")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Everything shown for one prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub category: CategoryId,
    pub headline: &'static str,
    pub table: RenderedTable,
}

impl Presentation {
    pub fn success_message(&self) -> String {
        format!("Predicted Marsh Score Category: {}", self.headline)
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.success_message())?;
        writeln!(f)?;
        writeln!(f, "Clinical Insights")?;
        write!(f, "{}", self.table)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter {
    styled: bool,
}

impl Presenter {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    /// Success message and one-row table for `id`
    pub fn present(&self, id: CategoryId) -> Result<Presentation> {
        let record = lookup(id)?;
        Ok(Presentation {
            category: id,
            headline: record.headline,
            table: RenderedTable::new(vec![TableRow::from_record("", record)], self.styled),
        })
    }

    /// All categories, one row each, labelled by id
    pub fn reference_table(&self) -> RenderedTable {
        let rows = REFERENCE_TABLE
            .iter()
            .map(|record| TableRow::from_record(record.id.to_string(), record))
            .collect();
        RenderedTable::new(rows, self.styled)
    }
}

/// Unstyled one-row table for `id`
pub fn present(id: CategoryId) -> Result<RenderedTable> {
    Presenter::default().present(id).map(|p| p.table)
}
