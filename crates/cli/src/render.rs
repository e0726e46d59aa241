//! Terminal output for the form surface.

use crate::OutputFormat;
use anyhow::Result;
use marsh_core::presenter::{DISCLAIMER, SUBTITLE, TITLE};
use marsh_core::{GbdtClassifier, Outcome, Presenter};
use std::io::Write;
use std::path::Path;

const RULE: &str = "────────────────────────────────────────────────────────────";

pub fn banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{SUBTITLE}")?;
    writeln!(out, "{RULE}")?;
    Ok(())
}

pub fn footer<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "{DISCLAIMER}")?;
    Ok(())
}

pub fn waiting<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Analyzing data and predicting...")?;
    out.flush()?;
    Ok(())
}

pub fn outcome<W: Write>(out: &mut W, outcome: &Outcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out)?;
            write!(out, "{}", outcome.presentation)?;
            footer(out)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, outcome)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn reference_table<W: Write>(out: &mut W, presenter: &Presenter) -> Result<()> {
    writeln!(out, "Marsh Score Categories")?;
    write!(out, "{}", presenter.reference_table())?;
    Ok(())
}

pub fn model_hash<W: Write>(out: &mut W, path: &Path, classifier: &GbdtClassifier) -> Result<()> {
    writeln!(out, "{}  {}", classifier.hash_hex(), path.display())?;
    Ok(())
}
