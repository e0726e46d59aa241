//! Interactive patient form.
//!
//! Each field is prompted in turn with its valid choices; an empty answer
//! takes the field's default. A completed form runs one prediction cycle and
//! the form starts over. EOF or `q` at any prompt ends the session.

use crate::render;
use crate::OutputFormat;
use anyhow::Result;
use marsh_core::{
    Classifier, DiabetesType, ImmunoglobulinLevel, PatientInput, Session, ShortStature, YesNo,
};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

fn prompt<T, R, W>(
    input: &mut R,
    out: &mut W,
    label: &str,
    choices: &str,
    default: T,
) -> Result<Option<T>>
where
    T: FromStr + Display,
    T::Err: Display,
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{label} [{choices}] (default {default}): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }

        let answer = line.trim();
        if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        if answer.is_empty() {
            return Ok(Some(default));
        }

        match answer.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(err) => writeln!(out, "  {err}")?,
        }
    }
}

/// Collect one patient, or `None` if the operator quit
pub fn read_patient<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<PatientInput>> {
    writeln!(out, "Enter Patient Data")?;

    let Some(diabetes) =
        prompt(input, out, "Diabetes Type", "Type 1/Type 2", DiabetesType::Type1)?
    else {
        return Ok(None);
    };
    let Some(stature) =
        prompt(input, out, "Short Stature?", "DSS/PSS/Variant", ShortStature::Dss)?
    else {
        return Ok(None);
    };
    let Some(sticky) = prompt(input, out, "Sticky Stool?", "Yes/No", YesNo::Yes)? else {
        return Ok(None);
    };
    let Some(weight) = prompt(input, out, "Weight Loss?", "Yes/No", YesNo::Yes)? else {
        return Ok(None);
    };
    let Some(iga) = prompt(
        input,
        out,
        "Enter IgA Levels (g/L)",
        "0-500",
        ImmunoglobulinLevel::default(),
    )?
    else {
        return Ok(None);
    };
    let Some(igg) = prompt(
        input,
        out,
        "Enter IgG Levels (g/L)",
        "0-500",
        ImmunoglobulinLevel::default(),
    )?
    else {
        return Ok(None);
    };

    Ok(Some(PatientInput::new(diabetes, stature, sticky, weight, iga, igg)))
}

/// Run form → predict → present cycles until the operator quits
pub fn run<C, R, W>(session: &mut Session<C>, input: &mut R, out: &mut W) -> Result<usize>
where
    C: Classifier,
    R: BufRead,
    W: Write,
{
    render::banner(out)?;

    let mut completed = 0;
    while let Some(patient) = read_patient(input, out)? {
        debug!(?patient, "Form submitted");
        render::waiting(out)?;
        let outcome = session.submit(&patient)?;
        render::outcome(out, &outcome, OutputFormat::Text)?;
        writeln!(out)?;
        completed += 1;
    }

    session.acknowledge();
    Ok(completed)
}
