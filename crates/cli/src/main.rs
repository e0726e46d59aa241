//! Marsh score predictor command-line interface
//!
//! Collects the six patient attributes either from flags (`predict`) or from
//! an interactive form (`form`), and prints the predicted Marsh category with
//! its clinical reference row.

mod form;
mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use marsh_core::config::DEFAULT_CONFIG_PATH;
use marsh_core::{
    load_classifier, DiabetesType, GbdtClassifier, ImmunoglobulinLevel, MarshConfig,
    PatientInput, Presenter, Session, ShortStature, YesNo,
};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "marsh")]
#[command(about = "Celiac disease Marsh score prediction for diabetic patients", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to config/marsh.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Classifier artifact, overriding model.path from the configuration
    #[arg(long, global = true, value_name = "PATH")]
    model: Option<PathBuf>,

    /// Show results immediately instead of after the configured pause
    #[arg(long, global = true)]
    no_delay: bool,

    /// Disable header styling
    #[arg(long, global = true)]
    plain: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict once from command-line values
    Predict(PredictArgs),
    /// Fill in the patient form interactively, one prediction per form
    Form,
    /// Print the Marsh category reference table
    Table,
    /// Print the BLAKE3 hash of the classifier artifact
    ModelHash,
}

#[derive(Args)]
struct PredictArgs {
    /// Diabetes type (`Type 1` or `Type 2`)
    #[arg(long, value_name = "TYPE")]
    diabetes: DiabetesType,
    /// Short stature variant (DSS, PSS or Variant)
    #[arg(long, value_name = "VARIANT")]
    stature: ShortStature,
    /// Sticky stool (yes/no)
    #[arg(long, value_name = "YES|NO")]
    sticky_stool: YesNo,
    /// Weight loss (yes/no)
    #[arg(long, value_name = "YES|NO")]
    weight_loss: YesNo,
    /// IgA level in g/L, between 0 and 500
    #[arg(long, value_name = "G/L")]
    iga: ImmunoglobulinLevel,
    /// IgG level in g/L, between 0 and 500
    #[arg(long, value_name = "G/L")]
    igg: ImmunoglobulinLevel,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl PredictArgs {
    fn patient(&self) -> PatientInput {
        PatientInput::new(
            self.diabetes,
            self.stature,
            self.sticky_stool,
            self.weight_loss,
            self.iga,
            self.igg,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

fn load_config(cli: &Cli) -> Result<MarshConfig> {
    let mut config = match &cli.config {
        Some(path) => MarshConfig::load(path)?,
        None => MarshConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    if let Some(model) = &cli.model {
        config.model.path = model.clone();
    }
    if cli.no_delay {
        config.session.predict_delay_ms = 0;
    }
    if cli.plain || !io::stdout().is_terminal() {
        config.display.styled = false;
    }

    debug!(?config, "Effective configuration");
    Ok(config)
}

fn build_session(config: &MarshConfig) -> Result<Session<GbdtClassifier>> {
    let classifier =
        load_classifier(&config.model).context("Cannot start without a classifier")?;
    let presenter = Presenter::new(config.display.styled);
    Ok(Session::new(classifier, presenter).with_delay(config.session.predict_delay()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    info!("Marsh predictor v{}", marsh_core::VERSION);
    let config = load_config(&cli)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Predict(args) => {
            let mut session = build_session(&config)?;
            if args.format == OutputFormat::Text {
                render::banner(&mut out)?;
                render::waiting(&mut out)?;
            }
            let outcome = session.submit(&args.patient())?;
            render::outcome(&mut out, &outcome, args.format)?;
        }
        Commands::Form => {
            let mut session = build_session(&config)?;
            let stdin = io::stdin();
            form::run(&mut session, &mut stdin.lock(), &mut out)?;
        }
        Commands::Table => {
            let presenter = Presenter::new(config.display.styled);
            render::reference_table(&mut out, &presenter)?;
        }
        Commands::ModelHash => {
            let classifier = load_classifier(&config.model)?;
            render::model_hash(&mut out, &config.model.path, &classifier)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use std::io::Write;

    fn predict_args(iga: &'static str) -> Vec<&'static str> {
        vec![
            "marsh",
            "predict",
            "--diabetes",
            "Type 1",
            "--stature",
            "DSS",
            "--sticky-stool",
            "no",
            "--weight-loss",
            "no",
            "--iga",
            iga,
            "--igg",
            "1.0",
        ]
    }

    fn config_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[model]\npath = \"models/other.json\"\n").unwrap();
        writeln!(file, "[session]\npredict_delay_ms = 500\n").unwrap();
        writeln!(file, "[display]\nstyled = true").unwrap();
        file
    }

    #[test]
    fn predict_flags_build_patient() {
        let cli = Cli::try_parse_from(predict_args("2.0")).unwrap();
        let Commands::Predict(args) = &cli.command else {
            panic!("expected the predict subcommand");
        };

        let expected = PatientInput::new(
            DiabetesType::Type1,
            ShortStature::Dss,
            YesNo::No,
            YesNo::No,
            ImmunoglobulinLevel::new(2.0).unwrap(),
            ImmunoglobulinLevel::new(1.0).unwrap(),
        );
        assert_eq!(args.patient(), expected);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn out_of_range_level_is_a_usage_error() {
        let err = Cli::try_parse_from(predict_args("600"))
            .err()
            .expect("IgA of 600 must be rejected");

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("immunoglobulin level 600 is outside [0, 500]"));
    }

    #[test]
    fn config_file_values_apply_without_flags() {
        let file = config_file();
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["marsh", "--config", path, "table"]).unwrap();

        let config = load_config(&cli).unwrap();
        assert_eq!(config.model.path, PathBuf::from("models/other.json"));
        assert_eq!(config.session.predict_delay_ms, 500);
    }

    #[test]
    fn flags_override_config_file() {
        let file = config_file();
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "marsh",
            "--config",
            path,
            "--model",
            "x.json",
            "--no-delay",
            "--plain",
            "table",
        ])
        .unwrap();

        let config = load_config(&cli).unwrap();
        assert_eq!(config.model.path, PathBuf::from("x.json"));
        assert_eq!(config.session.predict_delay_ms, 0);
        assert!(!config.display.styled);
    }

    #[test]
    fn explicit_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let cli =
            Cli::try_parse_from(["marsh", "--config", missing.to_str().unwrap(), "table"]).unwrap();

        assert!(load_config(&cli).is_err());
    }
}
