//! Genovive - Infertility Risk Screening & Decision Support
//!
//! Command-line host for the screening engine. Educational use only.
//!
//! # Usage
//!
//! ```bash
//! # Score one patient from flags
//! genovive assess --age 34 --bmi 28 --amh 0.8 --fsh 11 --lh 6 --estradiol 25 \
//!     --gene ESR1 --notes "PCOS profile, irregular cycles"
//!
//! # Score from a file and write the plan + CSV tables
//! genovive assess --input patient.toml --export-dir out/
//!
//! # Score several patients in one session
//! genovive batch patients.toml
//!
//! # Start the notes from a canned template
//! genovive assess --note-template "PCOS profile" --notes "acanthosis"
//!
//! # Gene vocabulary, note templates and effective config
//! genovive genes
//! genovive templates
//! genovive config
//! ```
//!
//! # Environment Variables
//!
//! - `GENOVIVE_CONFIG`: Path to a config TOML (default: ./genovive.toml)
//! - `RUST_LOG`: Logging level (default: info)
//! - `GENOVIVE_LOG_JSON`: Set to "true" for JSON log lines

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use genovive::config::{self, GenoviveConfig};
use genovive::knowledge::{gene_insight, therapy_insight};
use genovive::notes::NOTE_TEMPLATES;
use genovive::scoring::RISK_GENES;
use genovive::{
    extract_flags, render_report, write_exports, AssessmentReport, Assessor, Gene, PatientBatch, PatientInput,
};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "genovive")]
#[command(about = "Genovive Infertility Risk Screening & Decision Support")]
#[command(version)]
struct CliArgs {
    /// Config file to use instead of the standard search order
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "GENOVIVE_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: SubCommand,
}

#[derive(Subcommand, Debug)]
enum SubCommand {
    /// Score one patient and print the plan
    Assess(AssessArgs),

    /// Score every patient in a file within one session
    Batch {
        /// TOML (`[[patients]]`) or JSON file
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the recognised genes with their insights
    Genes,

    /// List the canned clinical note templates
    Templates,

    /// Print the effective configuration as TOML
    Config {
        /// Also write it to this path
        #[arg(long, value_name = "FILE")]
        write: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct AssessArgs {
    /// Patient record (TOML, or JSON by extension). Replaces the field flags.
    #[arg(long, short, value_name = "FILE")]
    input: Option<PathBuf>,

    #[arg(long)]
    patient: Option<String>,

    /// Age in years
    #[arg(long, default_value_t = 30)]
    age: u32,

    #[arg(long, default_value_t = 22.0)]
    bmi: f64,

    /// Anti-Müllerian hormone (ng/mL)
    #[arg(long, default_value_t = 2.5)]
    amh: f64,

    /// FSH (IU/L)
    #[arg(long, default_value_t = 6.0)]
    fsh: f64,

    /// LH (IU/L)
    #[arg(long, default_value_t = 5.0)]
    lh: f64,

    /// Estradiol (pg/mL)
    #[arg(long, default_value_t = 50.0)]
    estradiol: f64,

    /// Gene symbol; repeat for several (e.g. --gene ESR1 --gene PGR)
    #[arg(long = "gene", value_name = "SYMBOL")]
    genes: Vec<String>,

    /// Start the notes from a canned template (see `genovive templates`)
    #[arg(long, value_name = "NAME")]
    note_template: Option<String>,

    /// Free-text clinical notes; appended to --note-template when both are given
    #[arg(long)]
    notes: Option<String>,

    /// First day of the last menstrual period (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    lmp: Option<NaiveDate>,

    /// Cycle length in days (used with --lmp)
    #[arg(long, value_name = "DAYS")]
    cycle_length: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the text plan and CSV tables to the configured export directory
    #[arg(long)]
    export: bool,

    /// Write the text plan and CSV tables into this directory (implies --export)
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,
}

impl AssessArgs {
    fn patient_input(&self) -> Result<PatientInput> {
        if let Some(path) = &self.input {
            return PatientInput::load(path)
                .with_context(|| format!("Failed to load patient from {}", path.display()));
        }
        Ok(PatientInput {
            patient_name: self.patient.clone(),
            age: self.age,
            bmi: self.bmi,
            amh: self.amh,
            fsh: self.fsh,
            lh: self.lh,
            estradiol: self.estradiol,
            genes: self.genes.clone(),
            note_template: self.note_template.clone(),
            notes: self.notes.clone(),
            cycle_length_days: self.cycle_length,
            last_menses: self.lmp,
        })
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

// ============================================================================
// Commands
// ============================================================================

fn run_assess(args: &AssessArgs) -> Result<()> {
    let cfg = config::get();
    let request = args
        .patient_input()?
        .validate(&cfg.input_limits)
        .context("Invalid patient input")?;

    let mut assessor = Assessor::new();
    let report = assessor.run(&request);

    print_report(&report, args.format)?;

    let export_dir = args
        .export_dir
        .clone()
        .or_else(|| args.export.then(|| cfg.export.directory.clone()));
    if let Some(dir) = export_dir {
        let paths = write_exports(&report, cfg, &dir).context("Failed to write exports")?;
        info!(
            plan = %paths.plan.display(),
            tests = %paths.tests.display(),
            medicines = %paths.medicines.display(),
            next_steps = %paths.next_steps.display(),
            "Plan exported"
        );
    }
    Ok(())
}

fn run_batch(file: &Path, format: OutputFormat) -> Result<()> {
    let cfg = config::get();
    let batch = PatientBatch::load(file)
        .with_context(|| format!("Failed to load batch from {}", file.display()))?;
    info!(patients = batch.patients.len(), "Batch loaded");

    let mut assessor = Assessor::new();
    let mut reports = Vec::with_capacity(batch.patients.len());
    for (i, patient) in batch.patients.iter().enumerate() {
        match patient.validate(&cfg.input_limits) {
            Ok(request) => reports.push(assessor.run(&request)),
            Err(e) => warn!(index = i, error = %e, "Skipping invalid patient"),
        }
    }

    match format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "reports": reports,
                "history": assessor.history_snapshot(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            for (i, report) in reports.iter().enumerate() {
                let name = report
                    .patient_name
                    .clone()
                    .unwrap_or_else(|| format!("#{}", i + 1));
                println!(
                    "{name}: {} ({:.1}, {}) confidence {:.2}",
                    report.assessment.label,
                    report.assessment.score,
                    report.band,
                    report.assessment.confidence
                );
            }
            println!();
            println!("--- Session History ---");
            for entry in assessor.history().iter() {
                println!("{}  {:.1}", entry.timestamp.to_rfc3339(), entry.score);
            }
        }
    }

    info!("{}", assessor.stats());
    Ok(())
}

fn run_genes() {
    for gene in Gene::ALL {
        let marker = if RISK_GENES.contains(&gene) { "*" } else { " " };
        println!("{marker} {:<10} {}", gene.symbol(), gene_insight(gene));
        if let Some(therapy) = therapy_insight(gene) {
            println!("  {:<10} research: {therapy}", "");
        }
    }
    println!();
    println!("* adds risk points when selected");
}

fn run_templates() {
    for (name, text) in NOTE_TEMPLATES {
        let flags = extract_flags(text).detected();
        let flags = flags
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{name}");
        println!("    {text}");
        println!("    flags: {}", if flags.is_empty() { "none" } else { flags.as_str() });
    }
}

fn run_config(write: Option<&Path>) -> Result<()> {
    let cfg = config::get();
    print!("{}", cfg.to_toml()?);
    if let Some(path) = write {
        cfg.save_to_file(path)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
    }
    Ok(())
}

fn print_report(report: &AssessmentReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let cfg = config::get();
            print!("{}", render_report(report, &cfg.clinic, &cfg.report));
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(report).context("Failed to serialize report")?
            );
        }
    }
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging on stderr; stdout carries the report
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    if args.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let app_config = match &args.config {
        Some(path) => GenoviveConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GenoviveConfig::load(),
    };
    config::init(app_config);

    match &args.command {
        SubCommand::Assess(assess) => run_assess(assess)?,
        SubCommand::Batch { file, format } => run_batch(file, *format)?,
        SubCommand::Genes => run_genes(),
        SubCommand::Templates => run_templates(),
        SubCommand::Config { write } => run_config(write.as_deref())?,
    }

    Ok(())
}
