//! Command-line parsing for the credit score predictor.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the scoring/statistics code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "cscore", version, about = "Credit Score & Risk Predictor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a record and compare it against the peer cohort.
    Score(ScoreArgs),
    /// Generate demonstration artifacts and a synthetic reference dataset.
    Gen(GenArgs),
    /// Re-render the cohort histogram from an exported report JSON.
    Plot(PlotArgs),
}

/// Options for a scoring run.
///
/// Feature defaults mirror the interactive form this tool grew out of.
#[derive(Debug, Parser, Clone)]
pub struct ScoreArgs {
    /// Directory containing imputer.json, scaler.json, classifier.json
    /// (falls back to $CREDIT_SCORE_ARTIFACTS, then `artifacts`).
    #[arg(long)]
    pub artifacts: Option<PathBuf>,

    /// Reference dataset CSV for the cohort comparison
    /// (falls back to $CREDIT_SCORE_DATA, then `reference.csv`).
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Age (years).
    #[arg(long, default_value_t = 45.0)]
    pub age: f64,

    /// Monthly income ($).
    #[arg(long, default_value_t = 6000.0)]
    pub monthly_income: f64,

    /// Number of dependents.
    #[arg(long, default_value_t = 2.0)]
    pub dependents: f64,

    /// Open credit lines and loans.
    #[arg(long, default_value_t = 13.0)]
    pub open_credit_lines: f64,

    /// Times 30-59 days past due.
    #[arg(long = "past-due-30-59", default_value_t = 2.0)]
    pub past_due_30_59: f64,

    /// Times 60-89 days past due.
    #[arg(long = "past-due-60-89", default_value_t = 0.0)]
    pub past_due_60_89: f64,

    /// Times 90+ days late.
    #[arg(long = "past-due-90", default_value_t = 0.0)]
    pub past_due_90: f64,

    /// Real estate loans or lines.
    #[arg(long, default_value_t = 6.0)]
    pub real_estate_loans: f64,

    /// Revolving utilization of unsecured lines (balance / credit limits).
    #[arg(long, default_value_t = 0.76)]
    pub utilization: f64,

    /// Debt ratio (monthly obligations / gross income).
    #[arg(long, default_value_t = 0.8)]
    pub debt_ratio: f64,

    /// Export the full report (prediction + cohort) to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Render the cohort distribution plot (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 16)]
    pub height: usize,
}

/// Options for demo artifact/dataset generation.
#[derive(Debug, Parser, Clone)]
pub struct GenArgs {
    /// Output directory for the three artifact JSON files.
    #[arg(long, default_value = "artifacts")]
    pub out: PathBuf,

    /// Output path for the synthetic reference CSV.
    #[arg(long, default_value = "reference.csv")]
    pub data: PathBuf,

    /// Number of reference rows to generate.
    #[arg(short = 'n', long, default_value_t = 2000)]
    pub count: usize,

    /// Random seed for reproducible generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Options for re-plotting an exported report.
#[derive(Debug, Parser, Clone)]
pub struct PlotArgs {
    /// Report JSON produced by `cscore score --export`.
    pub report: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 16)]
    pub height: usize,
}
