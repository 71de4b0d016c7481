//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads artifacts + reference data (once per process)
//! - runs the scoring pipeline
//! - prints reports/plots
//! - writes optional exports

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::artifacts::write_json_artifact;
use crate::cli::{Command, GenArgs, PlotArgs, ScoreArgs};
use crate::data::{SampleConfig, demo_artifacts, generate_reference};
use crate::domain::FeatureRecord;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `cscore` binary.
pub fn run() -> Result<(), AppError> {
    // A `.env` may carry artifact/data locations; its absence is fine.
    dotenvy::dotenv().ok();

    let cli = crate::cli::Cli::parse();
    match cli.command {
        Command::Score(args) => handle_score(args),
        Command::Gen(args) => handle_gen(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_score(args: ScoreArgs) -> Result<(), AppError> {
    let record = record_from_args(&args)?;
    let paths = resolve_paths(&args);

    let loaded = pipeline::load_context(&paths)?;
    if let Some(warning) = crate::report::format_row_errors(&loaded.row_errors) {
        eprintln!("{warning}");
    }

    let output = pipeline::run_score(&loaded.context, &record)?;

    println!("{}", crate::report::format_prediction(&output.prediction));
    println!(
        "{}",
        crate::report::format_cohort(output.cohort_key.as_ref(), &output.summary)
    );

    if args.plot && !args.no_plot && !output.summary.is_empty() {
        println!(
            "{}",
            crate::plot::render_distribution(
                &output.summary,
                output.prediction.probability_of_default,
                args.width,
                args.height,
            )
        );
    }

    if let Some(path) = &args.export {
        let report = crate::io::build_report(
            &output.prediction,
            output.cohort_key.as_ref(),
            &output.summary,
        );
        crate::io::write_report_json(path, &report)?;
        println!("Report written to '{}'.", path.display());
    }

    Ok(())
}

fn handle_gen(args: GenArgs) -> Result<(), AppError> {
    let demo = demo_artifacts();
    let rows = generate_reference(&SampleConfig {
        count: args.count,
        seed: args.seed,
    })?;

    fs::create_dir_all(&args.out).map_err(|e| {
        AppError::invalid_input(format!(
            "Failed to create artifact directory '{}': {e}",
            args.out.display()
        ))
    })?;

    write_json_artifact(&args.out.join("imputer.json"), &demo.imputer, "imputer artifact")?;
    write_json_artifact(&args.out.join("scaler.json"), &demo.scaler, "scaler artifact")?;
    write_json_artifact(
        &args.out.join("classifier.json"),
        &demo.classifier,
        "classifier artifact",
    )?;
    write_reference_csv(&args.data, &rows)?;

    println!(
        "Wrote demo artifacts to '{}' and {} reference rows to '{}' (seed {}).",
        args.out.display(),
        rows.len(),
        args.data.display(),
        args.seed
    );
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let report = crate::io::read_report_json(&args.report)?;

    if report.cohort.is_empty() {
        println!("No comparison data found for your specific age and income group.");
        return Ok(());
    }
    println!(
        "{}",
        crate::plot::render_distribution(
            &report.cohort,
            report.prediction.probability_of_default,
            args.width,
            args.height,
        )
    );
    Ok(())
}

/// Build the inbound record, applying the caller-side bounds checks the core
/// contract expects (the core itself assumes a vetted record).
fn record_from_args(args: &ScoreArgs) -> Result<FeatureRecord, AppError> {
    if !(18.0..=110.0).contains(&args.age) {
        return Err(AppError::invalid_input(format!(
            "Age {} is outside the accepted range 18-110.",
            args.age
        )));
    }
    for (name, value) in [
        ("--monthly-income", args.monthly_income),
        ("--dependents", args.dependents),
        ("--open-credit-lines", args.open_credit_lines),
        ("--past-due-30-59", args.past_due_30_59),
        ("--past-due-60-89", args.past_due_60_89),
        ("--past-due-90", args.past_due_90),
        ("--real-estate-loans", args.real_estate_loans),
        ("--utilization", args.utilization),
        ("--debt-ratio", args.debt_ratio),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::invalid_input(format!(
                "{name} must be a non-negative number, got {value}."
            )));
        }
    }

    Ok(FeatureRecord {
        revolving_utilization: Some(args.utilization),
        age: Some(args.age),
        past_due_30_59: Some(args.past_due_30_59),
        debt_ratio: Some(args.debt_ratio),
        monthly_income: Some(args.monthly_income),
        open_credit_lines: Some(args.open_credit_lines),
        times_90_days_late: Some(args.past_due_90),
        real_estate_loans: Some(args.real_estate_loans),
        past_due_60_89: Some(args.past_due_60_89),
        dependents: Some(args.dependents),
    })
}

/// Resolve artifact/data locations: explicit flags win, then environment
/// variables, then the conventional defaults.
fn resolve_paths(args: &ScoreArgs) -> pipeline::ArtifactPaths {
    let dir = args
        .artifacts
        .clone()
        .or_else(|| std::env::var_os("CREDIT_SCORE_ARTIFACTS").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("artifacts"));
    let reference = args
        .data
        .clone()
        .or_else(|| std::env::var_os("CREDIT_SCORE_DATA").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("reference.csv"));
    pipeline::ArtifactPaths::in_dir(&dir, reference)
}

/// Write the generated reference rows as a CSV the ingest layer accepts.
fn write_reference_csv(path: &std::path::Path, rows: &[crate::domain::RawReferenceRow]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        AppError::invalid_input(format!(
            "Failed to create reference CSV '{}': {e}",
            path.display()
        ))
    })?;

    writer
        .write_record(["age", "MonthlyIncome", "NumberOfDependents", "Probability"])
        .map_err(|e| AppError::invalid_input(format!("Failed to write CSV header: {e}")))?;

    for row in rows {
        let income = row
            .monthly_income
            .map(|v| format!("{v}"))
            .unwrap_or_default();
        let dependents = row.dependents.map(|v| format!("{v}")).unwrap_or_default();
        writer
            .write_record([
                format!("{}", row.age),
                income,
                dependents,
                format!("{}", row.probability),
            ])
            .map_err(|e| AppError::invalid_input(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::invalid_input(format!("Failed to flush CSV: {e}")))?;
    Ok(())
}
