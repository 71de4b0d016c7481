//! Reference CSV ingest and normalization.
//!
//! This module turns the historical comparison file into the typed rows the
//! cohort core consumes.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors, exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Deterministic behavior** (no hidden fallbacks)
//! - **Separation of concerns**: no binning or statistics logic here

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::cohort::{ReferenceDataset, build_reference};
use crate::domain::RawReferenceRow;
use crate::error::AppError;

/// Required columns, matching the comparison file's header names.
const COL_AGE: &str = "age";
const COL_INCOME: &str = "monthlyincome";
const COL_DEPENDENTS: &str = "numberofdependents";
const COL_PROBABILITY: &str = "probability";

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: the built dataset plus diagnostics about skipped rows.
#[derive(Debug, Clone)]
pub struct DatasetIngest {
    pub dataset: ReferenceDataset,
    pub rows_read: usize,
    pub rows_used: usize,
    pub row_errors: Vec<RowError>,
}

/// Load and build the reference dataset from a CSV file.
pub fn load_reference_csv(path: &Path) -> Result<DatasetIngest, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::artifact_missing(format!(
            "Failed to open reference CSV '{}': {e}",
            path.display()
        ))
    })?;
    read_reference(file)
}

/// Build the reference dataset from any CSV source (file, buffer, ...).
pub fn read_reference<R: std::io::Read>(source: R) -> Result<DatasetIngest, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| AppError::invalid_input(format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    for col in [COL_AGE, COL_INCOME, COL_DEPENDENTS, COL_PROBABILITY] {
        if !header_map.contains_key(col) {
            return Err(AppError::invalid_input(format!(
                "Missing required column: `{col}`"
            )));
        }
    }

    let mut raw = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because records() starts after the header row and CSV line
        // numbers are 1-based.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, &header_map) {
            Ok(row) => raw.push(row),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    if raw.is_empty() {
        return Err(AppError::invalid_input(
            "No valid rows remain after parsing the reference CSV.",
        ));
    }

    let rows_used = raw.len();
    let dataset = build_reference(raw)?;

    Ok(DatasetIngest {
        dataset,
        rows_read,
        rows_used,
        row_errors,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on
    // the first header. If we don't strip it, schema validation will
    // incorrectly report missing columns.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<RawReferenceRow, String> {
    let age = parse_required_f64(record, header_map, COL_AGE)?;
    let probability = parse_required_f64(record, header_map, COL_PROBABILITY)?;
    if !(0.0..=1.0).contains(&probability) {
        return Err(format!(
            "Probability {probability} is outside [0, 1]."
        ));
    }

    Ok(RawReferenceRow {
        age,
        monthly_income: parse_opt_f64(get_optional(record, header_map, COL_INCOME)),
        dependents: parse_opt_f64(get_optional(record, header_map, COL_DEPENDENTS)),
        probability,
    })
}

fn parse_required_f64(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<f64, String> {
    let raw = get_optional(record, header_map, name)
        .ok_or_else(|| format!("Missing required value: `{name}`"))?;
    let value = raw
        .parse::<f64>()
        .map_err(|_| format!("Invalid numeric value for `{name}`: '{raw}'"))?;
    if !value.is_finite() {
        return Err(format!("Non-finite value for `{name}`."));
    }
    Ok(value)
}

fn get_optional<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_opt_f64(s: Option<&str>) -> Option<f64> {
    let v = s?.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohort::IncomeCuts;

    const CSV: &str = "\
Unnamed: 0,age,MonthlyIncome,NumberOfDependents,Probability
1,45,6000,2,0.12
2,32,2100,0,0.31
3,58,,1,0.07
4,67,9100,0,0.02
";

    #[test]
    fn parses_rows_and_ignores_index_column() {
        let ingest = read_reference(CSV.as_bytes()).unwrap();
        assert_eq!(ingest.rows_read, 4);
        assert_eq!(ingest.rows_used, 4);
        assert!(ingest.row_errors.is_empty());
        assert_eq!(ingest.dataset.len(), 4);
        // Missing income filled with the column median of {6000, 2100, 9100}.
        assert!((ingest.dataset.rows[2].monthly_income - 6000.0).abs() < 1e-9);
    }

    #[test]
    fn header_match_is_case_insensitive_and_bom_tolerant() {
        let csv = "\u{feff}AGE,monthlyINCOME,NumberOfDependents,PROBABILITY\n45,6000,2,0.12\n";
        let ingest = read_reference(csv.as_bytes()).unwrap();
        assert_eq!(ingest.dataset.len(), 1);
    }

    #[test]
    fn bad_rows_are_skipped_and_reported() {
        let csv = "\
age,MonthlyIncome,NumberOfDependents,Probability
45,6000,2,0.12
not-a-number,5000,1,0.2
51,4000,0,1.7
39,3000,1,0.25
";
        let ingest = read_reference(csv.as_bytes()).unwrap();
        assert_eq!(ingest.rows_read, 4);
        assert_eq!(ingest.rows_used, 2);
        assert_eq!(ingest.row_errors.len(), 2);
        assert_eq!(ingest.row_errors[0].line, 3);
        assert_eq!(ingest.row_errors[1].line, 4);
        assert!(ingest.row_errors[1].message.contains("outside [0, 1]"));
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let csv = "age,MonthlyIncome,NumberOfDependents\n45,6000,2\n";
        let err = read_reference(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidInput);
        assert!(format!("{err}").contains("probability"));
    }

    #[test]
    fn all_rows_invalid_is_fatal() {
        let csv = "age,MonthlyIncome,NumberOfDependents,Probability\nx,1,1,0.5\n";
        let err = read_reference(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidInput);
    }

    #[test]
    fn small_corpus_still_gets_quartile_cuts() {
        let ingest = read_reference(CSV.as_bytes()).unwrap();
        match ingest.dataset.income_cuts {
            IncomeCuts::Quartile { edges } => {
                assert!((edges[0] - 2100.0).abs() < 1e-9);
                assert!((edges[4] - 9100.0).abs() < 1e-9);
            }
            IncomeCuts::Fixed => panic!("expected quartile cuts"),
        }
    }
}
