//! Output formatting and persistence for the per-crop summary.
//!
//! Supports pretty-printing, JSON serialization, and CSV writing.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{YieldError, YieldResult};

/// Header of the summary CSV, in output column order.
pub const SUMMARY_HEADERS: [&str; 4] = [
    "Crop",
    "Average_Yield_All",
    "Average_Yield_Fertiliser",
    "Yield_Difference",
];

/// One output row of the summary.
#[derive(Debug, Serialize, PartialEq)]
pub struct SummaryRow {
    #[serde(rename = "Crop")]
    pub crop: String,
    #[serde(rename = "Average_Yield_All")]
    pub average_yield_all: f64,
    #[serde(rename = "Average_Yield_Fertiliser")]
    pub average_yield_fertiliser: f64,
    #[serde(rename = "Yield_Difference")]
    pub yield_difference: f64,
}

/// Run summary for logging and JSON output.
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub generated_at: DateTime<Utc>,
    pub crop_count: usize,
    pub rows: Vec<SummaryRow>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Merges the three mappings into output rows, one per crop in the overall
/// mapping.
///
/// The overall mapping drives the row set; filtered and difference values
/// default to 0 for crops they do not cover.
pub fn summary_rows(
    overall: &BTreeMap<String, f64>,
    filtered: &BTreeMap<String, f64>,
    difference: &BTreeMap<String, f64>,
) -> Vec<SummaryRow> {
    overall
        .iter()
        .map(|(crop, all_avg)| SummaryRow {
            crop: crop.clone(),
            average_yield_all: round2(*all_avg),
            average_yield_fertiliser: round2(filtered.get(crop).copied().unwrap_or(0.0)),
            yield_difference: round2(difference.get(crop).copied().unwrap_or(0.0)),
        })
        .collect()
}

/// Builds the serialisable run summary from the three mappings.
pub fn build_report(
    overall: &BTreeMap<String, f64>,
    filtered: &BTreeMap<String, f64>,
    difference: &BTreeMap<String, f64>,
) -> SummaryReport {
    let rows = summary_rows(overall, filtered, difference);
    SummaryReport {
        generated_at: Utc::now(),
        crop_count: rows.len(),
        rows,
    }
}

/// Writes the summary CSV: one header row plus one row per crop in the
/// overall mapping, numeric fields with two decimal places.
///
/// The header is written unconditionally, so empty mappings produce a file
/// with exactly one line.
///
/// # Errors
///
/// Returns [`YieldError::File`] if the path cannot be created and
/// [`YieldError::Csv`] if a row fails to serialise.
pub fn write_summary(
    path: &Path,
    overall: &BTreeMap<String, f64>,
    filtered: &BTreeMap<String, f64>,
    difference: &BTreeMap<String, f64>,
) -> YieldResult<()> {
    let rows = summary_rows(overall, filtered, difference);
    debug!(path = %path.display(), row_count = rows.len(), "Writing summary CSV");

    let file = File::create(path).map_err(|source| YieldError::file(path, source))?;

    let mut writer = WriterBuilder::new().from_writer(file);
    writer.write_record(SUMMARY_HEADERS)?;

    for row in &rows {
        writer.write_record(&[
            row.crop.clone(),
            format!("{:.2}", row.average_yield_all),
            format!("{:.2}", row.average_yield_fertiliser),
            format!("{:.2}", row.yield_difference),
        ])?;
    }

    writer.flush().map_err(|source| YieldError::file(path, source))?;

    Ok(())
}

/// Logs the run summary using Rust's debug pretty-print format.
pub fn print_pretty(report: &SummaryReport) {
    debug!("{:#?}", report);
}

/// Logs the run summary as pretty-printed JSON.
pub fn print_json(report: &SummaryReport) -> anyhow::Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(name)
    }

    fn mapping(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs
            .iter()
            .map(|(crop, value)| (crop.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_summary_rows_driven_by_overall_mapping() {
        let overall = mapping(&[("Rice", 6.0), ("Wheat", 5.0)]);
        let filtered = mapping(&[("Wheat", 6.0)]);
        let difference = mapping(&[("Wheat", 1.0)]);

        let rows = summary_rows(&overall, &filtered, &difference);
        assert_eq!(rows.len(), 2);

        // Crops without fertilised records default to 0
        assert_eq!(rows[0].crop, "Rice");
        assert_eq!(rows[0].average_yield_fertiliser, 0.0);
        assert_eq!(rows[0].yield_difference, 0.0);

        assert_eq!(rows[1].crop, "Wheat");
        assert_eq!(rows[1].average_yield_fertiliser, 6.0);
        assert_eq!(rows[1].yield_difference, 1.0);
    }

    #[test]
    fn test_summary_rows_round_to_two_decimals() {
        let overall = mapping(&[("Wheat", 5.0 / 3.0)]);
        let rows = summary_rows(&overall, &BTreeMap::new(), &BTreeMap::new());

        assert_eq!(rows[0].average_yield_all, 1.67);
    }

    #[test]
    fn test_write_summary_content() {
        let path = temp_path("crop_yield_stats_test_write.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        let overall = mapping(&[("Rice", 6.0), ("Wheat", 5.0)]);
        let filtered = mapping(&[("Rice", 7.0), ("Wheat", 6.0)]);
        let difference = mapping(&[("Rice", 1.0), ("Wheat", 1.0)]);

        write_summary(&path, &overall, &filtered, &difference).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Crop,Average_Yield_All,Average_Yield_Fertiliser,Yield_Difference"
        );
        assert_eq!(lines[1], "Rice,6.00,7.00,1.00");
        assert_eq!(lines[2], "Wheat,5.00,6.00,1.00");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_summary_empty_mappings_header_only() {
        let path = temp_path("crop_yield_stats_test_empty.csv");
        let _ = fs::remove_file(&path);

        let empty = BTreeMap::new();
        write_summary(&path, &empty, &empty, &empty).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            "Crop,Average_Yield_All,Average_Yield_Fertiliser,Yield_Difference"
        );

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_summary_unwritable_path_is_file_error() {
        let empty = BTreeMap::new();
        let result = write_summary(
            Path::new("/nonexistent/dir/summary.csv"),
            &empty,
            &empty,
            &empty,
        );
        assert!(matches!(result, Err(YieldError::File { .. })));
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        let report = build_report(&BTreeMap::new(), &BTreeMap::new(), &BTreeMap::new());
        print_pretty(&report);
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let report = build_report(&BTreeMap::new(), &BTreeMap::new(), &BTreeMap::new());
        print_json(&report).unwrap();
    }

    #[test]
    fn test_build_report_counts_rows() {
        let overall = mapping(&[("Rice", 6.0), ("Wheat", 5.0)]);
        let report = build_report(&overall, &BTreeMap::new(), &BTreeMap::new());

        assert_eq!(report.crop_count, 2);
        assert_eq!(report.rows.len(), 2);
    }
}
