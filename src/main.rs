//! CLI entry point for the crop yield statistics tool.
//!
//! Loads a CSV of crop records, computes per-crop average yields overall and
//! for fertilised rows, and writes the per-crop summary to a CSV file.

use anyhow::Result;
use clap::Parser;
use crop_yield_stats::{
    aggregate::{average_by_crop, average_by_crop_filtered, difference},
    config::ColumnConfig,
    loader::load_records,
    output::{build_report, print_json, write_summary},
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "crop_yield_stats")]
#[command(about = "Computes per-crop yield averages and fertiliser impact", long_about = None)]
struct Cli {
    /// CSV file of crop records to analyze
    #[arg(value_name = "INPUT", default_value = "crop_yield.csv")]
    input: PathBuf,

    /// CSV file to write the per-crop summary to
    #[arg(short, long, default_value = "crop_yield_summary.csv")]
    output: PathBuf,

    /// Column holding the crop name
    #[arg(long, default_value = "Crop")]
    crop_column: String,

    /// Column holding the yield in tons per hectare
    #[arg(long, default_value = "Yield_tons_per_hectare")]
    yield_column: String,

    /// Column holding the fertiliser indicator
    #[arg(long, default_value = "Fertilizer_Used")]
    fertiliser_column: String,

    /// Indicator values counted as fertilised (trimmed, case-insensitive)
    #[arg(long, value_delimiter = ',', default_values = ["true", "yes"])]
    fertilised_values: Vec<String>,

    /// Also log the summary as pretty-printed JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/crop_yield_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("crop_yield_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let config = ColumnConfig {
        crop_column: cli.crop_column,
        yield_column: cli.yield_column,
        fertiliser_column: cli.fertiliser_column,
        truthy_values: cli.fertilised_values,
    };

    let records = load_records(&cli.input)?;
    info!(
        input = %cli.input.display(),
        record_count = records.len(),
        "Records loaded"
    );

    let overall = average_by_crop(&records, &config)?;
    let filtered = average_by_crop_filtered(&records, &config)?;
    let yield_difference = difference(&records, &config)?;

    write_summary(&cli.output, &overall, &filtered, &yield_difference)?;
    info!(
        output = %cli.output.display(),
        crop_count = overall.len(),
        fertilised_crop_count = filtered.len(),
        "Summary written"
    );

    if cli.json {
        let report = build_report(&overall, &filtered, &yield_difference);
        print_json(&report)?;
    }

    Ok(())
}
