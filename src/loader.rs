//! CSV loader for crop records.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{YieldError, YieldResult};
use crate::record::Record;

/// Reads a CSV file into an ordered sequence of [`Record`]s.
///
/// The first row is taken as the header; every following row becomes one
/// record pairing header names with that row's values, all kept as strings.
/// Input order is preserved.
///
/// # Errors
///
/// Returns [`YieldError::File`] if the path cannot be opened and
/// [`YieldError::Csv`] if a row fails to read.
pub fn load_records(path: &Path) -> YieldResult<Vec<Record>> {
    let file = File::open(path).map_err(|source| YieldError::file(path, source))?;

    let mut reader = ReaderBuilder::new().from_reader(file);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let fields = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        records.push(Record::new(fields));
    }

    debug!(path = %path.display(), record_count = records.len(), "Records loaded");

    Ok(records)
}
