//! Per-crop yield aggregation.
//!
//! Three pure functions over a slice of records: the overall average yield
//! per crop, the average restricted to fertilised rows, and the difference
//! between the two.

use std::collections::BTreeMap;

use crate::config::ColumnConfig;
use crate::error::{YieldError, YieldResult};
use crate::record::Record;

/// Groups records by crop and computes the arithmetic mean yield per group.
///
/// Yield values are parsed from their string form here; parsing is the only
/// place the pipeline converts field types.
///
/// # Errors
///
/// Returns [`YieldError::Parse`] for a non-numeric yield value and
/// [`YieldError::MissingColumn`] if a record lacks the crop or yield column.
pub fn average_by_crop(
    records: &[Record],
    config: &ColumnConfig,
) -> YieldResult<BTreeMap<String, f64>> {
    let mut groups: BTreeMap<String, (f64, usize)> = BTreeMap::new();

    for record in records {
        let crop = record
            .get(&config.crop_column)
            .ok_or_else(|| YieldError::MissingColumn(config.crop_column.clone()))?;
        let raw = record
            .get(&config.yield_column)
            .ok_or_else(|| YieldError::MissingColumn(config.yield_column.clone()))?;

        let value: f64 = raw.trim().parse().map_err(|_| YieldError::Parse {
            crop: crop.to_string(),
            value: raw.to_string(),
        })?;

        let entry = groups.entry(crop.to_string()).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    Ok(groups
        .into_iter()
        .map(|(crop, (sum, count))| (crop, sum / count as f64))
        .collect())
}

/// Same as [`average_by_crop`], restricted to fertilised records.
///
/// A record counts as fertilised when its indicator value satisfies the
/// configured truthy policy; a record without the indicator column does not.
/// Returns an empty mapping when nothing passes the filter.
pub fn average_by_crop_filtered(
    records: &[Record],
    config: &ColumnConfig,
) -> YieldResult<BTreeMap<String, f64>> {
    let fertilised: Vec<Record> = records
        .iter()
        .filter(|record| {
            record
                .get(&config.fertiliser_column)
                .is_some_and(|value| config.is_truthy(value))
        })
        .cloned()
        .collect();

    average_by_crop(&fertilised, config)
}

/// Per-crop difference between the fertilised-only and overall average yield.
///
/// Keyed by the fertilised subset: crops with no fertilised record are absent
/// from the result even when the overall mapping has them. The join must stay
/// in that direction.
///
/// # Errors
///
/// Returns [`YieldError::MissingCrop`] if a fertilised crop is somehow absent
/// from the overall averages. The subset is built from the same records, so
/// this is a consistency check rather than a reachable state.
pub fn difference(
    records: &[Record],
    config: &ColumnConfig,
) -> YieldResult<BTreeMap<String, f64>> {
    let overall = average_by_crop(records, config)?;
    let filtered = average_by_crop_filtered(records, config)?;

    let mut result = BTreeMap::new();
    for (crop, fertilised_avg) in &filtered {
        let overall_avg = overall
            .get(crop)
            .ok_or_else(|| YieldError::MissingCrop(crop.clone()))?;
        result.insert(crop.clone(), fertilised_avg - overall_avg);
    }

    Ok(result)
}
