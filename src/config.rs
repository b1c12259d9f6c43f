//! Column configuration for the input data.
//!
//! The source data exists in more than one revision with diverging column
//! names and truthy spellings for the fertiliser flag, so the pipeline treats
//! both as configuration rather than hard-coding one revision.

/// Names of the input columns the pipeline reads, plus the truthy-value
/// policy for the fertiliser indicator.
///
/// The canonical defaults are the `Fertilizer_Used` column with `true`/`yes`
/// accepted as truthy (trimmed, ASCII case-insensitive), which covers the
/// values seen across source revisions.
#[derive(Debug, Clone)]
pub struct ColumnConfig {
    pub crop_column: String,
    pub yield_column: String,
    pub fertiliser_column: String,
    pub truthy_values: Vec<String>,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            crop_column: "Crop".to_string(),
            yield_column: "Yield_tons_per_hectare".to_string(),
            fertiliser_column: "Fertilizer_Used".to_string(),
            truthy_values: vec!["true".to_string(), "yes".to_string()],
        }
    }
}

impl ColumnConfig {
    /// Whether a raw fertiliser-indicator value counts as fertilised.
    pub fn is_truthy(&self, value: &str) -> bool {
        let normalized = value.trim().to_ascii_lowercase();
        self.truthy_values.iter().any(|t| *t == normalized)
    }
}
