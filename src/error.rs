//! Error types for the yield statistics pipeline.

use thiserror::Error;

/// Result type for pipeline operations.
pub type YieldResult<T> = Result<T, YieldError>;

#[derive(Error, Debug)]
pub enum YieldError {
    /// The input or output path could not be opened.
    #[error("file error for {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader or writer failed mid-stream.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A yield value did not parse as a number.
    #[error("invalid yield value {value:?} for crop {crop:?}")]
    Parse { crop: String, value: String },

    /// A data row lacks a column the pipeline was configured to read.
    #[error("column {0:?} not found in record")]
    MissingColumn(String),

    /// A crop key from the fertilised subset is absent from the overall
    /// averages. Cannot occur when the subset is built from the same records.
    #[error("crop {0:?} missing from overall averages")]
    MissingCrop(String),
}

impl YieldError {
    /// Wraps an I/O failure with the path it occurred on.
    pub fn file(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::File {
            path: path.display().to_string(),
            source,
        }
    }
}
