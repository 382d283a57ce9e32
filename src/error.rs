//! Error handling for subset runs.
//!
//! Every failure is fatal: errors propagate to `main`, which prints the
//! chain and exits non-zero. Outputs written by earlier stages are left
//! on disk.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubsetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Malformed JSON in file: {path}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Schema violation in {dataset} at {location}: {reason}")]
    SchemaViolation {
        dataset: String,
        location: String,
        reason: String,
    },

    #[error("Failed to write output file: {path}")]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Subset task failed: {reason}")]
    TaskFailed { reason: String },

    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl SubsetError {
    /// Create a schema violation for a record at `location` in `dataset`
    pub fn schema_violation(
        dataset: impl Into<String>,
        location: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::SchemaViolation {
            dataset: dataset.into(),
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SubsetError>;
