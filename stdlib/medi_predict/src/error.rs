//! Error types for classifiers, model loading and dispatch

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`crate::Classifier`]
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClassifierError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
}

/// Non-fatal prediction failures, shown to the user
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PredictError {
    #[error("Expected {expected} fields, got {actual}.")]
    FieldCount { expected: usize, actual: usize },
    #[error("Please fill in all the fields before submitting.")]
    IncompleteInput { field: String },
    #[error("Invalid input for '{field}'. Please enter valid numeric values.")]
    InvalidNumber { field: String, value: String },
    #[error("An error occurred during prediction: {0}")]
    Inference(#[from] ClassifierError),
}

/// Startup failure while loading a model artifact. Always fatal.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Model file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to read model {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse model {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid model '{name}': {reason}")]
    Invalid { name: String, reason: String },
}
