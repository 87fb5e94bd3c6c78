//! Error types for Plant Flux
//!
//! The derivation engine itself never fails; these errors come from the
//! outer shell (record parsing, window persistence, report encoding).

use thiserror::Error;

/// Errors that can occur around metric computation
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Failed to parse sensor records: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid sensor record: {0}")]
    InvalidRecord(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("Ingestion error: {0}")]
    IngestError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
