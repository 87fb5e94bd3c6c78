//! Adapter for parsing plant.health_log.v1 records into SensorReadings
//!
//! Accepts either a JSON array of records or NDJSON (one record per line).
//! Records are kept in input order, which is arrival order for the window.

use crate::error::ComputeError;
use crate::schema::record::ValidationError;
use crate::types::SensorReading;

/// Adapter for converting raw records to sensor readings
pub struct RecordAdapter;

impl RecordAdapter {
    /// Parse a single JSON record
    pub fn parse_record(json: &str) -> Result<SensorReading, ComputeError> {
        serde_json::from_str(json.trim())
            .map_err(|e| ComputeError::ParseError(format!("Failed to parse record: {}", e)))
    }

    /// Parse a JSON string containing an array of records
    pub fn parse_array(json: &str) -> Result<Vec<SensorReading>, ComputeError> {
        let readings: Vec<SensorReading> = serde_json::from_str(json)?;
        Ok(readings)
    }

    /// Parse NDJSON (newline-delimited JSON) containing records
    pub fn parse_ndjson(ndjson: &str) -> Result<Vec<SensorReading>, ComputeError> {
        let mut readings = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<SensorReading>(trimmed) {
                Ok(reading) => readings.push(reading),
                Err(e) => {
                    return Err(ComputeError::ParseError(format!(
                        "Failed to parse line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }
        Ok(readings)
    }

    /// Validate a batch of records, returning only the failures
    pub fn validate_records(readings: &[SensorReading]) -> Vec<ValidationResult> {
        readings
            .iter()
            .enumerate()
            .filter_map(|(idx, reading)| {
                reading.validate().err().map(|error| ValidationResult {
                    index: idx,
                    record_id: reading.id,
                    error,
                })
            })
            .collect()
    }

    /// Fail on the first invalid record
    pub fn ensure_valid(readings: &[SensorReading]) -> Result<(), ComputeError> {
        match Self::validate_records(readings).into_iter().next() {
            Some(failure) => Err(ComputeError::InvalidRecord(format!(
                "record {} (index {}): {}",
                failure.record_id, failure.index, failure.error
            ))),
            None => Ok(()),
        }
    }
}

/// A record that failed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub index: usize,
    pub record_id: i64,
    pub error: ValidationError,
}
