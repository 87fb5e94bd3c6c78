//! plant.health_log.v1 record validation
//!
//! One record per `plant_health_logs` row. Parsing is lenient (every sensor
//! field may be null or absent); validation only rejects records the engine
//! could not interpret at all.

use crate::types::{SensorField, SensorReading};

/// Current record schema version
pub const SCHEMA_VERSION: &str = "plant.health_log.v1";

impl SensorReading {
    /// Check the record is interpretable
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id < 0 {
            return Err(ValidationError::NegativeId(self.id));
        }

        let fields = [
            (SensorField::Temperature, self.temperature),
            (SensorField::Humidity, self.humidity),
            (SensorField::SoilMoisture, self.soil_moisture),
            (SensorField::Vibration, self.vibration),
            (SensorField::BioSignal, self.bio_signal),
        ];
        for (field, value) in fields {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(ValidationError::NonFiniteValue {
                    field: field.as_str().to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Validation errors for sensor records
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Record id must be non-negative, got {0}")]
    NegativeId(i64),

    #[error("Field {field} is not a finite number")]
    NonFiniteValue { field: String },
}
