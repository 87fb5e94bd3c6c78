//! Reading normalization
//!
//! This module resolves sensor readings into concrete values.
//! - Absent fields replaced by documented defaults
//! - Coverage and defaulted-field flags computed
//!
//! Defaulting never alters how a present value is interpreted: a present
//! zero stays zero.

use crate::types::{
    NormalizedReading, ResolvedReading, SensorField, SensorReading, DEFAULT_BIO_SIGNAL,
    DEFAULT_HUMIDITY, DEFAULT_SOIL_MOISTURE, DEFAULT_TEMPERATURE, DEFAULT_VIBRATION,
};

/// Number of sensor channels tracked for coverage
const TRACKED_FIELDS: usize = 5;

/// Normalizer for converting sensor readings to resolved readings
pub struct Normalizer;

impl Normalizer {
    /// Resolve defaults and record which fields were missing
    pub fn normalize(reading: &SensorReading) -> NormalizedReading {
        let mut defaulted_fields = Vec::new();

        let mut resolve = |value: Option<f64>, default: f64, field: SensorField| match value {
            Some(v) => v,
            None => {
                defaulted_fields.push(field);
                default
            }
        };

        let resolved = ResolvedReading {
            temperature: resolve(
                reading.temperature,
                DEFAULT_TEMPERATURE,
                SensorField::Temperature,
            ),
            humidity: resolve(reading.humidity, DEFAULT_HUMIDITY, SensorField::Humidity),
            soil_moisture: resolve(
                reading.soil_moisture,
                DEFAULT_SOIL_MOISTURE,
                SensorField::SoilMoisture,
            ),
            vibration: resolve(reading.vibration, DEFAULT_VIBRATION, SensorField::Vibration),
            bio_signal: resolve(reading.bio_signal, DEFAULT_BIO_SIGNAL, SensorField::BioSignal),
        };

        let present = TRACKED_FIELDS - defaulted_fields.len();
        let coverage = (present as f64) / (TRACKED_FIELDS as f64);

        NormalizedReading {
            resolved,
            defaulted_fields,
            coverage,
        }
    }

    /// Resolve defaults only
    pub fn resolve(reading: &SensorReading) -> ResolvedReading {
        Self::normalize(reading).resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_reading_uses_defaults() {
        let reading = SensorReading::new(1, Utc::now());
        let normalized = Normalizer::normalize(&reading);

        assert_eq!(normalized.resolved, ResolvedReading::default());
        assert_eq!(normalized.resolved.temperature, 25.0);
        assert_eq!(normalized.resolved.humidity, 60.0);
        assert_eq!(normalized.resolved.soil_moisture, 512.0);
        assert_eq!(normalized.resolved.vibration, 0.0);
        assert_eq!(normalized.resolved.bio_signal, 500.0);
        assert_eq!(normalized.coverage, 0.0);
        assert_eq!(
            normalized.defaulted_fields,
            vec![
                SensorField::Temperature,
                SensorField::Humidity,
                SensorField::SoilMoisture,
                SensorField::Vibration,
                SensorField::BioSignal,
            ]
        );
    }

    #[test]
    fn test_present_zero_is_kept() {
        let mut reading = SensorReading::new(1, Utc::now());
        reading.soil_moisture = Some(0.0);
        reading.temperature = Some(0.0);

        let normalized = Normalizer::normalize(&reading);
        assert_eq!(normalized.resolved.soil_moisture, 0.0);
        assert_eq!(normalized.resolved.temperature, 0.0);
        assert!(!normalized
            .defaulted_fields
            .contains(&SensorField::SoilMoisture));
        assert!((normalized.coverage - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_full_coverage() {
        let mut reading = SensorReading::new(1, Utc::now());
        reading.temperature = Some(22.0);
        reading.humidity = Some(55.0);
        reading.soil_moisture = Some(700.0);
        reading.vibration = Some(3.0);
        reading.bio_signal = Some(510.0);

        let normalized = Normalizer::normalize(&reading);
        assert!(normalized.defaulted_fields.is_empty());
        assert_eq!(normalized.coverage, 1.0);
    }
}
