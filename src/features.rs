//! Direct-metric derivation
//!
//! This module derives the four independent metrics of a single reading:
//! - Heat stress index
//! - Soil dryness
//! - Vibration stress score
//! - Bio-signal stability
//!
//! All calculators are total over resolved values and never clamp beyond
//! what is documented on each function.

use crate::types::{DirectMetrics, ResolvedReading, BIO_SIGNAL_BASELINE, SOIL_MOISTURE_MAX};

/// Feature deriver for computing direct metrics
pub struct FeatureDeriver;

impl FeatureDeriver {
    /// Derive direct metrics from a resolved reading
    pub fn derive(reading: &ResolvedReading) -> DirectMetrics {
        DirectMetrics {
            heat_stress_index: heat_stress_index(reading.temperature, reading.humidity),
            soil_dryness: soil_dryness(reading.soil_moisture),
            vibration_stress_score: vibration_stress_score(reading.vibration),
            bio_signal_stability: bio_signal_stability(reading.bio_signal),
        }
    }
}

/// Temperature plus a tenth of the relative humidity. Not clamped.
pub fn heat_stress_index(temperature: f64, humidity: f64) -> f64 {
    temperature + 0.1 * humidity
}

/// Inverse of soil moisture on a 0-100 scale.
/// Moisture outside 0-1023 yields dryness outside 0-100; callers clamp for display.
pub fn soil_dryness(soil_moisture: f64) -> f64 {
    100.0 - (soil_moisture / SOIL_MOISTURE_MAX * 100.0)
}

/// Vibration scaled by 1.5. Unbounded above.
pub fn vibration_stress_score(vibration: f64) -> f64 {
    vibration * 1.5
}

/// 100 at the baseline, falling 0.2 per µV of deviation, floored at 0
pub fn bio_signal_stability(bio_signal: f64) -> f64 {
    (100.0 - (bio_signal - BIO_SIGNAL_BASELINE).abs() * 0.2).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_stress_index() {
        // 25 + 0.1 * 60 = 31
        assert!((heat_stress_index(25.0, 60.0) - 31.0).abs() < 1e-9);
        // No clamping on hot, humid air
        assert!((heat_stress_index(48.0, 95.0) - 57.5).abs() < 1e-9);
    }

    #[test]
    fn test_soil_dryness() {
        assert!((soil_dryness(1023.0) - 0.0).abs() < 1e-9);
        assert!((soil_dryness(0.0) - 100.0).abs() < 1e-9);
        // 512 / 1023 * 100 = 50.05, dryness = 49.95
        assert!((soil_dryness(512.0) - 49.951).abs() < 0.001);
        // Out-of-range moisture is passed through
        assert!(soil_dryness(1200.0) < 0.0);
        assert!(soil_dryness(-50.0) > 100.0);
    }

    #[test]
    fn test_vibration_stress_score() {
        assert_eq!(vibration_stress_score(0.0), 0.0);
        assert_eq!(vibration_stress_score(20.0), 30.0);
        assert_eq!(vibration_stress_score(100.0), 150.0);
    }

    #[test]
    fn test_bio_signal_stability() {
        assert_eq!(bio_signal_stability(500.0), 100.0);
        // |650 - 500| * 0.2 = 30
        assert!((bio_signal_stability(650.0) - 70.0).abs() < 1e-9);
        assert!((bio_signal_stability(350.0) - 70.0).abs() < 1e-9);
        // Floored at zero
        assert_eq!(bio_signal_stability(1500.0), 0.0);
    }

    #[test]
    fn test_derive_defaults() {
        let metrics = FeatureDeriver::derive(&ResolvedReading::default());
        assert!((metrics.heat_stress_index - 31.0).abs() < 1e-9);
        assert_eq!(metrics.vibration_stress_score, 0.0);
        assert_eq!(metrics.bio_signal_stability, 100.0);
    }
}
