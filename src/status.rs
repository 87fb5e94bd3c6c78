//! Status classification
//!
//! Maps metric values onto the healthy / warning / critical bands monitoring
//! clients use, plus the recovery trend and suitability band.

use crate::types::{DerivedMetrics, ResolvedReading, SensorReading};
use serde::{Deserialize, Serialize};

/// Interpretation band of a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Healthy,
    Warning,
    Critical,
}

/// Inclusive lower bounds of the warning and critical bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warning: f64,
    pub critical: f64,
}

/// Classify a value where higher is worse, bounds inclusive
pub fn status_level(value: f64, thresholds: Thresholds) -> StatusLevel {
    if value >= thresholds.critical {
        StatusLevel::Critical
    } else if value >= thresholds.warning {
        StatusLevel::Warning
    } else {
        StatusLevel::Healthy
    }
}

/// Classify a value where higher is worse, bounds exclusive
fn above(value: f64, warning: f64, critical: f64) -> StatusLevel {
    if value > critical {
        StatusLevel::Critical
    } else if value > warning {
        StatusLevel::Warning
    } else {
        StatusLevel::Healthy
    }
}

/// Classify a value where lower is worse, bounds exclusive
fn below(value: f64, warning: f64, critical: f64) -> StatusLevel {
    if value < critical {
        StatusLevel::Critical
    } else if value < warning {
        StatusLevel::Warning
    } else {
        StatusLevel::Healthy
    }
}

/// Direction of the PSI over the recent window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryTrend {
    Recovering,
    Stable,
    Worsening,
}

impl RecoveryTrend {
    pub fn from_rate(rate: i64) -> Self {
        match rate {
            r if r > 0 => RecoveryTrend::Recovering,
            r if r < 0 => RecoveryTrend::Worsening,
            _ => RecoveryTrend::Stable,
        }
    }
}

/// Qualitative reading of the suitability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityBand {
    Excellent,
    Acceptable,
    Poor,
}

impl SuitabilityBand {
    pub fn from_score(score: f64) -> Self {
        if score > 70.0 {
            SuitabilityBand::Excellent
        } else if score > 40.0 {
            SuitabilityBand::Acceptable
        } else {
            SuitabilityBand::Poor
        }
    }
}

/// Bands for the raw sensor values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorStatuses {
    pub temperature: StatusLevel,
    pub humidity: StatusLevel,
    pub soil_moisture: StatusLevel,
    pub vibration: StatusLevel,
    pub stress_type: StatusLevel,
}

impl SensorStatuses {
    pub fn classify(reading: &SensorReading, resolved: &ResolvedReading) -> Self {
        let temperature = if resolved.temperature > 40.0 || resolved.temperature < 10.0 {
            StatusLevel::Critical
        } else if resolved.temperature > 32.0 || resolved.temperature < 15.0 {
            StatusLevel::Warning
        } else {
            StatusLevel::Healthy
        };

        let humidity = if resolved.humidity > 90.0 || resolved.humidity < 20.0 {
            StatusLevel::Critical
        } else if resolved.humidity > 80.0 || resolved.humidity < 35.0 {
            StatusLevel::Warning
        } else {
            StatusLevel::Healthy
        };

        let stress_type = if reading.has_stress_type() {
            StatusLevel::Warning
        } else {
            StatusLevel::Healthy
        };

        Self {
            temperature,
            humidity,
            soil_moisture: below(resolved.soil_moisture, 400.0, 200.0),
            vibration: above(resolved.vibration, 30.0, 60.0),
            stress_type,
        }
    }
}

/// Bands for the derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricStatuses {
    pub heat_stress_index: StatusLevel,
    pub soil_dryness: StatusLevel,
    pub vibration_stress_score: StatusLevel,
    pub bio_signal_stability: StatusLevel,
    pub plant_stress_index: StatusLevel,
    pub disease_risk: StatusLevel,
    pub recovery_trend: RecoveryTrend,
    pub suitability: SuitabilityBand,
}

impl MetricStatuses {
    pub fn classify(metrics: &DerivedMetrics) -> Self {
        Self {
            heat_stress_index: above(metrics.heat_stress_index, 35.0, 45.0),
            soil_dryness: above(metrics.soil_dryness, 60.0, 80.0),
            vibration_stress_score: above(metrics.vibration_stress_score, 30.0, 60.0),
            bio_signal_stability: below(metrics.bio_signal_stability, 50.0, 30.0),
            plant_stress_index: above(metrics.plant_stress_index, 30.0, 70.0),
            disease_risk: above(metrics.disease_risk, 20.0, 50.0),
            recovery_trend: RecoveryTrend::from_rate(metrics.recovery_rate),
            suitability: SuitabilityBand::from_score(metrics.suitability_score),
        }
    }

    /// Worst band across the banded metrics
    pub fn overall(&self) -> StatusLevel {
        [
            self.heat_stress_index,
            self.soil_dryness,
            self.vibration_stress_score,
            self.bio_signal_stability,
            self.plant_stress_index,
            self.disease_risk,
        ]
        .into_iter()
        .max()
        .unwrap_or(StatusLevel::Healthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IrrigationStatus, StressDuration};
    use chrono::Utc;

    fn metrics() -> DerivedMetrics {
        DerivedMetrics {
            heat_stress_index: 31.0,
            soil_dryness: 20.0,
            vibration_stress_score: 0.0,
            bio_signal_stability: 100.0,
            plant_stress_index: 6.0,
            stress_causes: vec![],
            confidence_score: 0.0,
            suitability_score: 100.0,
            stress_duration: StressDuration::default(),
            recovery_rate: 0,
            disease_risk: 0.0,
            irrigation_recommendation: IrrigationStatus::Optimal,
        }
    }

    #[test]
    fn test_status_level_inclusive() {
        let t = Thresholds {
            warning: 30.0,
            critical: 70.0,
        };
        assert_eq!(status_level(29.9, t), StatusLevel::Healthy);
        assert_eq!(status_level(30.0, t), StatusLevel::Warning);
        assert_eq!(status_level(70.0, t), StatusLevel::Critical);
    }

    #[test]
    fn test_metric_bands_are_exclusive() {
        let mut m = metrics();
        m.plant_stress_index = 30.0;
        m.heat_stress_index = 45.0;
        m.bio_signal_stability = 30.0;

        let statuses = MetricStatuses::classify(&m);
        assert_eq!(statuses.plant_stress_index, StatusLevel::Healthy);
        assert_eq!(statuses.heat_stress_index, StatusLevel::Warning);
        assert_eq!(statuses.bio_signal_stability, StatusLevel::Warning);
        assert_eq!(statuses.overall(), StatusLevel::Warning);
    }

    #[test]
    fn test_overall_takes_worst() {
        let mut m = metrics();
        m.disease_risk = 75.0;
        let statuses = MetricStatuses::classify(&m);
        assert_eq!(statuses.disease_risk, StatusLevel::Critical);
        assert_eq!(statuses.overall(), StatusLevel::Critical);

        assert_eq!(
            MetricStatuses::classify(&metrics()).overall(),
            StatusLevel::Healthy
        );
    }

    #[test]
    fn test_trend_and_suitability() {
        assert_eq!(RecoveryTrend::from_rate(4), RecoveryTrend::Recovering);
        assert_eq!(RecoveryTrend::from_rate(-1), RecoveryTrend::Worsening);
        assert_eq!(RecoveryTrend::from_rate(0), RecoveryTrend::Stable);

        assert_eq!(SuitabilityBand::from_score(71.0), SuitabilityBand::Excellent);
        assert_eq!(SuitabilityBand::from_score(70.0), SuitabilityBand::Acceptable);
        assert_eq!(SuitabilityBand::from_score(40.0), SuitabilityBand::Poor);
    }

    #[test]
    fn test_sensor_statuses() {
        let mut reading = SensorReading::new(1, Utc::now());
        reading.stress_type = Some("drought".to_string());
        let resolved = ResolvedReading {
            temperature: 33.0,
            humidity: 95.0,
            soil_moisture: 150.0,
            vibration: 45.0,
            bio_signal: 500.0,
        };

        let statuses = SensorStatuses::classify(&reading, &resolved);
        assert_eq!(statuses.temperature, StatusLevel::Warning);
        assert_eq!(statuses.humidity, StatusLevel::Critical);
        assert_eq!(statuses.soil_moisture, StatusLevel::Critical);
        assert_eq!(statuses.vibration, StatusLevel::Warning);
        assert_eq!(statuses.stress_type, StatusLevel::Warning);

        let calm = SensorStatuses::classify(
            &SensorReading::new(2, Utc::now()),
            &ResolvedReading::default(),
        );
        assert_eq!(calm.temperature, StatusLevel::Healthy);
        assert_eq!(calm.soil_moisture, StatusLevel::Healthy);
        assert_eq!(calm.stress_type, StatusLevel::Healthy);
    }
}
