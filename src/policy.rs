//! Predictive and policy metrics
//!
//! Disease risk and the irrigation recommendation.

use crate::types::{IrrigationStatus, ResolvedReading};

/// Soil moisture below which watering is urgent in hot conditions
pub const IMMEDIATE_SOIL_MOISTURE: f64 = 200.0;
/// Temperature above which dry soil needs immediate watering (°C)
pub const IMMEDIATE_TEMPERATURE: f64 = 30.0;
/// Soil moisture below which watering should be scheduled
pub const WATER_SOON_SOIL_MOISTURE: f64 = 400.0;

/// Bio-signal instability scaled by 1.5, capped at 100
pub fn disease_risk(bio_signal_stability: f64) -> f64 {
    ((100.0 - bio_signal_stability) * 1.5).min(100.0)
}

/// First matching rule wins
pub fn irrigation_recommendation(reading: &ResolvedReading) -> IrrigationStatus {
    if reading.soil_moisture < IMMEDIATE_SOIL_MOISTURE
        && reading.temperature > IMMEDIATE_TEMPERATURE
    {
        IrrigationStatus::Immediate
    } else if reading.soil_moisture < WATER_SOON_SOIL_MOISTURE {
        IrrigationStatus::WaterSoon
    } else {
        IrrigationStatus::Optimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(soil_moisture: f64, temperature: f64) -> ResolvedReading {
        ResolvedReading {
            soil_moisture,
            temperature,
            ..ResolvedReading::default()
        }
    }

    #[test]
    fn test_disease_risk() {
        assert_eq!(disease_risk(100.0), 0.0);
        assert_eq!(disease_risk(80.0), 30.0);
        assert_eq!(disease_risk(0.0), 100.0);
        assert_eq!(disease_risk(20.0), 100.0);
    }

    #[test]
    fn test_irrigation_rules() {
        assert_eq!(
            irrigation_recommendation(&reading(150.0, 35.0)),
            IrrigationStatus::Immediate
        );
        assert_eq!(
            irrigation_recommendation(&reading(350.0, 20.0)),
            IrrigationStatus::WaterSoon
        );
        assert_eq!(
            irrigation_recommendation(&reading(900.0, 20.0)),
            IrrigationStatus::Optimal
        );
    }

    #[test]
    fn test_dry_but_cool_is_water_soon() {
        assert_eq!(
            irrigation_recommendation(&reading(150.0, 30.0)),
            IrrigationStatus::WaterSoon
        );
    }

    #[test]
    fn test_default_moisture_is_optimal() {
        assert_eq!(
            irrigation_recommendation(&ResolvedReading::default()),
            IrrigationStatus::Optimal
        );
    }
}
