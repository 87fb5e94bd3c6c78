//! Composite stress index and cause attribution
//!
//! Combines the normalized stress components of a reading into the Plant
//! Stress Index (PSI) and explains which sensors are driving it.
//!
//! Cause attribution walks four triggers in a fixed order. The bio-signal
//! trigger only produces "Disease Suspected" when none of the physical
//! triggers fired, while the confidence score counts every raw trigger.

use crate::features::FeatureDeriver;
use crate::normalizer::Normalizer;
use crate::types::{
    DirectMetrics, ResolvedReading, SensorReading, Severity, StressCause, StressCauseKind,
    StressComponents, OPTIMAL_HUMIDITY, OPTIMAL_TEMP,
};

/// PSI weight of the temperature component
pub const WEIGHT_TEMPERATURE: f64 = 0.25;
/// PSI weight of the humidity component
pub const WEIGHT_HUMIDITY: f64 = 0.15;
/// PSI weight of the soil component
pub const WEIGHT_SOIL: f64 = 0.3;
/// PSI weight of the vibration component
pub const WEIGHT_VIBRATION: f64 = 0.15;
/// PSI weight of the bio-signal component
pub const WEIGHT_BIO: f64 = 0.15;

/// Weights in component order; must sum to 1.0
pub const PSI_WEIGHTS: [f64; 5] = [
    WEIGHT_TEMPERATURE,
    WEIGHT_HUMIDITY,
    WEIGHT_SOIL,
    WEIGHT_VIBRATION,
    WEIGHT_BIO,
];

const HEAT_TRIGGER: f64 = 35.0;
const HEAT_HIGH: f64 = 45.0;
const DRYNESS_TRIGGER: f64 = 60.0;
const DRYNESS_HIGH: f64 = 80.0;
const VIBRATION_TRIGGER: f64 = 30.0;
const VIBRATION_HIGH: f64 = 60.0;
const BIO_TRIGGER: f64 = 50.0;
const BIO_HIGH: f64 = 30.0;

/// Raw trigger state, evaluated independently of suppression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StressTriggers {
    pub heat: bool,
    pub water: bool,
    pub mechanical: bool,
    pub bio: bool,
}

impl StressTriggers {
    pub fn evaluate(direct: &DirectMetrics) -> Self {
        Self {
            heat: direct.heat_stress_index > HEAT_TRIGGER,
            water: direct.soil_dryness > DRYNESS_TRIGGER,
            mechanical: direct.vibration_stress_score > VIBRATION_TRIGGER,
            bio: direct.bio_signal_stability < BIO_TRIGGER,
        }
    }

    pub fn active_count(&self) -> usize {
        [self.heat, self.water, self.mechanical, self.bio]
            .iter()
            .filter(|t| **t)
            .count()
    }
}

/// Composite part of the assessment
#[derive(Debug, Clone, PartialEq)]
pub struct StressAssessment {
    pub components: StressComponents,
    pub plant_stress_index: f64,
    pub triggers: StressTriggers,
    pub stress_causes: Vec<StressCause>,
    pub confidence_score: f64,
    pub suitability_score: f64,
}

/// Analyzer for the composite stress metrics
pub struct StressAnalyzer;

impl StressAnalyzer {
    pub fn assess(reading: &ResolvedReading, direct: &DirectMetrics) -> StressAssessment {
        let components = stress_components(reading, direct);
        let triggers = StressTriggers::evaluate(direct);

        StressAssessment {
            components,
            plant_stress_index: plant_stress_index(&components),
            triggers,
            stress_causes: attribute_causes(direct),
            confidence_score: confidence_score(&triggers),
            suitability_score: suitability_score(reading),
        }
    }
}

/// Scale each stressor to 0-100
pub fn stress_components(reading: &ResolvedReading, direct: &DirectMetrics) -> StressComponents {
    StressComponents {
        temperature: ((reading.temperature - OPTIMAL_TEMP).abs() * 4.0).min(100.0),
        humidity: ((reading.humidity - OPTIMAL_HUMIDITY).abs() * 2.0).min(100.0),
        soil: direct.soil_dryness,
        vibration: direct.vibration_stress_score.min(100.0),
        bio: 100.0 - direct.bio_signal_stability,
    }
}

/// Weighted sum of the stress components
pub fn plant_stress_index(components: &StressComponents) -> f64 {
    components.temperature * WEIGHT_TEMPERATURE
        + components.humidity * WEIGHT_HUMIDITY
        + components.soil * WEIGHT_SOIL
        + components.vibration * WEIGHT_VIBRATION
        + components.bio * WEIGHT_BIO
}

/// PSI of a single raw reading, without cause attribution
pub fn reading_stress_index(reading: &SensorReading) -> f64 {
    let resolved = Normalizer::resolve(reading);
    let direct = FeatureDeriver::derive(&resolved);
    plant_stress_index(&stress_components(&resolved, &direct))
}

/// Evaluate causes in fixed order; insertion order is display order
pub fn attribute_causes(direct: &DirectMetrics) -> Vec<StressCause> {
    let mut causes = Vec::new();

    if direct.heat_stress_index > HEAT_TRIGGER {
        let severity = if direct.heat_stress_index > HEAT_HIGH {
            Severity::High
        } else {
            Severity::Medium
        };
        causes.push(StressCause::new(StressCauseKind::HeatStress, severity));
    }

    if direct.soil_dryness > DRYNESS_TRIGGER {
        let severity = if direct.soil_dryness > DRYNESS_HIGH {
            Severity::High
        } else {
            Severity::Medium
        };
        causes.push(StressCause::new(StressCauseKind::WaterStress, severity));
    }

    if direct.vibration_stress_score > VIBRATION_TRIGGER {
        let severity = if direct.vibration_stress_score > VIBRATION_HIGH {
            Severity::High
        } else {
            Severity::Medium
        };
        causes.push(StressCause::new(StressCauseKind::MechanicalStress, severity));
    }

    // Fallback diagnosis: only when no physical cause explains the stress
    if direct.bio_signal_stability < BIO_TRIGGER && causes.is_empty() {
        let severity = if direct.bio_signal_stability < BIO_HIGH {
            Severity::High
        } else {
            Severity::Medium
        };
        causes.push(StressCause::new(StressCauseKind::DiseaseSuspected, severity));
    }

    causes
}

/// Share of raw triggers that fired, as a percentage
pub fn confidence_score(triggers: &StressTriggers) -> f64 {
    (triggers.active_count() as f64) / 4.0 * 100.0
}

/// 100 at optimal temperature and humidity, floored at 0
pub fn suitability_score(reading: &ResolvedReading) -> f64 {
    (100.0
        - (reading.temperature - OPTIMAL_TEMP).abs() * 3.0
        - (reading.humidity - OPTIMAL_HUMIDITY).abs() * 2.0)
        .max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn resolved(temperature: f64, humidity: f64, soil: f64, vibration: f64, bio: f64) -> ResolvedReading {
        ResolvedReading {
            temperature,
            humidity,
            soil_moisture: soil,
            vibration,
            bio_signal: bio,
        }
    }

    fn assess(reading: ResolvedReading) -> StressAssessment {
        let direct = FeatureDeriver::derive(&reading);
        StressAnalyzer::assess(&reading, &direct)
    }

    fn kinds(causes: &[StressCause]) -> Vec<StressCauseKind> {
        causes.iter().map(|c| c.kind).collect()
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum: f64 = PSI_WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_optimal_conditions_have_zero_psi() {
        let assessment = assess(resolved(25.0, 60.0, 1023.0, 0.0, 500.0));
        assert!(assessment.plant_stress_index.abs() < 1e-9);
        assert!(assessment.stress_causes.is_empty());
        assert_eq!(assessment.confidence_score, 0.0);
        assert_eq!(assessment.suitability_score, 100.0);
    }

    #[test]
    fn test_components_are_capped() {
        let reading = resolved(80.0, 0.0, 0.0, 200.0, 2000.0);
        let direct = FeatureDeriver::derive(&reading);
        let c = stress_components(&reading, &direct);
        assert_eq!(c.temperature, 100.0);
        assert_eq!(c.humidity, 100.0);
        assert_eq!(c.soil, 100.0);
        assert_eq!(c.vibration, 100.0);
        assert_eq!(c.bio, 100.0);
        assert!((plant_stress_index(&c) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_psi_weighting() {
        // temp 30 -> 20 * 0.25 = 5; humidity 70 -> 20 * 0.15 = 3
        let assessment = assess(resolved(30.0, 70.0, 1023.0, 0.0, 500.0));
        assert!((assessment.plant_stress_index - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_cause_order_heat_then_water() {
        let assessment = assess(resolved(50.0, 60.0, 100.0, 0.0, 500.0));
        assert_eq!(
            kinds(&assessment.stress_causes),
            vec![StressCauseKind::HeatStress, StressCauseKind::WaterStress]
        );
        assert_eq!(assessment.stress_causes[0].severity, Severity::High);
        assert_eq!(assessment.stress_causes[1].severity, Severity::High);
    }

    fn direct(heat: f64, dryness: f64, vibration: f64, stability: f64) -> DirectMetrics {
        DirectMetrics {
            heat_stress_index: heat,
            soil_dryness: dryness,
            vibration_stress_score: vibration,
            bio_signal_stability: stability,
        }
    }

    fn severity_of(metrics: DirectMetrics) -> Option<Severity> {
        attribute_causes(&metrics).first().map(|cause| cause.severity)
    }

    #[test]
    fn test_trigger_boundaries_are_strict() {
        let calm = (0.0, 0.0, 0.0, 100.0);
        let cases = [
            // (heat, dryness, vibration, stability) -> severity
            ((35.0, calm.1, calm.2, calm.3), None),
            ((35.5, calm.1, calm.2, calm.3), Some(Severity::Medium)),
            ((45.0, calm.1, calm.2, calm.3), Some(Severity::Medium)),
            ((45.5, calm.1, calm.2, calm.3), Some(Severity::High)),
            ((calm.0, 60.0, calm.2, calm.3), None),
            ((calm.0, 60.5, calm.2, calm.3), Some(Severity::Medium)),
            ((calm.0, 80.0, calm.2, calm.3), Some(Severity::Medium)),
            ((calm.0, 80.5, calm.2, calm.3), Some(Severity::High)),
            ((calm.0, calm.1, 30.0, calm.3), None),
            ((calm.0, calm.1, 30.5, calm.3), Some(Severity::Medium)),
            ((calm.0, calm.1, 60.0, calm.3), Some(Severity::Medium)),
            ((calm.0, calm.1, 60.5, calm.3), Some(Severity::High)),
            ((calm.0, calm.1, calm.2, 50.0), None),
            ((calm.0, calm.1, calm.2, 49.5), Some(Severity::Medium)),
            ((calm.0, calm.1, calm.2, 30.0), Some(Severity::Medium)),
            ((calm.0, calm.1, calm.2, 29.5), Some(Severity::High)),
        ];

        for ((heat, dryness, vibration, stability), expected) in cases {
            let metrics = direct(heat, dryness, vibration, stability);
            assert_eq!(
                severity_of(metrics),
                expected,
                "heat {heat}, dryness {dryness}, vibration {vibration}, stability {stability}"
            );
        }

        // Triggers share the same strict comparisons
        let at_thresholds = StressTriggers::evaluate(&direct(35.0, 60.0, 30.0, 50.0));
        assert_eq!(at_thresholds.active_count(), 0);
    }

    #[test]
    fn test_disease_suppressed_by_physical_cause() {
        // heat index 44 + 6 = 50, bio stability 100 - 400 * 0.2 = 20
        let assessment = assess(resolved(44.0, 60.0, 512.0, 0.0, 900.0));
        assert_eq!(
            kinds(&assessment.stress_causes),
            vec![StressCauseKind::HeatStress]
        );
        assert!(assessment.triggers.heat);
        assert!(assessment.triggers.bio);
        assert_eq!(assessment.confidence_score, 50.0);
    }

    #[test]
    fn test_disease_reported_alone() {
        // stability 100 - 200 * 0.2 = 60 -> no trigger; 100 - 300 * 0.2 = 40 -> medium
        let medium = assess(resolved(25.0, 60.0, 800.0, 0.0, 800.0));
        assert_eq!(
            medium.stress_causes,
            vec![StressCause::new(
                StressCauseKind::DiseaseSuspected,
                Severity::Medium
            )]
        );

        let high = assess(resolved(25.0, 60.0, 800.0, 0.0, 1000.0));
        assert_eq!(high.stress_causes[0].severity, Severity::High);
        assert_eq!(high.confidence_score, 25.0);
    }

    #[test]
    fn test_mechanical_severity() {
        let medium = assess(resolved(25.0, 60.0, 800.0, 25.0, 500.0));
        assert_eq!(
            medium.stress_causes,
            vec![StressCause::new(
                StressCauseKind::MechanicalStress,
                Severity::Medium
            )]
        );

        let high = assess(resolved(25.0, 60.0, 800.0, 41.0, 500.0));
        assert_eq!(high.stress_causes[0].severity, Severity::High);
    }

    #[test]
    fn test_all_triggers() {
        let assessment = assess(resolved(40.0, 60.0, 100.0, 50.0, 900.0));
        assert_eq!(
            kinds(&assessment.stress_causes),
            vec![
                StressCauseKind::HeatStress,
                StressCauseKind::WaterStress,
                StressCauseKind::MechanicalStress,
            ]
        );
        assert_eq!(assessment.confidence_score, 100.0);
    }

    #[test]
    fn test_suitability_floor() {
        let assessment = assess(resolved(5.0, 10.0, 512.0, 0.0, 500.0));
        assert_eq!(assessment.suitability_score, 0.0);

        // 100 - 2 * 3 - 5 * 2 = 84
        let mild = assess(resolved(27.0, 55.0, 512.0, 0.0, 500.0));
        assert!((mild.suitability_score - 84.0).abs() < 1e-9);
    }

    #[test]
    fn test_reading_stress_index_uses_defaults() {
        let empty = SensorReading::new(1, Utc::now());
        let mut explicit = SensorReading::new(2, Utc::now());
        explicit.temperature = Some(25.0);
        explicit.humidity = Some(60.0);
        explicit.soil_moisture = Some(512.0);
        explicit.vibration = Some(0.0);
        explicit.bio_signal = Some(500.0);

        assert_eq!(reading_stress_index(&empty), reading_stress_index(&explicit));
        // Only soil contributes: 49.95 * 0.3
        assert!((reading_stress_index(&empty) - 14.985).abs() < 0.001);
    }
}
