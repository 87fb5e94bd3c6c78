//! Core types for the Plant Flux engine
//!
//! This module defines the data structures that flow through each stage of the
//! engine: sensor readings, resolved and normalized readings, and the derived
//! metrics handed to the presentation layer.

use crate::status::{MetricStatuses, SensorStatuses, StatusLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Optimal air temperature (°C)
pub const OPTIMAL_TEMP: f64 = 25.0;
/// Optimal relative humidity (%)
pub const OPTIMAL_HUMIDITY: f64 = 60.0;
/// Full-scale soil moisture ADC value
pub const SOIL_MOISTURE_MAX: f64 = 1023.0;
/// Bio-signal baseline (µV)
pub const BIO_SIGNAL_BASELINE: f64 = 500.0;

/// Substituted when a reading carries no temperature
pub const DEFAULT_TEMPERATURE: f64 = OPTIMAL_TEMP;
/// Substituted when a reading carries no humidity
pub const DEFAULT_HUMIDITY: f64 = OPTIMAL_HUMIDITY;
/// Substituted when a reading carries no soil moisture
pub const DEFAULT_SOIL_MOISTURE: f64 = 512.0;
/// Substituted when a reading carries no vibration
pub const DEFAULT_VIBRATION: f64 = 0.0;
/// Substituted when a reading carries no bio-signal
pub const DEFAULT_BIO_SIGNAL: f64 = BIO_SIGNAL_BASELINE;

/// A single sensor snapshot, one `plant_health_logs` row.
///
/// Every sensor field is optional. Absent values are resolved to documented
/// defaults by the normalizer and are never read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Row identifier
    pub id: i64,
    /// When the reading was recorded (UTC)
    #[serde(rename = "created_at", alias = "timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Plant this reading belongs to; a blank id reads as absent
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub plant_id: Option<String>,
    /// Bio-electrical signal (µV)
    #[serde(default)]
    pub bio_signal: Option<f64>,
    /// Soil moisture (raw ADC, 0-1023)
    #[serde(default)]
    pub soil_moisture: Option<f64>,
    /// Air temperature (°C)
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Relative humidity (%)
    #[serde(default)]
    pub humidity: Option<f64>,
    /// Vibration intensity
    #[serde(default)]
    pub vibration: Option<f64>,
    /// Stress label attached upstream, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_type: Option<String>,
}

impl SensorReading {
    /// Create a reading with no sensor values
    pub fn new(id: i64, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            timestamp,
            plant_id: None,
            bio_signal: None,
            soil_moisture: None,
            temperature: None,
            humidity: None,
            vibration: None,
            stress_type: None,
        }
    }

    /// Whether the reading carries a non-empty stress label
    pub fn has_stress_type(&self) -> bool {
        self.stress_type.as_deref().is_some_and(|s| !s.is_empty())
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// The five sensor channels of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorField {
    Temperature,
    Humidity,
    SoilMoisture,
    Vibration,
    BioSignal,
}

impl SensorField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorField::Temperature => "temperature",
            SensorField::Humidity => "humidity",
            SensorField::SoilMoisture => "soil_moisture",
            SensorField::Vibration => "vibration",
            SensorField::BioSignal => "bio_signal",
        }
    }
}

/// A reading with every sensor field resolved to a concrete value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedReading {
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    pub vibration: f64,
    pub bio_signal: f64,
}

impl Default for ResolvedReading {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            humidity: DEFAULT_HUMIDITY,
            soil_moisture: DEFAULT_SOIL_MOISTURE,
            vibration: DEFAULT_VIBRATION,
            bio_signal: DEFAULT_BIO_SIGNAL,
        }
    }
}

/// Stress components scaled to 0-100 before weighting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressComponents {
    pub temperature: f64,
    pub humidity: f64,
    pub soil: f64,
    pub vibration: f64,
    pub bio: f64,
}

/// Direct metrics computed from a single resolved reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectMetrics {
    /// Temperature plus a humidity contribution (°C-equivalent)
    pub heat_stress_index: f64,
    /// Inverse of soil moisture, 0-100 for in-range inputs
    pub soil_dryness: f64,
    /// Scaled vibration, unbounded above
    pub vibration_stress_score: f64,
    /// Closeness of the bio-signal to baseline, floored at 0
    pub bio_signal_stability: f64,
}

/// Output of the normalizer stage
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedReading {
    /// Values the metrics are computed from
    pub resolved: ResolvedReading,
    /// Fields that were absent and replaced by defaults
    pub defaulted_fields: Vec<SensorField>,
    /// Fraction of sensor fields actually present (0-1)
    pub coverage: f64,
}

/// Severity attached to a stress cause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

/// Diagnosis labels, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressCauseKind {
    #[serde(rename = "Heat Stress")]
    HeatStress,
    #[serde(rename = "Water Stress")]
    WaterStress,
    #[serde(rename = "Mechanical Stress")]
    MechanicalStress,
    #[serde(rename = "Disease Suspected")]
    DiseaseSuspected,
}

impl StressCauseKind {
    pub fn label(&self) -> &'static str {
        match self {
            StressCauseKind::HeatStress => "Heat Stress",
            StressCauseKind::WaterStress => "Water Stress",
            StressCauseKind::MechanicalStress => "Mechanical Stress",
            StressCauseKind::DiseaseSuspected => "Disease Suspected",
        }
    }

    /// Display hue used by monitoring clients
    pub fn color(&self) -> &'static str {
        match self {
            StressCauseKind::HeatStress => "hsl(0, 84%, 60%)",
            StressCauseKind::WaterStress => "hsl(38, 92%, 50%)",
            StressCauseKind::MechanicalStress => "hsl(259, 82%, 65%)",
            StressCauseKind::DiseaseSuspected => "hsl(300, 70%, 50%)",
        }
    }
}

impl fmt::Display for StressCauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A labeled, severity-tagged contributor to the stress index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressCause {
    #[serde(rename = "type")]
    pub kind: StressCauseKind,
    pub severity: Severity,
    pub color: String,
}

impl StressCause {
    pub fn new(kind: StressCauseKind, severity: Severity) -> Self {
        Self {
            kind,
            severity,
            color: kind.color().to_string(),
        }
    }
}

/// Watering urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationStatus {
    Optimal,
    WaterSoon,
    Immediate,
}

impl IrrigationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationStatus::Optimal => "optimal",
            IrrigationStatus::WaterSoon => "water_soon",
            IrrigationStatus::Immediate => "immediate",
        }
    }
}

/// Elapsed stress time, rendered as `{hours}h {minutes}m`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct StressDuration {
    pub hours: i64,
    pub minutes: i64,
}

impl StressDuration {
    /// Split a number of whole minutes into hours and remaining minutes.
    /// Negative spans saturate to zero.
    pub fn from_minutes(total_minutes: i64) -> Self {
        let total = total_minutes.max(0);
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }
}

impl fmt::Display for StressDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

impl From<StressDuration> for String {
    fn from(d: StressDuration) -> Self {
        d.to_string()
    }
}

impl TryFrom<String> for StressDuration {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let (h, m) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| format!("invalid duration: {s}"))?;
        let hours = h
            .strip_suffix('h')
            .and_then(|v| v.parse::<i64>().ok())
            .ok_or_else(|| format!("invalid hours in duration: {s}"))?;
        let minutes = m
            .strip_suffix('m')
            .and_then(|v| v.parse::<i64>().ok())
            .ok_or_else(|| format!("invalid minutes in duration: {s}"))?;
        Ok(Self { hours, minutes })
    }
}

/// Composite health assessment, recomputed on every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub heat_stress_index: f64,
    pub soil_dryness: f64,
    pub vibration_stress_score: f64,
    pub bio_signal_stability: f64,
    /// Plant Stress Index, 0 (none) to 100 (severe)
    pub plant_stress_index: f64,
    /// Diagnoses in evaluation order
    pub stress_causes: Vec<StressCause>,
    pub confidence_score: f64,
    pub suitability_score: f64,
    pub stress_duration: StressDuration,
    /// PSI change per hour; positive means recovering
    pub recovery_rate: i64,
    pub disease_risk: f64,
    pub irrigation_recommendation: IrrigationStatus,
}

/// Metrics together with the context they were derived from
#[derive(Debug, Clone, PartialEq)]
pub struct HealthAssessment {
    /// Reading the metrics describe
    pub reading: SensorReading,
    pub normalized: NormalizedReading,
    pub metrics: DerivedMetrics,
    /// Number of historical readings consulted
    pub window_len: usize,
    /// Reference instant used for time-based metrics
    pub computed_at: DateTime<Utc>,
}

// ============================================================================
// Report Output Types
// ============================================================================

/// Health report payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub provenance: ReportProvenance,
    pub quality: ReportQuality,
    pub metrics: DerivedMetrics,
    pub status: ReportStatus,
}

/// Report producer information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Report provenance information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProvenance {
    pub plant_id: Option<String>,
    pub reading_id: i64,
    pub observed_at_utc: String,
    pub computed_at_utc: String,
    /// Historical readings consulted
    pub window_len: usize,
}

/// Report data quality
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportQuality {
    /// Fraction of sensor fields present (0-1)
    pub coverage: f64,
    /// Seconds between observation and computation
    pub freshness_sec: i64,
    /// Sensor fields replaced by defaults
    pub defaulted_fields: Vec<SensorField>,
}

/// Status bands attached to a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStatus {
    pub overall: StatusLevel,
    pub metrics: MetricStatuses,
    pub sensors: SensorStatuses,
}
