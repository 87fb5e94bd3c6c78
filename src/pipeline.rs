//! Pipeline orchestration
//!
//! This module provides the public API for Plant Flux.
//! It orchestrates the derivation from a latest reading and its historical
//! window to `DerivedMetrics`, and from raw JSON records to report JSON.

use crate::encoder::ReportEncoder;
use crate::error::ComputeError;
use crate::features::FeatureDeriver;
use crate::normalizer::Normalizer;
use crate::policy::{disease_risk, irrigation_recommendation};
use crate::schema::RecordAdapter;
use crate::store::ReadingStore;
use crate::stress::StressAnalyzer;
use crate::temporal::{recovery_rate, stress_duration};
use crate::types::{DerivedMetrics, HealthAssessment, HealthReport, SensorReading};
use crate::window::{HistoricalWindow, WindowConfig};
use chrono::{DateTime, Utc};

/// Derive metrics for the latest reading.
///
/// Returns `None` if and only if there is no latest reading. `window` must be
/// ascending by timestamp; `now` is the reference instant for stress duration.
pub fn derive_metrics(
    latest: Option<&SensorReading>,
    window: &[SensorReading],
    now: DateTime<Utc>,
) -> Option<DerivedMetrics> {
    latest.map(|reading| assess(reading, window, now).metrics)
}

/// `derive_metrics` against the current wall clock
pub fn derive_metrics_now(
    latest: Option<&SensorReading>,
    window: &[SensorReading],
) -> Option<DerivedMetrics> {
    derive_metrics(latest, window, Utc::now())
}

/// Run every stage for one reading.
///
/// Stages:
/// 1. Normalizer - Resolve defaults and coverage
/// 2. FeatureDeriver - Direct metrics
/// 3. StressAnalyzer - PSI, causes, confidence, suitability
/// 4. Temporal - Stress duration, recovery rate
/// 5. Policy - Disease risk, irrigation
pub fn assess(
    latest: &SensorReading,
    window: &[SensorReading],
    now: DateTime<Utc>,
) -> HealthAssessment {
    let normalized = Normalizer::normalize(latest);
    let resolved = &normalized.resolved;

    let direct = FeatureDeriver::derive(resolved);
    let stress = StressAnalyzer::assess(resolved, &direct);

    let metrics = DerivedMetrics {
        heat_stress_index: direct.heat_stress_index,
        soil_dryness: direct.soil_dryness,
        vibration_stress_score: direct.vibration_stress_score,
        bio_signal_stability: direct.bio_signal_stability,
        plant_stress_index: stress.plant_stress_index,
        stress_causes: stress.stress_causes,
        confidence_score: stress.confidence_score,
        suitability_score: stress.suitability_score,
        stress_duration: stress_duration(latest, window, now),
        recovery_rate: recovery_rate(window),
        disease_risk: disease_risk(direct.bio_signal_stability),
        irrigation_recommendation: irrigation_recommendation(resolved),
    };

    tracing::debug!(
        reading_id = latest.id,
        window_len = window.len(),
        psi = metrics.plant_stress_index,
        causes = metrics.stress_causes.len(),
        "derived plant metrics"
    );

    HealthAssessment {
        reading: latest.clone(),
        normalized,
        metrics,
        window_len: window.len(),
        computed_at: now,
    }
}

/// Convert a JSON array of sensor records into a report for the last record.
///
/// All records form the historical window (oldest first). Returns `Ok(None)`
/// for an empty array.
///
/// # Example
/// ```ignore
/// let report = readings_to_report(records_json)?;
/// ```
pub fn readings_to_report(records_json: String) -> Result<Option<String>, ComputeError> {
    readings_to_report_at(&records_json, Utc::now())
}

/// `readings_to_report` with an explicit reference instant
pub fn readings_to_report_at(
    records_json: &str,
    now: DateTime<Utc>,
) -> Result<Option<String>, ComputeError> {
    let readings = RecordAdapter::parse_array(records_json)?;
    RecordAdapter::ensure_valid(&readings)?;

    let processor = PlantProcessor::new();
    for reading in readings {
        processor.ingest(reading);
    }
    processor.report_at(now)
}

/// Stateful processor holding the latest reading and its window.
///
/// Every method takes `&self`; share it behind an `Arc` to feed it from one
/// thread and read metrics from others.
pub struct PlantProcessor {
    store: ReadingStore,
    encoder: ReportEncoder,
}

impl Default for PlantProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl PlantProcessor {
    /// Create a processor with the default 288-entry window
    pub fn new() -> Self {
        Self::with_window_config(WindowConfig::default())
    }

    /// Create a processor with a specific window capacity
    pub fn with_window_capacity(capacity: usize) -> Self {
        Self::with_window_config(WindowConfig {
            capacity,
            ..WindowConfig::default()
        })
    }

    pub fn with_window_config(config: WindowConfig) -> Self {
        Self {
            store: ReadingStore::new(config),
            encoder: ReportEncoder::new(),
        }
    }

    /// Append a reading; it becomes the latest
    pub fn ingest(&self, reading: SensorReading) -> usize {
        self.store.ingest(reading)
    }

    /// Parse, validate and append one JSON record
    pub fn ingest_json(&self, record_json: &str) -> Result<usize, ComputeError> {
        let reading = RecordAdapter::parse_record(record_json)?;
        reading
            .validate()
            .map_err(|e| ComputeError::InvalidRecord(e.to_string()))?;
        Ok(self.ingest(reading))
    }

    /// Metrics for the latest reading, or `None` before the first ingest
    pub fn metrics(&self, now: DateTime<Utc>) -> Option<DerivedMetrics> {
        self.store.snapshot().metrics(now)
    }

    /// Full assessment for the latest reading
    pub fn assessment(&self, now: DateTime<Utc>) -> Option<HealthAssessment> {
        self.store.snapshot().assess(now)
    }

    /// Encoded report for the latest reading
    pub fn health_report(&self, now: DateTime<Utc>) -> Option<HealthReport> {
        self.assessment(now)
            .map(|assessment| self.encoder.encode(&assessment))
    }

    /// Report JSON for the latest reading
    pub fn report_at(&self, now: DateTime<Utc>) -> Result<Option<String>, ComputeError> {
        self.assessment(now)
            .map(|assessment| self.encoder.encode_to_json(&assessment))
            .transpose()
    }

    /// Report JSON for the latest reading, against the wall clock
    pub fn report(&self) -> Result<Option<String>, ComputeError> {
        self.report_at(Utc::now())
    }

    /// Number of readings in the window
    pub fn window_len(&self) -> usize {
        self.store.snapshot().window.len()
    }

    /// Save window state to JSON
    pub fn save_window(&self) -> Result<String, ComputeError> {
        self.store
            .snapshot()
            .window
            .to_json()
            .map_err(|e| ComputeError::EncodingError(e.to_string()))
    }

    /// Load window state from JSON; its newest reading becomes the latest
    pub fn load_window(&self, json: &str) -> Result<(), ComputeError> {
        let window =
            HistoricalWindow::from_json(json).map_err(|e| ComputeError::ParseError(e.to_string()))?;
        self.store.replace_window(window);
        Ok(())
    }

    /// Record an opaque feed error for the presentation layer
    pub fn report_feed_error(&self, message: impl Into<String>) {
        self.store.report_error(message);
    }

    pub fn last_feed_error(&self) -> Option<String> {
        self.store.last_error()
    }

    /// `Err(IngestError)` while the feed is in a failed state
    pub fn feed_health(&self) -> Result<(), ComputeError> {
        match self.store.last_error() {
            Some(message) => Err(ComputeError::IngestError(message)),
            None => Ok(()),
        }
    }

    /// Clear all readings
    pub fn clear(&self) {
        self.store.clear();
    }
}
