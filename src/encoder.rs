//! Report encoding
//!
//! This module encodes health assessments into report JSON payloads:
//! producer, provenance, data quality, the derived metrics and status bands.

use crate::error::ComputeError;
use crate::status::{MetricStatuses, SensorStatuses};
use crate::types::{
    HealthAssessment, HealthReport, ReportProducer, ReportProvenance, ReportQuality,
    ReportStatus,
};
use crate::{FLUX_VERSION, PRODUCER_NAME};
use uuid::Uuid;

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Report encoder
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Encode an assessment into a report
    pub fn encode(&self, assessment: &HealthAssessment) -> HealthReport {
        let reading = &assessment.reading;

        let producer = ReportProducer {
            name: PRODUCER_NAME.to_string(),
            version: FLUX_VERSION.to_string(),
            instance_id: self.instance_id.clone(),
        };

        let provenance = ReportProvenance {
            plant_id: reading.plant_id.clone(),
            reading_id: reading.id,
            observed_at_utc: reading.timestamp.to_rfc3339(),
            computed_at_utc: assessment.computed_at.to_rfc3339(),
            window_len: assessment.window_len,
        };

        let quality = ReportQuality {
            coverage: assessment.normalized.coverage,
            freshness_sec: (assessment.computed_at - reading.timestamp).num_seconds(),
            defaulted_fields: assessment.normalized.defaulted_fields.clone(),
        };

        let metric_statuses = MetricStatuses::classify(&assessment.metrics);
        let status = ReportStatus {
            overall: metric_statuses.overall(),
            metrics: metric_statuses,
            sensors: SensorStatuses::classify(reading, &assessment.normalized.resolved),
        };

        HealthReport {
            report_version: REPORT_VERSION.to_string(),
            producer,
            provenance,
            quality,
            metrics: assessment.metrics.clone(),
            status,
        }
    }

    /// Encode to JSON string
    pub fn encode_to_json(&self, assessment: &HealthAssessment) -> Result<String, ComputeError> {
        let report = self.encode(assessment);
        serde_json::to_string_pretty(&report).map_err(ComputeError::JsonError)
    }
}
