//! Plant Flux - Deterministic compute engine for plant health metrics
//!
//! Plant Flux turns periodic plant-sensor readings (temperature, humidity, soil
//! moisture, vibration, bio-electrical signal) into interpretable health
//! metrics through a pure pipeline: normalization → direct metrics → composite
//! stress index and cause attribution → time-windowed analytics → policy.
//!
//! ## Modules
//!
//! - **Engine**: `derive_metrics` maps a latest reading and its 24h window to
//!   `DerivedMetrics`
//! - **Ingestion**: `PlantProcessor` / `ReadingStore` keep the bounded window
//!   and hand out immutable snapshots
//! - **Reports**: `ReportEncoder` wraps metrics with provenance, quality and
//!   status bands

pub mod config;
pub mod encoder;
pub mod error;
pub mod features;
pub mod normalizer;
pub mod pipeline;
pub mod policy;
pub mod schema;
pub mod status;
pub mod store;
pub mod stress;
pub mod temporal;
pub mod types;
pub mod window;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use config::EngineConfig;
pub use error::ComputeError;
pub use pipeline::{
    assess, derive_metrics, derive_metrics_now, readings_to_report, PlantProcessor,
};
pub use store::{ReadingStore, StoreSnapshot};
pub use types::{DerivedMetrics, IrrigationStatus, SensorReading, StressCause};
pub use window::{HistoricalWindow, WindowConfig};

// Schema exports
pub use schema::{RecordAdapter, SCHEMA_VERSION};

/// Plant Flux version embedded in all reports
pub const FLUX_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for reports
pub const PRODUCER_NAME: &str = "plant-flux";
