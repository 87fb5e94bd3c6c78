//! plant.health_log.v1 record schema
//!
//! This module defines parsing and validation of sensor records as they
//! arrive from the ingestion feed, either batched or one per line.

mod adapter;
mod record;

pub use adapter::*;
pub use record::*;
