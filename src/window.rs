//! Historical window management
//!
//! This module keeps the bounded rolling window of past readings that the
//! time-windowed analytics read from. The window holds at most one day of
//! five-minute samples; overflow evicts the oldest arrival first.
//!
//! Eviction is by arrival order only. The retention horizon is applied when
//! the window is read (`retained`), so a reading with a skewed clock cannot
//! flush the stored history.

use crate::error::ComputeError;
use crate::types::SensorReading;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::VecDeque;

/// Default window capacity: 24 hours at a 5 minute cadence
pub const DEFAULT_WINDOW_CAPACITY: usize = 288;

/// Default retention horizon in hours
pub const DEFAULT_RETENTION_HOURS: i64 = 24;

/// Expected spacing between consecutive samples, in minutes
pub const SAMPLE_CADENCE_MINUTES: f64 = 5.0;

/// Sizing and retention of a historical window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Maximum number of readings kept
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Readings older than this many hours before the reference instant are
    /// left out of analytics; `None` keeps everything
    #[serde(default = "default_retention")]
    pub retention_hours: Option<i64>,
}

fn default_capacity() -> usize {
    DEFAULT_WINDOW_CAPACITY
}

fn default_retention() -> Option<i64> {
    Some(DEFAULT_RETENTION_HOURS)
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_WINDOW_CAPACITY,
            retention_hours: Some(DEFAULT_RETENTION_HOURS),
        }
    }
}

impl WindowConfig {
    /// Build a validated configuration
    pub fn new(capacity: usize, retention_hours: Option<i64>) -> Result<Self, ComputeError> {
        let config = Self {
            capacity,
            retention_hours,
        };
        config.validate()?;
        Ok(config)
    }

    /// Capacity must be at least one; retention, when set, a positive
    /// number of hours chrono can represent
    pub fn validate(&self) -> Result<(), ComputeError> {
        if self.capacity == 0 {
            return Err(ComputeError::InvalidConfig(
                "window capacity must be at least 1".to_string(),
            ));
        }

        if let Some(hours) = self.retention_hours {
            if hours <= 0 || TimeDelta::try_hours(hours).is_none() {
                return Err(ComputeError::InvalidConfig(format!(
                    "retention_hours must be a positive number of hours, got {}",
                    hours
                )));
            }
        }

        Ok(())
    }

    /// Retention horizon; `None` when disabled or out of range
    pub fn retention(&self) -> Option<TimeDelta> {
        self.retention_hours
            .filter(|hours| *hours > 0)
            .and_then(TimeDelta::try_hours)
    }
}

/// Bounded FIFO of readings in arrival order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SavedWindow")]
pub struct HistoricalWindow {
    readings: VecDeque<SensorReading>,
    config: WindowConfig,
}

/// Persisted form, checked before it becomes a window
#[derive(Deserialize)]
struct SavedWindow {
    readings: VecDeque<SensorReading>,
    #[serde(default)]
    config: WindowConfig,
}

impl TryFrom<SavedWindow> for HistoricalWindow {
    type Error = ComputeError;

    fn try_from(saved: SavedWindow) -> Result<Self, Self::Error> {
        saved.config.validate()?;
        if saved.readings.len() > saved.config.capacity {
            return Err(ComputeError::InvalidConfig(format!(
                "saved window holds {} readings but its capacity is {}",
                saved.readings.len(),
                saved.config.capacity
            )));
        }

        let mut readings = saved.readings;
        readings.make_contiguous();
        Ok(Self {
            readings,
            config: saved.config,
        })
    }
}

impl Default for HistoricalWindow {
    fn default() -> Self {
        Self::new(WindowConfig::default())
    }
}

impl HistoricalWindow {
    /// Create an empty window
    pub fn new(config: WindowConfig) -> Self {
        Self {
            readings: VecDeque::with_capacity(config.capacity),
            config,
        }
    }

    /// Create an empty window holding at most `capacity` readings
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(WindowConfig {
            capacity,
            ..WindowConfig::default()
        })
    }

    /// The same readings under another configuration.
    ///
    /// Replays them in arrival order, so only the newest `config.capacity`
    /// survive.
    pub fn reconfigured(self, config: WindowConfig) -> Self {
        let mut window = Self::new(config);
        for reading in self.readings {
            window.push(reading);
        }
        window
    }

    /// Append a reading and evict the oldest arrivals beyond capacity.
    ///
    /// The reading just pushed is never evicted. Returns the number of
    /// readings evicted.
    pub fn push(&mut self, reading: SensorReading) -> usize {
        self.readings.push_back(reading);

        let capacity = self.config.capacity.max(1);
        let mut evicted = 0;
        while self.readings.len() > capacity {
            self.readings.pop_front();
            evicted += 1;
        }

        self.readings.make_contiguous();

        if evicted > 0 {
            tracing::trace!(evicted, len = self.readings.len(), "window evicted readings");
        }
        evicted
    }

    /// Readings as one slice in arrival order.
    ///
    /// Borrows when the ring is contiguous, which `push` maintains.
    pub fn contiguous(&self) -> Cow<'_, [SensorReading]> {
        match self.readings.as_slices() {
            (front, []) => Cow::Borrowed(front),
            _ => Cow::Owned(self.to_vec()),
        }
    }

    /// Readings no older than the retention horizon before `anchor`, in
    /// arrival order. The window itself is left untouched.
    pub fn retained(&self, anchor: DateTime<Utc>) -> Cow<'_, [SensorReading]> {
        let all = self.contiguous();
        let Some(cutoff) = self
            .config
            .retention()
            .and_then(|retention| anchor.checked_sub_signed(retention))
        else {
            return all;
        };

        if all.iter().all(|r| r.timestamp >= cutoff) {
            return all;
        }
        Cow::Owned(
            all.iter()
                .filter(|r| r.timestamp >= cutoff)
                .cloned()
                .collect(),
        )
    }

    /// Copy the readings out, oldest arrival first
    pub fn to_vec(&self) -> Vec<SensorReading> {
        self.readings.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SensorReading> {
        self.readings.iter()
    }

    pub fn latest(&self) -> Option<&SensorReading> {
        self.readings.back()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Clear all readings
    pub fn clear(&mut self) {
        self.readings.clear();
    }

    /// Load window from JSON; rejects invalid configs and overfull windows
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize window to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
