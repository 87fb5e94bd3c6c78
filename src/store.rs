//! Snapshot-isolated reading store
//!
//! The in-process half of the ingestion adapter. New readings are appended
//! copy-on-write: a writer clones the current snapshot only if a reader still
//! holds it, mutates the copy, and publishes it. Readers take an `Arc` to an
//! immutable snapshot and never observe a window mid-eviction.

use crate::pipeline::assess;
use crate::types::{DerivedMetrics, HealthAssessment, SensorReading};
use crate::window::{HistoricalWindow, WindowConfig};
use chrono::{DateTime, Utc};
use std::sync::{Arc, PoisonError, RwLock};

/// Immutable view of the latest reading and its window
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub latest: Option<SensorReading>,
    pub window: HistoricalWindow,
}

impl StoreSnapshot {
    /// Assessment of the latest reading; `None` before the first ingest.
    ///
    /// The window is cut to the retention horizon before the earlier of
    /// `now` and the latest reading's timestamp.
    pub fn assess(&self, now: DateTime<Utc>) -> Option<HealthAssessment> {
        let latest = self.latest.as_ref()?;
        let anchor = latest.timestamp.min(now);
        Some(assess(latest, &self.window.retained(anchor), now))
    }

    pub fn metrics(&self, now: DateTime<Utc>) -> Option<DerivedMetrics> {
        self.assess(now).map(|a| a.metrics)
    }
}

#[derive(Debug, Default)]
struct StoreState {
    snapshot: Arc<StoreSnapshot>,
    last_error: Option<String>,
}

/// Shared store of the latest reading and the bounded window
#[derive(Debug, Default)]
pub struct ReadingStore {
    state: RwLock<StoreState>,
}

impl ReadingStore {
    pub fn new(config: WindowConfig) -> Self {
        Self::from_window(HistoricalWindow::new(config))
    }

    /// Seed the store with a previously persisted window
    pub fn from_window(window: HistoricalWindow) -> Self {
        let snapshot = StoreSnapshot {
            latest: window.latest().cloned(),
            window,
        };
        Self {
            state: RwLock::new(StoreState {
                snapshot: Arc::new(snapshot),
                last_error: None,
            }),
        }
    }

    /// Append a reading and make it the latest.
    ///
    /// Returns the number of readings evicted from the window.
    pub fn ingest(&self, reading: SensorReading) -> usize {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let snapshot = Arc::make_mut(&mut state.snapshot);
        snapshot.latest = Some(reading.clone());
        let evicted = snapshot.window.push(reading);
        let len = snapshot.window.len();
        state.last_error = None;

        tracing::debug!(len, evicted, "reading ingested");
        evicted
    }

    /// Current snapshot; cheap, and unaffected by later ingests
    pub fn snapshot(&self) -> Arc<StoreSnapshot> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&state.snapshot)
    }

    /// Replace the readings, keeping the newest as latest.
    ///
    /// The store's own window configuration stays in force: the incoming
    /// readings are replayed under it, so capacity still holds.
    pub fn replace_window(&self, window: HistoricalWindow) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let config = *state.snapshot.window.config();
        let window = window.reconfigured(config);
        tracing::debug!(len = window.len(), "window replaced");
        state.snapshot = Arc::new(StoreSnapshot {
            latest: window.latest().cloned(),
            window,
        });
    }

    /// Drop every reading, keeping the window configuration
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let config = *state.snapshot.window.config();
        state.snapshot = Arc::new(StoreSnapshot {
            latest: None,
            window: HistoricalWindow::new(config),
        });
    }

    /// Record a transport failure from the feed, as an opaque message
    pub fn report_error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "reading feed error");
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.last_error = Some(message);
    }

    /// Last feed error, cleared by the next successful ingest
    pub fn last_error(&self) -> Option<String> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.last_error.clone()
    }
}
