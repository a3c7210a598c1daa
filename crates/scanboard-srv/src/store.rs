//! The finding store: one immutable snapshot, swapped atomically.
//!
//! Readers grab an `Arc` to the current snapshot and compute against it;
//! a refresh builds a fresh snapshot and swaps the reference. An in-flight
//! computation keeps the collection it started with, so no locking exists
//! beyond the pointer swap.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use scanboard_core::{parse_findings, Finding, RawFinding};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Point-in-time state of the store. Immutable once built.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The session's findings, in source order.
    pub findings: Vec<Finding>,
    /// Records excluded by data-quality validation on the last load.
    pub excluded: usize,
    /// When the findings were last loaded successfully. `None` until the
    /// first successful load.
    pub loaded_at: Option<DateTime<Utc>>,
    /// True when the most recent refresh attempt failed and this data is
    /// retained from an earlier load.
    pub stale: bool,
    /// Failure message from the most recent refresh, if it failed.
    pub last_error: Option<String>,
}

impl Snapshot {
    /// Metadata block served alongside view models.
    #[must_use]
    pub fn status(&self) -> StoreStatus {
        StoreStatus {
            findings: self.findings.len(),
            excluded: self.excluded,
            loaded_at: self.loaded_at,
            stale: self.stale,
            last_error: self.last_error.clone(),
        }
    }
}

/// Snapshot metadata for the status endpoint and dashboard payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStatus {
    /// Findings currently held
    pub findings: usize,
    /// Records excluded by validation on the last load
    pub excluded: usize,
    /// When the last successful load happened
    pub loaded_at: Option<DateTime<Utc>>,
    /// Whether the data is retained from before a failed refresh
    pub stale: bool,
    /// The last refresh failure, if any
    pub last_error: Option<String>,
}

/// Shared handle to the current snapshot.
#[derive(Clone)]
pub struct FindingStore {
    inner: Arc<RwLock<Arc<Snapshot>>>,
}

impl FindingStore {
    /// Create an empty store; the startup load fills it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(Snapshot {
                findings: Vec::new(),
                excluded: 0,
                loaded_at: None,
                stale: false,
                last_error: None,
            }))),
        }
    }

    /// Current snapshot. Cheap: clones the `Arc`, not the data.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.inner.read().clone()
    }

    /// Validate a raw batch and atomically install it as the new snapshot.
    ///
    /// Returns the number of records excluded by validation.
    pub fn install(&self, raw: Vec<RawFinding>) -> usize {
        let (findings, excluded) = parse_findings(raw);
        if excluded > 0 {
            warn!(excluded, "excluded malformed records from batch");
        }

        let snapshot = Arc::new(Snapshot {
            findings,
            excluded,
            loaded_at: Some(Utc::now()),
            stale: false,
            last_error: None,
        });
        info!(
            findings = snapshot.findings.len(),
            excluded, "installed findings snapshot"
        );

        *self.inner.write() = snapshot;
        excluded
    }

    /// Record a failed refresh: keep the current findings, mark them stale.
    pub fn mark_stale(&self, error: &crate::SrvError) {
        warn!(error = %error, "refresh failed, retaining previous findings");

        let mut guard = self.inner.write();
        let previous = guard.as_ref();
        *guard = Arc::new(Snapshot {
            findings: previous.findings.clone(),
            excluded: previous.excluded,
            loaded_at: previous.loaded_at,
            stale: true,
            last_error: Some(error.to_string()),
        });
    }
}
