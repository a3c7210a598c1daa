//! Refresh scheduling: one worker, coalesced triggers, periodic ticks.
//!
//! Refreshes are serialized behind a single worker task that owns the
//! source. Triggers flow through a bounded channel of capacity 1: when a
//! refresh is already pending, a new trigger is coalesced instead of
//! queued, so a burst of button presses and timer ticks costs at most one
//! extra fetch. Each refresh either installs a new snapshot or marks the
//! store stale; it never leaves partial state behind.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::source::FindingSource;
use crate::store::FindingStore;

/// What prompted a refresh. Logged, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshReason {
    /// Initial load at startup.
    Startup,
    /// Manual refresh request.
    Manual,
    /// Periodic timer tick.
    Scheduled,
}

impl std::fmt::Display for RefreshReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Startup => write!(f, "startup"),
            Self::Manual => write!(f, "manual"),
            Self::Scheduled => write!(f, "scheduled"),
        }
    }
}

/// Handle for requesting refreshes.
#[derive(Clone)]
pub struct RefreshHandle {
    tx: mpsc::Sender<RefreshReason>,
}

impl RefreshHandle {
    /// Request a refresh.
    ///
    /// Returns false when a refresh is already pending and this request
    /// was coalesced into it.
    pub fn request(&self, reason: RefreshReason) -> bool {
        match self.tx.try_send(reason) {
            Ok(()) => true,
            Err(_) => {
                debug!(reason = %reason, "refresh already pending, coalescing");
                false
            }
        }
    }
}

/// Spawn the refresh worker and its periodic timer.
///
/// The worker drains one trigger at a time; the timer feeds it a
/// `Scheduled` trigger every `interval`. A zero interval disables the
/// timer, leaving only manual triggers.
pub fn spawn(
    store: FindingStore,
    source: Arc<dyn FindingSource>,
    interval: Duration,
) -> RefreshHandle {
    let (tx, mut rx) = mpsc::channel(1);
    let handle = RefreshHandle { tx };

    tokio::spawn(async move {
        while let Some(reason) = rx.recv().await {
            refresh_once(&store, source.as_ref(), reason).await;
        }
    });

    if !interval.is_zero() {
        let timer = handle.clone();
        tokio::spawn(async move {
            let mut ticks = tokio::time::interval(interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately; the startup load is a
            // separate trigger, so skip it.
            ticks.tick().await;
            loop {
                ticks.tick().await;
                timer.request(RefreshReason::Scheduled);
            }
        });
    }

    handle
}

/// Run a single refresh to completion.
///
/// On success the new batch is validated and swapped in atomically; on
/// failure the store keeps its previous findings, marked stale.
pub async fn refresh_once(store: &FindingStore, source: &dyn FindingSource, reason: RefreshReason) {
    info!(reason = %reason, "refreshing findings");
    match source.fetch().await {
        Ok(raw) => {
            store.install(raw);
        }
        Err(err) => store.mark_stale(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use scanboard_core::{sample, RawFinding};

    struct FixedSource;

    #[async_trait]
    impl FindingSource for FixedSource {
        async fn fetch(&self) -> crate::Result<Vec<RawFinding>> {
            Ok(sample::raw_findings_at(
                Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            ))
        }
    }

    struct FailingSource;

    #[async_trait]
    impl FindingSource for FailingSource {
        async fn fetch(&self) -> crate::Result<Vec<RawFinding>> {
            Err(crate::SrvError::Source("connection refused".into()))
        }
    }

    #[test]
    fn test_requests_coalesce_when_pending() {
        // A handle whose channel nobody drains: the first request fills
        // the single slot, later ones coalesce.
        let (tx, _rx) = mpsc::channel(1);
        let handle = RefreshHandle { tx };

        assert!(handle.request(RefreshReason::Manual));
        assert!(!handle.request(RefreshReason::Manual));
        assert!(!handle.request(RefreshReason::Scheduled));
    }

    #[tokio::test]
    async fn test_refresh_once_installs() {
        let store = FindingStore::empty();
        refresh_once(&store, &FixedSource, RefreshReason::Startup).await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.findings.len(), 21);
        assert!(!snapshot.stale);
    }

    #[tokio::test]
    async fn test_refresh_once_failure_keeps_previous() {
        let store = FindingStore::empty();
        refresh_once(&store, &FixedSource, RefreshReason::Startup).await;
        refresh_once(&store, &FailingSource, RefreshReason::Scheduled).await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.findings.len(), 21);
        assert!(snapshot.stale);
        assert!(snapshot.last_error.is_some());
    }

    #[tokio::test]
    async fn test_spawned_worker_processes_requests() {
        let store = FindingStore::empty();
        let handle = spawn(store.clone(), Arc::new(FixedSource), Duration::ZERO);

        assert!(handle.request(RefreshReason::Manual));

        // Give the worker a moment to drain the trigger.
        for _ in 0..50 {
            if !store.snapshot().findings.is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(store.snapshot().findings.len(), 21);
    }
}
