//! HTTP API: serves chart-ready view models to the presentation layer.
//!
//! The presentation layer (charts, KPI cards, the severity dropdown) lives
//! elsewhere; these routes hand it everything it renders. Every request
//! recomputes against the snapshot it grabbed, so a concurrent refresh
//! never affects a response in flight.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use scanboard_core::{compute_kpis, compute_views, KpiTotals, Severity, SeverityFilter, ViewModel};

use crate::refresh::{RefreshHandle, RefreshReason};
use crate::store::{FindingStore, StoreStatus};

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The finding store.
    pub store: FindingStore,
    /// Handle for manual refresh requests.
    pub refresher: RefreshHandle,
}

/// Severity filter query: `?severity=high`. Absent or blank means no
/// filter; an unknown value is a 400.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    severity: Option<String>,
}

impl FilterParams {
    fn filter(&self) -> Result<SeverityFilter, StatusCode> {
        match self.severity.as_deref() {
            None | Some("") => Ok(SeverityFilter::All),
            Some(raw) => raw
                .parse::<Severity>()
                .map(SeverityFilter::Only)
                .map_err(|_| StatusCode::BAD_REQUEST),
        }
    }
}

/// A view model together with the snapshot metadata it was computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    /// Chart-ready aggregates
    pub view: ViewModel,
    /// Snapshot metadata (load time, exclusions, staleness)
    pub store: StoreStatus,
}

/// Response body for manual refresh requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// False when the request was coalesced into a pending refresh.
    pub queued: bool,
}

/// Build the dashboard router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/kpis", get(get_kpis))
        .route("/api/status", get(get_status))
        .route("/api/refresh", post(post_refresh))
        .with_state(state)
}

// GET /api/dashboard?severity=high
async fn get_dashboard(
    State(app): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<DashboardView>, StatusCode> {
    let filter = params.filter()?;
    let snapshot = app.store.snapshot();
    let view = compute_views(&snapshot.findings, filter);
    Ok(Json(DashboardView {
        view,
        store: snapshot.status(),
    }))
}

// GET /api/kpis (the three KPI cards; independent of any filter)
async fn get_kpis(State(app): State<AppState>) -> Json<KpiTotals> {
    let snapshot = app.store.snapshot();
    Json(compute_kpis(&snapshot.findings))
}

// GET /api/status
async fn get_status(State(app): State<AppState>) -> Json<StoreStatus> {
    Json(app.store.snapshot().status())
}

// POST /api/refresh
async fn post_refresh(State(app): State<AppState>) -> (StatusCode, Json<RefreshResponse>) {
    let queued = app.refresher.request(RefreshReason::Manual);
    (StatusCode::ACCEPTED, Json(RefreshResponse { queued }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refresh;
    use crate::source::SampleSource;
    use chrono::{TimeZone, Utc};
    use scanboard_core::sample;
    use std::sync::Arc;
    use std::time::Duration;

    fn loaded_store() -> FindingStore {
        let store = FindingStore::empty();
        store.install(sample::raw_findings_at(
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        ));
        store
    }

    fn app_state(store: FindingStore) -> AppState {
        let refresher = refresh::spawn(store.clone(), Arc::new(SampleSource), Duration::ZERO);
        AppState { store, refresher }
    }

    #[tokio::test]
    async fn test_build_router() {
        let router = build_router(app_state(loaded_store()));
        // Router was built without panicking.
        drop(router);
    }

    #[tokio::test]
    async fn test_dashboard_unfiltered() {
        let app = app_state(loaded_store());
        let response = get_dashboard(State(app), Query(FilterParams::default()))
            .await
            .unwrap();

        assert_eq!(response.0.view.kpis.total, 21);
        assert_eq!(response.0.view.rows.len(), 21);
        assert_eq!(response.0.store.findings, 21);
        assert!(!response.0.store.stale);
    }

    #[tokio::test]
    async fn test_dashboard_filtered() {
        let app = app_state(loaded_store());
        let params = FilterParams {
            severity: Some("high".into()),
        };
        let response = get_dashboard(State(app), Query(params)).await.unwrap();

        assert_eq!(response.0.view.rows.len(), 13);
        // KPIs stay global under the filter.
        assert_eq!(response.0.view.kpis.total, 21);
    }

    #[tokio::test]
    async fn test_dashboard_blank_severity_means_unfiltered() {
        let app = app_state(loaded_store());
        let params = FilterParams {
            severity: Some(String::new()),
        };
        let response = get_dashboard(State(app), Query(params)).await.unwrap();
        assert_eq!(response.0.view.rows.len(), 21);
    }

    #[tokio::test]
    async fn test_dashboard_rejects_unknown_severity() {
        let app = app_state(loaded_store());
        let params = FilterParams {
            severity: Some("critical".into()),
        };
        let err = get_dashboard(State(app), Query(params)).await.unwrap_err();
        assert_eq!(err, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dashboard_empty_store() {
        let app = app_state(FindingStore::empty());
        let response = get_dashboard(State(app), Query(FilterParams::default()))
            .await
            .unwrap();

        assert_eq!(response.0.view.kpis, KpiTotals::default());
        assert!(response.0.view.rows.is_empty());
        assert_eq!(response.0.store.loaded_at, None);
    }

    #[tokio::test]
    async fn test_kpis_endpoint() {
        let app = app_state(loaded_store());
        let response = get_kpis(State(app)).await;
        assert_eq!(
            response.0,
            KpiTotals {
                total: 21,
                fails: 20,
                passes: 1
            }
        );
    }

    #[tokio::test]
    async fn test_refresh_endpoint_reports_queueing() {
        let app = app_state(loaded_store());
        let (code, body) = post_refresh(State(app)).await;
        assert_eq!(code, StatusCode::ACCEPTED);
        // First request of the session always finds the slot free.
        assert!(body.0.queued);
    }
}
