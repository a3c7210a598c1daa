use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::finding::{Finding, Severity, Status};

/// The three dashboard summary counters.
///
/// Always computed over the unfiltered collection: the cards show overall
/// posture even while the charts are filtered down to one severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiTotals {
    /// Total checks evaluated
    pub total: usize,
    /// Checks with status FAIL
    pub fails: usize,
    /// Checks with status PASS
    pub passes: usize,
}

/// Working-set count for one (status, severity) pair, for grouped bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSeverityCount {
    /// Check outcome
    pub status: Status,
    /// Severity bucket
    pub severity: Severity,
    /// Findings in the working set with this pair
    pub count: usize,
}

/// Working-set count for one severity, for the pie/donut shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCount {
    /// Severity bucket
    pub severity: Severity,
    /// Findings in the working set with this severity
    pub count: usize,
}

/// Working-set count for one (service, severity) pair.
///
/// Feeds both the stacked-bar and heatmap renderings. Pairs with zero
/// occurrences are omitted; a renderer that wants a dense grid fills the
/// implied zero cells itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSeverityCount {
    /// Service label
    pub service: String,
    /// Severity bucket
    pub severity: Severity,
    /// Findings in the working set with this pair
    pub count: usize,
}

/// One scatter-timeline point: a working-set row projected to the three
/// fields the timeline plots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Service label (the y axis)
    pub service: String,
    /// Severity (the color)
    pub severity: Severity,
    /// Evaluation time (the x axis)
    pub timestamp: DateTime<Utc>,
}

/// Chart-ready data derived from the findings and the current filter.
///
/// Fully recomputed on every trigger, never patched incrementally. Grouped
/// counts are sparse and deterministically ordered; `rows` and `timeline`
/// keep the store's original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    /// Summary counters over the unfiltered collection
    pub kpis: KpiTotals,
    /// Grouped-bar input: counts by (status, severity)
    pub status_by_severity: Vec<StatusSeverityCount>,
    /// Pie input: counts by severity
    pub severity_shares: Vec<SeverityCount>,
    /// Stacked-bar / heatmap input: counts by (service, severity)
    pub service_by_severity: Vec<ServiceSeverityCount>,
    /// The working set itself, in store order
    pub rows: Vec<Finding>,
    /// Scatter input: the working set projected to plot fields
    pub timeline: Vec<TimelinePoint>,
}
