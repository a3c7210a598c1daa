//! View aggregation: findings + severity filter -> chart-ready data.
//!
//! Everything here is a pure transform over its inputs. There is no hidden
//! state and no caching; a trigger (filter change, manual refresh, timer
//! tick) simply calls [`compute_views`] again against the current snapshot.

use std::collections::BTreeMap;

use crate::types::{
    Finding, KpiTotals, ServiceSeverityCount, Severity, SeverityCount, SeverityFilter, Status,
    StatusSeverityCount, TimelinePoint, ViewModel,
};

/// Select the working set for a filter, preserving store order.
#[must_use]
pub fn filter_findings(findings: &[Finding], filter: SeverityFilter) -> Vec<Finding> {
    findings
        .iter()
        .filter(|finding| filter.matches(finding.severity))
        .cloned()
        .collect()
}

/// Compute the KPI counters over the full, unfiltered collection.
#[must_use]
pub fn compute_kpis(findings: &[Finding]) -> KpiTotals {
    KpiTotals {
        total: findings.len(),
        fails: findings
            .iter()
            .filter(|finding| finding.status == Status::Fail)
            .count(),
        passes: findings
            .iter()
            .filter(|finding| finding.status == Status::Pass)
            .count(),
    }
}

/// Derive every chart input from the findings and the current filter.
///
/// KPI totals are computed over the unfiltered collection; the grouped
/// counts and timeline over the working set the filter selects. Grouped
/// counts accumulate in ordered maps, so identical inputs always produce
/// an identical `ViewModel`.
#[must_use]
pub fn compute_views(findings: &[Finding], filter: SeverityFilter) -> ViewModel {
    let kpis = compute_kpis(findings);
    let rows = filter_findings(findings, filter);

    let mut by_status: BTreeMap<(Status, Severity), usize> = BTreeMap::new();
    let mut by_severity: BTreeMap<Severity, usize> = BTreeMap::new();
    let mut by_service: BTreeMap<(String, Severity), usize> = BTreeMap::new();

    for finding in &rows {
        *by_status.entry((finding.status, finding.severity)).or_default() += 1;
        *by_severity.entry(finding.severity).or_default() += 1;
        *by_service
            .entry((finding.service.clone(), finding.severity))
            .or_default() += 1;
    }

    let status_by_severity = by_status
        .into_iter()
        .map(|((status, severity), count)| StatusSeverityCount {
            status,
            severity,
            count,
        })
        .collect();

    let severity_shares = by_severity
        .into_iter()
        .map(|(severity, count)| SeverityCount { severity, count })
        .collect();

    let service_by_severity = by_service
        .into_iter()
        .map(|((service, severity), count)| ServiceSeverityCount {
            service,
            severity,
            count,
        })
        .collect();

    let timeline = rows
        .iter()
        .map(|finding| TimelinePoint {
            service: finding.service.clone(),
            severity: finding.severity,
            timestamp: finding.timestamp,
        })
        .collect();

    ViewModel {
        kpis,
        status_by_severity,
        severity_shares,
        service_by_severity,
        rows,
        timeline,
    }
}
