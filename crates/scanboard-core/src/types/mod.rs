//! Strongly-typed dashboard data model.

mod filter;
mod finding;
mod view;

pub use filter::SeverityFilter;
pub use finding::{parse_findings, Finding, RawFinding, Severity, Status};
pub use view::{
    KpiTotals, ServiceSeverityCount, SeverityCount, StatusSeverityCount, TimelinePoint, ViewModel,
};
