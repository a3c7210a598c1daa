use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

use crate::error::DataQualityError;

/// Outcome of one security check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Check passed
    Pass,
    /// Check failed
    Fail,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

impl FromStr for Status {
    type Err = DataQualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Self::Pass),
            "FAIL" => Ok(Self::Fail),
            other => Err(DataQualityError::InvalidStatus(other.to_string())),
        }
    }
}

/// Severity bucket of a finding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Low severity
    Low,
    /// Medium severity
    Medium,
    /// High severity
    High,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Chart color for this severity, shared by every rendering so the
    /// bar, pie, scatter and heatmap views agree.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#32CD32",
            Self::Medium => "#FFA500",
            Self::High => "#FF4C4C",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl FromStr for Severity {
    type Err = DataQualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(DataQualityError::InvalidSeverity(other.to_string())),
        }
    }
}

/// One evaluated security-check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// PASS/FAIL outcome
    pub status: Status,
    /// Severity bucket
    pub severity: Severity,
    /// Service or category label the check belongs to
    pub service: String,
    /// Identifier of the specific check
    pub check_id: String,
    /// When the check was evaluated
    pub timestamp: DateTime<Utc>,
}

/// Wire form of a finding as supplied by an external scanner.
///
/// `status` and `severity` arrive as free strings; they are validated
/// against their closed enumerations during adaptation so one malformed
/// record cannot fail a whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFinding {
    /// Claimed check outcome
    pub status: String,
    /// Claimed severity
    pub severity: String,
    /// Service or category label
    pub service: String,
    /// Check identifier
    pub check_id: String,
    /// When the check was evaluated
    pub timestamp: DateTime<Utc>,
}

impl RawFinding {
    /// Validate and convert into a typed [`Finding`].
    pub fn into_finding(self) -> Result<Finding, DataQualityError> {
        Ok(Finding {
            status: self.status.parse()?,
            severity: self.severity.parse()?,
            service: self.service,
            check_id: self.check_id,
            timestamp: self.timestamp,
        })
    }
}

impl From<Finding> for RawFinding {
    fn from(finding: Finding) -> Self {
        Self {
            status: finding.status.to_string(),
            severity: finding.severity.to_string(),
            service: finding.service,
            check_id: finding.check_id,
            timestamp: finding.timestamp,
        }
    }
}

/// Adapt a batch of raw records into typed findings.
///
/// Malformed records are excluded and counted rather than failing the
/// batch; valid records keep their input order.
#[must_use]
pub fn parse_findings(raw: Vec<RawFinding>) -> (Vec<Finding>, usize) {
    let mut findings = Vec::with_capacity(raw.len());
    let mut excluded = 0;

    for record in raw {
        match record.into_finding() {
            Ok(finding) => findings.push(finding),
            Err(err) => {
                warn!(error = %err, "excluding malformed finding");
                excluded += 1;
            }
        }
    }

    (findings, excluded)
}
