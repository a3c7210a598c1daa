use serde::{Deserialize, Serialize};

use super::finding::Severity;

/// Current severity filter selection.
///
/// Either no filter (all severities) or exactly one severity, mirroring a
/// single-select dropdown. Owned by the UI session; everything downstream
/// treats it as a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityFilter {
    /// No filter: the working set is the full collection.
    #[default]
    All,
    /// Only findings with the given severity.
    Only(Severity),
}

impl SeverityFilter {
    /// Whether a finding of the given severity belongs to the working set.
    #[must_use]
    pub fn matches(self, severity: Severity) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => severity == wanted,
        }
    }
}

impl From<Option<Severity>> for SeverityFilter {
    fn from(selection: Option<Severity>) -> Self {
        selection.map_or(Self::All, Self::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        for severity in Severity::ALL {
            assert!(SeverityFilter::All.matches(severity));
        }
    }

    #[test]
    fn test_only_matches_exactly_one() {
        let filter = SeverityFilter::Only(Severity::High);
        assert!(filter.matches(Severity::High));
        assert!(!filter.matches(Severity::Medium));
        assert!(!filter.matches(Severity::Low));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(SeverityFilter::from(None), SeverityFilter::All);
        assert_eq!(
            SeverityFilter::from(Some(Severity::Low)),
            SeverityFilter::Only(Severity::Low)
        );
    }
}
