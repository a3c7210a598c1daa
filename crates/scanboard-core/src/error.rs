use thiserror::Error;

/// Data-quality errors raised when adapting raw scanner output.
///
/// `status` and `severity` are closed enumerations: a record carrying any
/// other value is malformed input, not a new category.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataQualityError {
    /// Status outside the closed PASS/FAIL set.
    #[error("invalid status {0:?}: expected PASS or FAIL")]
    InvalidStatus(String),

    /// Severity outside the closed low/medium/high set.
    #[error("invalid severity {0:?}: expected low, medium or high")]
    InvalidSeverity(String),
}
