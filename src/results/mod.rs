pub mod index;
pub mod jest;

pub use index::ResultIndex;
pub use jest::parse_jest_report;

use crate::core::RunStatus;

/// Outcome of a single runner assertion, ready to be joined onto an
/// extracted case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub status: RunStatus,
    /// First line of the first failure message, when the case failed
    pub failure: Option<String>,
}
