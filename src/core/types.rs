//! Common type definitions used across the codebase

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Kind of test a case was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestKind {
    Unit,
    E2e,
}

impl TestKind {
    /// Prefix used when assigning case IDs
    pub fn id_prefix(&self) -> &'static str {
        match self {
            TestKind::Unit => "UNIT",
            TestKind::E2e => "E2E",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TestKind::Unit => "unit",
            TestKind::E2e => "e2e",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Heuristic severity label assigned to a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Criticality {
    Low,
    Medium,
    High,
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Criticality::Low => "Low",
            Criticality::Medium => "Medium",
            Criticality::High => "High",
        };
        f.write_str(s)
    }
}

/// Execution status of a case, joined from a runner result file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunStatus {
    NotRun,
    Passed,
    Failed,
    Skipped,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunStatus::NotRun => "Not Run",
            RunStatus::Passed => "Passed",
            RunStatus::Failed => "Failed",
            RunStatus::Skipped => "Skipped",
        };
        f.write_str(s)
    }
}

/// A single extracted test case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    /// Assigned after extraction, e.g. UNIT-003
    pub id: String,
    pub kind: TestKind,
    /// Source file the case was extracted from, relative to the scan root
    pub file: PathBuf,
    /// 1-based line of the matched title
    pub line: usize,
    /// Functional grouping: joined describe titles, or `E2E: <basename>`
    pub item: String,
    pub title: String,
    pub criticality: Criticality,
    pub status: RunStatus,
    /// Actual outcome text once joined against runner results
    pub result: String,
}

/// Summary statistics over an inventory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total: usize,
    pub unit: usize,
    pub e2e: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub not_run: usize,
    /// Pass rate over executed (passed + failed) cases, 0.0 when none ran
    pub pass_rate: f64,
}

/// The full generated inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub generated_at: DateTime<Utc>,
    pub root: PathBuf,
    pub cases: Vec<TestCase>,
    pub summary: InventorySummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_id_prefixes() {
        assert_eq!(TestKind::Unit.id_prefix(), "UNIT");
        assert_eq!(TestKind::E2e.id_prefix(), "E2E");
    }

    #[test]
    fn criticality_ordering() {
        assert!(Criticality::Low < Criticality::Medium);
        assert!(Criticality::Medium < Criticality::High);
    }

    #[test]
    fn status_display() {
        assert_eq!(RunStatus::NotRun.to_string(), "Not Run");
        assert_eq!(RunStatus::Passed.to_string(), "Passed");
    }
}
