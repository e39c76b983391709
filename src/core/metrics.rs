//! Pure summary calculations over extracted test cases

use crate::core::{Criticality, InventorySummary, RunStatus, TestCase, TestKind};

pub fn count_by_kind(cases: &[TestCase], kind: TestKind) -> usize {
    cases.iter().filter(|c| c.kind == kind).count()
}

pub fn count_by_criticality(cases: &[TestCase], criticality: Criticality) -> usize {
    cases.iter().filter(|c| c.criticality == criticality).count()
}

pub fn count_by_status(cases: &[TestCase], status: RunStatus) -> usize {
    cases.iter().filter(|c| c.status == status).count()
}

/// Pass rate over executed cases only; 0.0 when nothing has run
pub fn pass_rate(cases: &[TestCase]) -> f64 {
    let passed = count_by_status(cases, RunStatus::Passed);
    let failed = count_by_status(cases, RunStatus::Failed);
    let executed = passed + failed;
    if executed == 0 {
        0.0
    } else {
        passed as f64 / executed as f64
    }
}

pub fn summarize(cases: &[TestCase]) -> InventorySummary {
    InventorySummary {
        total: cases.len(),
        unit: count_by_kind(cases, TestKind::Unit),
        e2e: count_by_kind(cases, TestKind::E2e),
        high: count_by_criticality(cases, Criticality::High),
        medium: count_by_criticality(cases, Criticality::Medium),
        low: count_by_criticality(cases, Criticality::Low),
        passed: count_by_status(cases, RunStatus::Passed),
        failed: count_by_status(cases, RunStatus::Failed),
        skipped: count_by_status(cases, RunStatus::Skipped),
        not_run: count_by_status(cases, RunStatus::NotRun),
        pass_rate: pass_rate(cases),
    }
}
