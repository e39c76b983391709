pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

pub use csv::CsvWriter;
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

use crate::config::TemplateConfig;
use crate::core::{metrics, Inventory, RunStatus, TestCase, TestKind};
use crate::results::ResultIndex;
use anyhow::Result;
use chrono::Utc;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

/// Column headers shared by the CSV and Markdown writers
pub const COLUMNS: [&str; 11] = [
    "Test Case ID",
    "Test Item",
    "Test Case Title",
    "Test Criticality",
    "Pre-condition",
    "Input",
    "Procedure",
    "Output",
    "Result",
    "Status",
    "Remark",
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Markdown,
    Json,
    Terminal,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(OutputFormat::Csv),
            "markdown" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "terminal" => Ok(OutputFormat::Terminal),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

pub trait InventoryWriter {
    fn write_inventory(&mut self, inventory: &Inventory) -> Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    out: Box<dyn Write>,
    templates: TemplateConfig,
) -> Box<dyn InventoryWriter> {
    match format {
        OutputFormat::Csv => Box::new(CsvWriter::new(out, templates)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out, templates)),
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

/// Assign per-kind sequential IDs (UNIT-001, E2E-001, ...) in the order
/// cases were discovered
pub fn assign_ids(cases: &mut [TestCase]) {
    let mut unit = 0usize;
    let mut e2e = 0usize;
    for case in cases.iter_mut() {
        let counter = match case.kind {
            TestKind::Unit => {
                unit += 1;
                unit
            }
            TestKind::E2e => {
                e2e += 1;
                e2e
            }
        };
        case.id = format!("{}-{:03}", case.kind.id_prefix(), counter);
    }
}

/// Join runner outcomes onto unit cases. E2E rows are left untouched:
/// the Jest report never covers them.
pub fn apply_results(cases: &mut [TestCase], index: &ResultIndex) {
    for case in cases.iter_mut() {
        if case.kind != TestKind::Unit {
            continue;
        }
        let Some(outcome) = index.lookup(&case.file, &case.title) else {
            log::debug!(
                "no runner outcome for {}::{}",
                case.file.display(),
                case.title
            );
            continue;
        };
        case.status = outcome.status;
        case.result = match outcome.status {
            RunStatus::Passed => "Matches expected behavior (unit test passed)".to_string(),
            RunStatus::Failed => outcome
                .failure
                .clone()
                .unwrap_or_else(|| "Assertion failed".to_string()),
            RunStatus::Skipped => "Test was skipped".to_string(),
            RunStatus::NotRun => case.result.clone(),
        };
    }
}

/// Default "Result" column text before any join happens
pub fn default_result_text(kind: TestKind) -> &'static str {
    match kind {
        TestKind::Unit => "Not executed when the inventory was generated",
        TestKind::E2e => "Not executed (E2E run requires a reachable dev server)",
    }
}

pub fn build_inventory(cases: Vec<TestCase>, root: PathBuf) -> Inventory {
    let summary = metrics::summarize(&cases);
    Inventory {
        generated_at: Utc::now(),
        root,
        cases,
        summary,
    }
}

/// The eleven cells of one report row
pub fn row_cells(case: &TestCase, templates: &TemplateConfig) -> [String; 11] {
    [
        case.id.clone(),
        case.item.clone(),
        case.title.clone(),
        case.criticality.to_string(),
        templates.precondition(case.kind).to_string(),
        templates.input(case.kind).to_string(),
        templates.procedure(case.kind).to_string(),
        templates.expected_output(case.kind).to_string(),
        case.result.clone(),
        case.status.to_string(),
        templates.remark(case.kind).to_string(),
    ]
}
