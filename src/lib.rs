// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod extract;
pub mod io;
pub mod report;
pub mod results;
pub mod scan;

// Re-export commonly used types
pub use crate::core::{
    Criticality, Inventory, InventorySummary, RunStatus, TestCase, TestKind,
};

pub use crate::classify::Classifier;
pub use crate::config::{CasemapConfig, CriticalityConfig, ScanConfig, SuiteConfig, TemplateConfig};
pub use crate::errors::CasemapError;
pub use crate::extract::{extract_e2e_cases, extract_unit_cases, RawCase};
pub use crate::io::walker::{find_test_files, FileWalker};
pub use crate::report::{
    apply_results, assign_ids, build_inventory, create_writer, InventoryWriter, OutputFormat,
};
pub use crate::results::{parse_jest_report, CaseOutcome, ResultIndex};
pub use crate::scan::scan_project;
