//! Project scanning: discovery plus extraction plus classification.
//!
//! Unit cases always come before E2E cases in the returned vector, and
//! files within a kind keep the walker's sorted order, so downstream ID
//! assignment is stable across runs.

use crate::classify::Classifier;
use crate::config::CasemapConfig;
use crate::core::{RunStatus, TestCase, TestKind};
use crate::extract::{extract_e2e_cases, extract_unit_cases, RawCase};
use crate::io::walker::find_test_files;
use crate::report::default_result_text;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn scan_project(root: &Path, config: &CasemapConfig) -> Result<Vec<TestCase>> {
    let classifier = Classifier::new(&config.criticality);

    let unit_files = discover(root, &config.scan.unit_dirs, &config.scan.unit_suffixes, config)?;
    let e2e_files = discover(root, &config.scan.e2e_dirs, &config.scan.e2e_suffixes, config)?;

    let mut cases = Vec::new();
    for file in &unit_files {
        cases.extend(extract_from_file(file, TestKind::Unit));
    }
    for file in &e2e_files {
        cases.extend(extract_from_file(file, TestKind::E2e));
    }

    log::info!(
        "scanned {} unit and {} e2e files, extracted {} cases",
        unit_files.len(),
        e2e_files.len(),
        cases.len()
    );

    Ok(cases
        .into_iter()
        .map(|raw| finish_case(raw, root, &classifier))
        .collect())
}

/// Walk the configured directories under the root. When none of the
/// configured unit or e2e directories exist, the root itself is walked
/// so the tool still works on trees with a different layout.
fn discover(
    root: &Path,
    dirs: &[String],
    suffixes: &[String],
    config: &CasemapConfig,
) -> Result<Vec<PathBuf>> {
    let existing: Vec<PathBuf> = dirs
        .iter()
        .map(|d| root.join(d))
        .filter(|p| p.is_dir())
        .collect();

    let roots = if existing.is_empty() && !configured_dirs_exist(root, config) {
        vec![root.to_path_buf()]
    } else {
        existing
    };

    let mut files = Vec::new();
    for dir in roots {
        files.extend(find_test_files(&dir, suffixes, &config.scan.ignore_patterns)?);
    }
    Ok(files)
}

fn configured_dirs_exist(root: &Path, config: &CasemapConfig) -> bool {
    config
        .scan
        .unit_dirs
        .iter()
        .chain(config.scan.e2e_dirs.iter())
        .any(|d| root.join(d).is_dir())
}

fn extract_from_file(file: &Path, kind: TestKind) -> Vec<RawCase> {
    let content = match crate::io::read_file(file) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("skipping unreadable file {}: {e}", file.display());
            return Vec::new();
        }
    };
    match kind {
        TestKind::Unit => extract_unit_cases(&content, file),
        TestKind::E2e => extract_e2e_cases(&content, file),
    }
}

fn finish_case(raw: RawCase, root: &Path, classifier: &Classifier) -> TestCase {
    let file = pathdiff::diff_paths(&raw.file, root).unwrap_or_else(|| raw.file.clone());
    let file_str = file.to_string_lossy();
    let criticality = classifier.classify(&raw.item, &raw.title, &file_str, raw.kind);

    TestCase {
        id: String::new(),
        kind: raw.kind,
        file,
        line: raw.line,
        item: raw.item,
        title: raw.title,
        criticality,
        status: RunStatus::NotRun,
        result: default_result_text(raw.kind).to_string(),
    }
}
