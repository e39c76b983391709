//! End-to-end pipeline tests over a synthetic project tree: scan,
//! classify, join runner results, and emit reports.

use casemap::config::{CasemapConfig, TemplateConfig};
use casemap::core::{Criticality, RunStatus, TestKind};
use casemap::report::{self, CsvWriter, InventoryWriter, MarkdownWriter};
use casemap::results::parse_jest_report;
use casemap::scan::scan_project;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn build_project(root: &Path) {
    write(
        &root.join("test/unit/specs/Login.spec.js"),
        indoc! {r#"
            describe('Login.vue', () => {
              it('submits credentials to the API', () => {})
              it('shows an error for a wrong password', () => {})
            })
        "#},
    );
    write(
        &root.join("test/unit/specs/utils.spec.js"),
        indoc! {r#"
            describe('date helpers', () => {
              it('formats timestamps', () => {})
            })
        "#},
    );
    write(
        &root.join("test/unit/specs/basic.spec.js"),
        "it('basic environment sanity', () => {})",
    );
    write(
        &root.join("test/e2e/specs/library.test.js"),
        indoc! {r#"
            module.exports = {
              'user browses the book library': function (browser) {
                browser.url('http://localhost:8080/#/library')
              }
            }
        "#},
    );
}

fn write_jest_report(root: &Path) {
    let login = root.join("test/unit/specs/Login.spec.js");
    let json = format!(
        r#"{{
          "testResults": [
            {{
              "name": "{login}",
              "assertionResults": [
                {{"title": "submits credentials to the API", "status": "passed"}},
                {{"title": "shows an error for a wrong password", "status": "failed",
                 "failureMessages": ["expected error banner to be visible\n  at Object.<anonymous>"]}}
              ]
            }}
          ]
        }}"#,
        login = login.display()
    );
    write(&root.join("jest-result.json"), &json);
}

#[test]
fn full_pipeline_produces_joined_csv() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    build_project(root);
    write_jest_report(root);

    let config = CasemapConfig::default();
    let mut cases = scan_project(root, &config).unwrap();
    report::assign_ids(&mut cases);

    let index = parse_jest_report(&root.join("jest-result.json")).unwrap();
    assert_eq!(index.len(), 2);
    report::apply_results(&mut cases, &index);

    let inventory = report::build_inventory(cases, root.to_path_buf());
    assert_eq!(inventory.summary.total, 5);
    assert_eq!(inventory.summary.unit, 4);
    assert_eq!(inventory.summary.e2e, 1);
    assert_eq!(inventory.summary.passed, 1);
    assert_eq!(inventory.summary.failed, 1);
    assert_eq!(inventory.summary.pass_rate, 0.5);

    let mut buf = Vec::new();
    CsvWriter::new(&mut buf, TemplateConfig::default())
        .write_inventory(&inventory)
        .unwrap();
    let csv = String::from_utf8(buf).unwrap();
    let lines: Vec<_> = csv.lines().collect();

    // header + 4 unit + 1 e2e
    assert_eq!(lines.len(), 6);
    assert!(lines[1].starts_with("\"UNIT-001\""));
    assert!(lines[5].starts_with("\"E2E-001\""));
    assert!(csv.contains("\"Passed\""));
    assert!(csv.contains("\"expected error banner to be visible\""));
    // failure detail past the first line must not leak into the row
    assert!(!csv.contains("at Object"));
}

#[test]
fn classification_matches_triage_rules() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    build_project(root);

    let config = CasemapConfig::default();
    let cases = scan_project(root, &config).unwrap();

    let by_title = |t: &str| cases.iter().find(|c| c.title == t).unwrap();

    assert_eq!(by_title("submits credentials to the API").criticality, Criticality::High);
    // "error" keyword outranks the login path context check order: high
    // keywords are matched first, so the Login.vue item stays High
    assert_eq!(by_title("shows an error for a wrong password").criticality, Criticality::High);
    assert_eq!(by_title("formats timestamps").criticality, Criticality::Medium);
    assert_eq!(by_title("basic environment sanity").criticality, Criticality::Low);
    assert_eq!(by_title("user browses the book library").criticality, Criticality::High);
}

#[test]
fn e2e_rows_are_untouched_by_the_join() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    build_project(root);
    write_jest_report(root);

    let config = CasemapConfig::default();
    let mut cases = scan_project(root, &config).unwrap();
    report::assign_ids(&mut cases);
    let index = parse_jest_report(&root.join("jest-result.json")).unwrap();
    report::apply_results(&mut cases, &index);

    let e2e = cases.iter().find(|c| c.kind == TestKind::E2e).unwrap();
    assert_eq!(e2e.status, RunStatus::NotRun);
    assert!(e2e.result.contains("dev server"));
}

#[test]
fn markdown_report_keeps_row_count() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    build_project(root);

    let config = CasemapConfig::default();
    let mut cases = scan_project(root, &config).unwrap();
    report::assign_ids(&mut cases);
    let inventory = report::build_inventory(cases, root.to_path_buf());

    let mut buf = Vec::new();
    MarkdownWriter::new(&mut buf, TemplateConfig::default())
        .write_inventory(&inventory)
        .unwrap();
    let md = String::from_utf8(buf).unwrap();

    // header + separator + 5 rows
    assert_eq!(md.lines().count(), 7);
    assert!(md.lines().nth(1).unwrap().starts_with("--- |"));
}

#[test]
fn discovery_order_is_stable_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    build_project(root);

    let config = CasemapConfig::default();
    let first: Vec<String> = {
        let mut cases = scan_project(root, &config).unwrap();
        report::assign_ids(&mut cases);
        cases.iter().map(|c| format!("{}:{}", c.id, c.title)).collect()
    };
    let second: Vec<String> = {
        let mut cases = scan_project(root, &config).unwrap();
        report::assign_ids(&mut cases);
        cases.iter().map(|c| format!("{}:{}", c.id, c.title)).collect()
    };
    assert_eq!(first, second);
}
