//! Jest `--json` report model

use super::{CaseOutcome, ResultIndex};
use crate::core::RunStatus;
use crate::errors::CasemapError;
use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct JestReport {
    #[serde(default, rename = "testResults")]
    pub test_results: Vec<JestFileResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JestFileResult {
    /// Absolute spec path; older Jest versions emit `testFilePath` instead
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, rename = "testFilePath")]
    pub test_file_path: Option<String>,

    #[serde(default, rename = "assertionResults")]
    pub assertion_results: Vec<JestAssertion>,
}

impl JestFileResult {
    pub fn file_path(&self) -> Option<&str> {
        self.name.as_deref().or(self.test_file_path.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct JestAssertion {
    pub title: String,
    pub status: String,
    #[serde(default, rename = "failureMessages")]
    pub failure_messages: Vec<String>,
}

impl JestAssertion {
    pub fn outcome(&self) -> CaseOutcome {
        let status = match self.status.as_str() {
            "passed" => RunStatus::Passed,
            "failed" => RunStatus::Failed,
            // pending covers skipped and todo assertions
            "pending" | "skipped" | "todo" => RunStatus::Skipped,
            other => {
                log::debug!("unrecognized jest status '{other}', treating as not run");
                RunStatus::NotRun
            }
        };
        let failure = self
            .failure_messages
            .first()
            .and_then(|m| m.lines().next())
            .map(str::to_string);
        CaseOutcome { status, failure }
    }
}

/// Parse a Jest JSON report and build the lookup index
pub fn parse_jest_report(path: &Path) -> Result<ResultIndex> {
    let content = std::fs::read_to_string(path).map_err(|source| CasemapError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let report: JestReport =
        serde_json::from_str(&content).map_err(|source| CasemapError::ResultParse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut index = ResultIndex::default();
    for file_result in &report.test_results {
        let file = PathBuf::from(file_result.file_path().unwrap_or_default());
        for assertion in &file_result.assertion_results {
            index.insert(&file, &assertion.title, assertion.outcome());
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn outcome_maps_statuses() {
        let passed = JestAssertion {
            title: "t".into(),
            status: "passed".into(),
            failure_messages: vec![],
        };
        assert_eq!(passed.outcome().status, RunStatus::Passed);

        let pending = JestAssertion {
            title: "t".into(),
            status: "pending".into(),
            failure_messages: vec![],
        };
        assert_eq!(pending.outcome().status, RunStatus::Skipped);
    }

    #[test]
    fn failure_keeps_first_line_only() {
        let failed = JestAssertion {
            title: "t".into(),
            status: "failed".into(),
            failure_messages: vec!["expected true to be false\n  at Object.<anonymous>".into()],
        };
        let outcome = failed.outcome();
        assert_eq!(outcome.status, RunStatus::Failed);
        assert_eq!(outcome.failure.as_deref(), Some("expected true to be false"));
    }

    #[test]
    fn report_parses_minimal_json() {
        let json = indoc! {r#"
            {
              "testResults": [
                {
                  "name": "/proj/test/unit/specs/Login.spec.js",
                  "assertionResults": [
                    {"title": "logs in", "status": "passed"},
                    {"title": "rejects bad password", "status": "failed",
                     "failureMessages": ["boom"]}
                  ]
                }
              ]
            }
        "#};
        let report: JestReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.test_results.len(), 1);
        assert_eq!(report.test_results[0].assertion_results.len(), 2);
    }
}
