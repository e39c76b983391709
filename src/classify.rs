//! Keyword heuristic assigning a criticality label to each test case.
//!
//! Mirrors the triage rules QA teams apply by hand: anything touching
//! authentication or the admin surface is High, navigation and error
//! handling are Medium, environment smoke checks are Low. First match
//! wins; E2E scenarios default to High because a full browser flow
//! failing blocks release.

use crate::config::CriticalityConfig;
use crate::core::{Criticality, TestKind};

pub struct Classifier {
    high: Vec<String>,
    medium: Vec<String>,
    path_medium: Vec<String>,
    low: Vec<String>,
}

impl Classifier {
    pub fn new(config: &CriticalityConfig) -> Self {
        let lower = |v: &[String]| v.iter().map(|s| s.to_lowercase()).collect();
        Self {
            high: lower(&config.high_keywords),
            medium: lower(&config.medium_keywords),
            path_medium: lower(&config.path_medium_keywords),
            low: lower(&config.low_keywords),
        }
    }

    pub fn classify(&self, item: &str, title: &str, file: &str, kind: TestKind) -> Criticality {
        let haystack = format!("{item} {title} {file}").to_lowercase();
        let file_lower = file.to_lowercase();

        if contains_any(&haystack, &self.high) {
            return Criticality::High;
        }
        if contains_any(&haystack, &self.medium) {
            return Criticality::Medium;
        }
        if kind == TestKind::E2e {
            return Criticality::High;
        }
        if contains_any(&file_lower, &self.path_medium) {
            return Criticality::Medium;
        }
        if contains_any(&haystack, &self.low) {
            return Criticality::Low;
        }
        Criticality::Medium
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&CriticalityConfig::default())
    }
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_str()))
}
