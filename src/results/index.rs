//! Indexed runner outcomes for joining onto extracted cases.
//!
//! Report paths are usually absolute while scanned paths are relative,
//! so lookup falls back through suffix matching in both directions and
//! finally a basename-only key.

use super::CaseOutcome;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Strip a leading `./` so relative keys compare cleanly
fn normalize_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    let cleaned = path_str.strip_prefix("./").unwrap_or(&path_str);
    PathBuf::from(cleaned)
}

#[derive(Debug, Default, Clone)]
pub struct ResultIndex {
    /// Outcomes keyed by (normalized file path, title)
    by_path: HashMap<(PathBuf, String), CaseOutcome>,

    /// Basename fallback; the first outcome recorded for a basename wins
    by_basename: HashMap<(String, String), CaseOutcome>,
}

impl ResultIndex {
    pub fn insert(&mut self, file: &Path, title: &str, outcome: CaseOutcome) {
        let normalized = normalize_path(file);
        if let Some(basename) = normalized.file_name() {
            let key = (basename.to_string_lossy().to_string(), title.to_string());
            self.by_basename.entry(key).or_insert_with(|| outcome.clone());
        }
        self.by_path.insert((normalized, title.to_string()), outcome);
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    /// Look up a case by file and title, trying exact path, suffix
    /// strategies, then basename
    pub fn lookup(&self, file: &Path, title: &str) -> Option<&CaseOutcome> {
        let normalized = normalize_path(file);

        if let Some(outcome) = self.by_path.get(&(normalized.clone(), title.to_string())) {
            return Some(outcome);
        }

        if let Some(outcome) = self.find_by_path_strategies(&normalized, title) {
            return Some(outcome);
        }

        let basename = normalized.file_name()?.to_string_lossy().to_string();
        self.by_basename.get(&(basename, title.to_string()))
    }

    fn find_by_path_strategies(&self, query: &Path, title: &str) -> Option<&CaseOutcome> {
        for ((indexed_path, indexed_title), outcome) in &self.by_path {
            if indexed_title != title {
                continue;
            }
            if query.ends_with(indexed_path) || indexed_path.ends_with(query) {
                return Some(outcome);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RunStatus;
    use pretty_assertions::assert_eq;

    fn passed() -> CaseOutcome {
        CaseOutcome {
            status: RunStatus::Passed,
            failure: None,
        }
    }

    fn failed(msg: &str) -> CaseOutcome {
        CaseOutcome {
            status: RunStatus::Failed,
            failure: Some(msg.to_string()),
        }
    }

    #[test]
    fn exact_lookup_after_normalization() {
        let mut index = ResultIndex::default();
        index.insert(Path::new("./specs/Login.spec.js"), "logs in", passed());

        let hit = index.lookup(Path::new("specs/Login.spec.js"), "logs in");
        assert_eq!(hit, Some(&passed()));
    }

    #[test]
    fn absolute_report_path_matches_relative_query() {
        let mut index = ResultIndex::default();
        index.insert(
            Path::new("/home/ci/proj/test/unit/specs/Books.spec.js"),
            "lists books",
            failed("expected 3 items"),
        );

        let hit = index.lookup(Path::new("test/unit/specs/Books.spec.js"), "lists books");
        assert_eq!(hit, Some(&failed("expected 3 items")));
    }

    #[test]
    fn basename_fallback_keeps_first_entry() {
        let mut index = ResultIndex::default();
        index.insert(Path::new("/a/one/x.spec.js"), "t", passed());
        index.insert(Path::new("/b/two/x.spec.js"), "t", failed("later"));

        // A query matching neither directory tree falls back to the
        // basename key, which kept the first insertion
        let hit = index.lookup(Path::new("elsewhere/x.spec.js"), "t");
        assert_eq!(hit, Some(&passed()));
    }

    #[test]
    fn title_mismatch_misses() {
        let mut index = ResultIndex::default();
        index.insert(Path::new("x.spec.js"), "a title", passed());
        assert!(index.lookup(Path::new("x.spec.js"), "another title").is_none());
    }
}
