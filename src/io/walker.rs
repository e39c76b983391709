use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Recursive test-file discovery over one root directory.
///
/// Files are matched by filename suffix rather than extension so that
/// compound suffixes like `.spec.js` work. Results are sorted so that
/// case IDs assigned downstream are stable between runs.
pub struct FileWalker {
    root: PathBuf,
    suffixes: Vec<String>,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            suffixes: vec![".spec.js".to_string(), ".test.js".to_string()],
            ignore_patterns: vec![],
        }
    }

    pub fn with_suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.suffixes = suffixes;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Walk the root, returning matching files in sorted order.
    /// A missing root yields an empty list rather than an error.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            log::debug!("scan root {} does not exist, skipping", self.root.display());
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let name = match path.file_name() {
            Some(n) => n.to_string_lossy(),
            None => return false,
        };

        if !self.suffixes.iter().any(|s| name.ends_with(s.as_str())) {
            return false;
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return false;
            }
        }

        true
    }
}

pub fn find_test_files(
    root: &Path,
    suffixes: &[String],
    ignore_patterns: &[String],
) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf())
        .with_suffixes(suffixes.to_vec())
        .with_ignore_patterns(ignore_patterns.to_vec())
        .walk()
}
