pub mod e2e;
pub mod patterns;
pub mod unit;

pub use e2e::extract_e2e_cases;
pub use unit::extract_unit_cases;

use crate::core::TestKind;
use std::path::PathBuf;

/// A test case as recovered from source, before classification and
/// ID assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCase {
    pub kind: TestKind,
    pub file: PathBuf,
    pub line: usize,
    pub item: String,
    pub title: String,
}

/// 1-based line number of a byte offset
pub(crate) fn line_of_offset(content: &str, offset: usize) -> usize {
    content[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}
