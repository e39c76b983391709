//! Unit-spec extraction: `describe`/`it` titles with suite context

use super::patterns::{quoted_capture, DESCRIBE_RE, IT_RE};
use super::{line_of_offset, RawCase};
use crate::core::TestKind;
use std::path::Path;

struct DescribeBlock {
    title: String,
    offset: usize,
}

/// Extract every `it`/`test` title from a Jest spec, attributing each to
/// the nearest one or two preceding `describe` titles joined with ` > `.
/// Falls back to the file basename when no `describe` precedes the case.
pub fn extract_unit_cases(content: &str, file: &Path) -> Vec<RawCase> {
    let describes: Vec<DescribeBlock> = DESCRIBE_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            Some(DescribeBlock {
                title: quoted_capture(&caps)?.to_string(),
                offset: m.start(),
            })
        })
        .collect();

    IT_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            let title = quoted_capture(&caps)?.to_string();
            let item = describe_context(&describes, m.start(), file);
            Some(RawCase {
                kind: TestKind::Unit,
                file: file.to_path_buf(),
                line: line_of_offset(content, m.start()),
                item,
                title,
            })
        })
        .collect()
}

fn describe_context(describes: &[DescribeBlock], offset: usize, file: &Path) -> String {
    let preceding: Vec<&str> = describes
        .iter()
        .filter(|d| d.offset < offset)
        .map(|d| d.title.as_str())
        .collect();

    // The last two describes approximate the enclosing suite nesting
    // without a real parse
    let tail = &preceding[preceding.len().saturating_sub(2)..];
    if tail.is_empty() {
        file.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    } else {
        tail.join(" > ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn attributes_cases_to_nearest_describes() {
        let src = indoc! {r#"
            describe('Login.vue', () => {
              describe('form validation', () => {
                it('rejects empty username', () => {})
                it('rejects empty password', () => {})
              })
              it('renders the form', () => {})
            })
        "#};

        let cases = extract_unit_cases(src, &PathBuf::from("Login.spec.js"));
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0].item, "Login.vue > form validation");
        assert_eq!(cases[0].title, "rejects empty username");
        assert_eq!(cases[0].line, 3);
        // Positional heuristic: the inner describe still precedes the
        // trailing it, so both titles stay in the context
        assert_eq!(cases[2].item, "Login.vue > form validation");
        assert_eq!(cases[2].title, "renders the form");
    }

    #[test]
    fn falls_back_to_basename_without_describe() {
        let src = "it('works standalone', () => {})";
        let cases = extract_unit_cases(src, &PathBuf::from("specs/basic.spec.js"));
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].item, "basic.spec.js");
    }

    #[test]
    fn supports_test_alias_and_template_literals() {
        let src = indoc! {r#"
            describe(`SearchBar`, () => {
              test("emits search event", () => {})
            })
        "#};
        let cases = extract_unit_cases(src, &PathBuf::from("SearchBar.spec.js"));
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].item, "SearchBar");
        assert_eq!(cases[0].title, "emits search event");
    }

    #[test]
    fn empty_source_yields_no_cases() {
        assert!(extract_unit_cases("", &PathBuf::from("x.spec.js")).is_empty());
    }
}
