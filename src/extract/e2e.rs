//! Nightwatch E2E scenario extraction

use super::patterns::{quoted_capture, E2E_SCENARIO_RE};
use super::{line_of_offset, RawCase};
use crate::core::TestKind;
use std::path::Path;

/// Extract scenario names from a Nightwatch spec. Scenarios are quoted
/// object keys bound to functions; the test item is `E2E: <basename>`.
pub fn extract_e2e_cases(content: &str, file: &Path) -> Vec<RawCase> {
    let basename = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let item = format!("E2E: {basename}");

    E2E_SCENARIO_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            Some(RawCase {
                kind: TestKind::E2e,
                file: file.to_path_buf(),
                line: line_of_offset(content, m.start()),
                item: item.clone(),
                title: quoted_capture(&caps)?.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn extracts_scenarios_from_module_exports() {
        let src = indoc! {r#"
            module.exports = {
              'user can log in': function (browser) {
                browser.url('http://localhost:8080')
              },
              "admin dashboard loads": function (browser) {
                browser.end()
              }
            }
        "#};

        let cases = extract_e2e_cases(src, &PathBuf::from("e2e/specs/login.test.js"));
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].title, "user can log in");
        assert_eq!(cases[0].item, "E2E: login.test.js");
        assert_eq!(cases[0].line, 2);
        assert_eq!(cases[1].title, "admin dashboard loads");
    }

    #[test]
    fn ignores_non_function_entries() {
        let src = indoc! {r#"
            module.exports = {
              'url': 'http://localhost:8080',
              'navigates to library': function (browser) {}
            }
        "#};
        let cases = extract_e2e_cases(src, &PathBuf::from("nav.test.js"));
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].title, "navigates to library");
    }

    #[test]
    fn ignores_lifecycle_helpers_without_browser() {
        let src = indoc! {r#"
            module.exports = {
              'setup': function (done) { done() },
              'user logs out': function (browser) {}
            }
        "#};
        let cases = extract_e2e_cases(src, &PathBuf::from("logout.test.js"));
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].title, "user logs out");
    }
}
