use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration, loaded from `.casemap.toml` when present.
/// Every section and field has a default so an empty or absent file
/// behaves like the stock setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CasemapConfig {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub criticality: CriticalityConfig,

    #[serde(default)]
    pub templates: TemplateConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub results: ResultsConfig,

    /// Test suites executed by `casemap run`
    #[serde(default, rename = "suite")]
    pub suites: Vec<SuiteConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directories (relative to the scan root) holding unit specs
    #[serde(default = "default_unit_dirs")]
    pub unit_dirs: Vec<String>,

    /// Directories (relative to the scan root) holding E2E specs
    #[serde(default = "default_e2e_dirs")]
    pub e2e_dirs: Vec<String>,

    #[serde(default = "default_unit_suffixes")]
    pub unit_suffixes: Vec<String>,

    #[serde(default = "default_e2e_suffixes")]
    pub e2e_suffixes: Vec<String>,

    /// Glob patterns excluded from every walk
    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            unit_dirs: default_unit_dirs(),
            e2e_dirs: default_e2e_dirs(),
            unit_suffixes: default_unit_suffixes(),
            e2e_suffixes: default_e2e_suffixes(),
            ignore_patterns: default_ignore_patterns(),
        }
    }
}

fn default_unit_dirs() -> Vec<String> {
    vec!["test/unit/specs".into(), "unit/specs".into()]
}

fn default_e2e_dirs() -> Vec<String> {
    vec!["test/e2e/specs".into(), "e2e/specs".into()]
}

fn default_unit_suffixes() -> Vec<String> {
    vec![".spec.js".into()]
}

fn default_e2e_suffixes() -> Vec<String> {
    vec![".test.js".into()]
}

fn default_ignore_patterns() -> Vec<String> {
    vec!["**/node_modules/**".into(), "**/dist/**".into()]
}

/// Keyword lists driving the criticality heuristic; matching is
/// case-insensitive substring search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalityConfig {
    #[serde(default = "default_high_keywords")]
    pub high_keywords: Vec<String>,

    #[serde(default = "default_medium_keywords")]
    pub medium_keywords: Vec<String>,

    /// Matched against the file path only
    #[serde(default = "default_path_medium_keywords")]
    pub path_medium_keywords: Vec<String>,

    #[serde(default = "default_low_keywords")]
    pub low_keywords: Vec<String>,
}

impl Default for CriticalityConfig {
    fn default() -> Self {
        Self {
            high_keywords: default_high_keywords(),
            medium_keywords: default_medium_keywords(),
            path_medium_keywords: default_path_medium_keywords(),
            low_keywords: default_low_keywords(),
        }
    }
}

fn default_high_keywords() -> Vec<String> {
    ["login", "logout", "admin", "dashboard", "register", "auth", "登录", "注册", "权限", "认证"]
        .map(String::from)
        .to_vec()
}

fn default_medium_keywords() -> Vec<String> {
    ["navigation", "navigate", "router", "导航", "error", "fail", "失败"]
        .map(String::from)
        .to_vec()
}

fn default_path_medium_keywords() -> Vec<String> {
    ["utils", "validate"].map(String::from).to_vec()
}

fn default_low_keywords() -> Vec<String> {
    ["basic", "env", "环境"].map(String::from).to_vec()
}

/// Boilerplate text for the descriptive report columns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default = "default_unit_precondition")]
    pub unit_precondition: String,
    #[serde(default = "default_unit_input")]
    pub unit_input: String,
    #[serde(default = "default_unit_procedure")]
    pub unit_procedure: String,
    #[serde(default = "default_unit_output")]
    pub unit_output: String,
    #[serde(default = "default_unit_remark")]
    pub unit_remark: String,

    #[serde(default = "default_e2e_precondition")]
    pub e2e_precondition: String,
    #[serde(default = "default_e2e_input")]
    pub e2e_input: String,
    #[serde(default = "default_e2e_procedure")]
    pub e2e_procedure: String,
    #[serde(default = "default_e2e_output")]
    pub e2e_output: String,
    #[serde(default = "default_e2e_remark")]
    pub e2e_remark: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            unit_precondition: default_unit_precondition(),
            unit_input: default_unit_input(),
            unit_procedure: default_unit_procedure(),
            unit_output: default_unit_output(),
            unit_remark: default_unit_remark(),
            e2e_precondition: default_e2e_precondition(),
            e2e_input: default_e2e_input(),
            e2e_procedure: default_e2e_procedure(),
            e2e_output: default_e2e_output(),
            e2e_remark: default_e2e_remark(),
        }
    }
}

impl TemplateConfig {
    pub fn precondition(&self, kind: crate::core::TestKind) -> &str {
        match kind {
            crate::core::TestKind::Unit => &self.unit_precondition,
            crate::core::TestKind::E2e => &self.e2e_precondition,
        }
    }

    pub fn input(&self, kind: crate::core::TestKind) -> &str {
        match kind {
            crate::core::TestKind::Unit => &self.unit_input,
            crate::core::TestKind::E2e => &self.e2e_input,
        }
    }

    pub fn procedure(&self, kind: crate::core::TestKind) -> &str {
        match kind {
            crate::core::TestKind::Unit => &self.unit_procedure,
            crate::core::TestKind::E2e => &self.e2e_procedure,
        }
    }

    pub fn expected_output(&self, kind: crate::core::TestKind) -> &str {
        match kind {
            crate::core::TestKind::Unit => &self.unit_output,
            crate::core::TestKind::E2e => &self.e2e_output,
        }
    }

    pub fn remark(&self, kind: crate::core::TestKind) -> &str {
        match kind {
            crate::core::TestKind::Unit => &self.unit_remark,
            crate::core::TestKind::E2e => &self.e2e_remark,
        }
    }
}

fn default_unit_precondition() -> String {
    "Jest environment initialized; axios and store dependencies mocked".into()
}
fn default_unit_input() -> String {
    "Component mounted with the data, props, and mocks configured in the spec".into()
}
fn default_unit_procedure() -> String {
    "Mount the component, perform the interaction, assert expectations".into()
}
fn default_unit_output() -> String {
    "All expect assertions hold".into()
}
fn default_unit_remark() -> String {
    "Jest + @vue/test-utils automated unit test".into()
}
fn default_e2e_precondition() -> String {
    "Nightwatch + Selenium + ChromeDriver; local dev server reachable".into()
}
fn default_e2e_input() -> String {
    "Browser opens the target URL and performs scripted input and clicks".into()
}
fn default_e2e_procedure() -> String {
    "Nightwatch drives the browser through the scripted steps and assertions".into()
}
fn default_e2e_output() -> String {
    "Expected element and URL assertions hold".into()
}
fn default_e2e_remark() -> String {
    "Nightwatch automated end-to-end test".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

fn default_format() -> String {
    "csv".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsConfig {
    /// Jest `--json` report joined during `generate`; a missing file is
    /// skipped silently so the default works with or without a prior run
    #[serde(default = "default_jest_report")]
    pub jest_report: Option<PathBuf>,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            jest_report: default_jest_report(),
        }
    }
}

fn default_jest_report() -> Option<PathBuf> {
    Some(PathBuf::from("test/unit/jest-result.json"))
}

/// One entry executed by `casemap run`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub name: String,
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// A failing suite with this flag set does not abort the sequence
    #[serde(default)]
    pub skip_on_error: bool,
}

impl CasemapConfig {
    /// Load configuration: an explicit `--config` path must exist;
    /// otherwise `.casemap.toml` under the root is used when present,
    /// and defaults apply when it is not.
    pub fn load(explicit: Option<&Path>, root: &Path) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(p) => {
                if !p.is_file() {
                    anyhow::bail!("config file not found: {}", p.display());
                }
                Some(p.to_path_buf())
            }
            None => {
                let candidate = root.join(".casemap.toml");
                candidate.is_file().then_some(candidate)
            }
        };

        let config = match path {
            Some(p) => {
                log::debug!("loading config from {}", p.display());
                let content = std::fs::read_to_string(&p)?;
                toml::from_str(&content)
                    .map_err(|e| anyhow::anyhow!("invalid config {}: {}", p.display(), e))?
            }
            None => Self::default(),
        };

        config
            .validate()
            .map_err(crate::errors::CasemapError::InvalidConfig)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.scan.unit_suffixes.is_empty() && self.scan.e2e_suffixes.is_empty() {
            return Err("at least one unit or e2e suffix must be configured".into());
        }
        match self.output.default_format.as_str() {
            "csv" | "markdown" | "json" | "terminal" => {}
            other => return Err(format!("unknown default output format: {other}")),
        }
        for suite in &self.suites {
            if suite.name.trim().is_empty() {
                return Err("suite name must not be empty".into());
            }
            if suite.command.trim().is_empty() {
                return Err(format!("suite '{}' has an empty command", suite.name));
            }
        }
        Ok(())
    }
}

/// Commented template written by `casemap init`
pub const CONFIG_TEMPLATE: &str = r#"# Casemap configuration

[scan]
unit_dirs = ["test/unit/specs", "unit/specs"]
e2e_dirs = ["test/e2e/specs", "e2e/specs"]
unit_suffixes = [".spec.js"]
e2e_suffixes = [".test.js"]
ignore_patterns = ["**/node_modules/**", "**/dist/**"]

[criticality]
high_keywords = ["login", "logout", "admin", "dashboard", "register", "auth", "登录", "注册", "权限", "认证"]
medium_keywords = ["navigation", "navigate", "router", "导航", "error", "fail", "失败"]
path_medium_keywords = ["utils", "validate"]
low_keywords = ["basic", "env", "环境"]

[output]
default_format = "csv"

[results]
# Joined automatically when the file exists; skipped silently otherwise
jest_report = "test/unit/jest-result.json"

# Suites executed by `casemap run`
# [[suite]]
# name = "unit"
# command = "npm"
# args = ["run", "unit"]
#
# [[suite]]
# name = "e2e"
# command = "npm"
# args = ["run", "e2e"]
# skip_on_error = true
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn template_parses_and_validates() {
        let config: CasemapConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.scan.unit_suffixes, vec![".spec.js"]);
        assert_eq!(config.output.default_format, "csv");
    }

    #[test]
    fn template_matches_compiled_defaults() {
        let from_template: CasemapConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        let defaults = CasemapConfig::default();

        // A project initialized with the template must classify and
        // join exactly like one running with no config file at all
        assert_eq!(
            from_template.criticality.high_keywords,
            defaults.criticality.high_keywords
        );
        assert_eq!(
            from_template.criticality.medium_keywords,
            defaults.criticality.medium_keywords
        );
        assert_eq!(
            from_template.criticality.path_medium_keywords,
            defaults.criticality.path_medium_keywords
        );
        assert_eq!(
            from_template.criticality.low_keywords,
            defaults.criticality.low_keywords
        );
        assert_eq!(from_template.results.jest_report, defaults.results.jest_report);
    }

    #[test]
    fn jest_report_defaults_to_standard_location() {
        let config: CasemapConfig = toml::from_str("").unwrap();
        assert_eq!(
            config.results.jest_report,
            Some(PathBuf::from("test/unit/jest-result.json"))
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: CasemapConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.scan.unit_dirs, vec!["test/unit/specs", "unit/specs"]);
        assert!(config.criticality.high_keywords.contains(&"login".to_string()));
    }

    #[test]
    fn rejects_unknown_format() {
        let config: CasemapConfig = toml::from_str("[output]\ndefault_format = \"xml\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_suites() {
        let config: CasemapConfig = toml::from_str(
            r#"
            [[suite]]
            name = "unit"
            command = "npm"
            args = ["run", "unit"]

            [[suite]]
            name = "e2e"
            command = "npm"
            args = ["run", "e2e"]
            skip_on_error = true
            "#,
        )
        .unwrap();
        assert_eq!(config.suites.len(), 2);
        assert!(config.suites[1].skip_on_error);
        assert!(!config.suites[0].skip_on_error);
    }

    #[test]
    fn rejects_empty_suite_command() {
        let config: CasemapConfig = toml::from_str(
            r#"
            [[suite]]
            name = "unit"
            command = ""
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
