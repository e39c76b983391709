//! The `run` command: execute configured test suites sequentially and
//! summarize the outcome

use crate::config::{CasemapConfig, SuiteConfig};
use crate::errors::CasemapError;
use anyhow::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, Instant};

pub struct RunConfig {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
    pub only: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SuiteResult {
    Passed,
    Failed,
    /// Failed but flagged skip_on_error
    Skipped,
}

struct SuiteOutcome {
    name: String,
    result: SuiteResult,
    duration: Duration,
}

/// Returns true when every non-skippable suite passed
pub fn handle_run(cfg: RunConfig) -> Result<bool> {
    let config = CasemapConfig::load(cfg.config.as_deref(), &cfg.path)?;

    let suites: Vec<&SuiteConfig> = match &cfg.only {
        Some(name) => {
            let selected: Vec<_> = config.suites.iter().filter(|s| &s.name == name).collect();
            if selected.is_empty() {
                return Err(CasemapError::UnknownSuite(name.clone()).into());
            }
            selected
        }
        None => config.suites.iter().collect(),
    };

    if suites.is_empty() {
        anyhow::bail!("no test suites configured; add [[suite]] entries to .casemap.toml");
    }

    println!("{}", "Running test suites".bold().cyan());
    println!();

    let mut outcomes = Vec::new();
    for suite in suites {
        let outcome = run_suite(suite, &cfg.path);
        let aborted = outcome.result == SuiteResult::Failed;
        outcomes.push(outcome);
        if aborted {
            println!();
            println!("{}", "Suite failed, stopping execution".red());
            break;
        }
    }

    print_summary(&outcomes);
    Ok(!outcomes.iter().any(|o| o.result == SuiteResult::Failed))
}

fn run_suite(suite: &SuiteConfig, cwd: &std::path::Path) -> SuiteOutcome {
    let label = suite.description.as_deref().unwrap_or(&suite.name);
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("{label}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let status = Command::new(&suite.command)
        .args(&suite.args)
        .current_dir(cwd)
        .output();
    let duration = start.elapsed();

    let result = match status {
        Ok(output) if output.status.success() => {
            spinner.finish_with_message(format!(
                "{} {} ({:.2}s)",
                "✓".green(),
                format!("{} passed", suite.name).green(),
                duration.as_secs_f64()
            ));
            SuiteResult::Passed
        }
        Ok(output) => {
            log::debug!(
                "suite '{}' stderr:\n{}",
                suite.name,
                String::from_utf8_lossy(&output.stderr)
            );
            if suite.skip_on_error {
                spinner.finish_with_message(format!(
                    "{} {} ({:.2}s)",
                    "⊗".yellow(),
                    format!("{} failed but skipped", suite.name).yellow(),
                    duration.as_secs_f64()
                ));
                SuiteResult::Skipped
            } else {
                spinner.finish_with_message(format!(
                    "{} {} ({:.2}s)",
                    "✗".red(),
                    format!("{} failed", suite.name).red(),
                    duration.as_secs_f64()
                ));
                SuiteResult::Failed
            }
        }
        Err(e) => {
            spinner.finish_with_message(format!(
                "{} {}",
                "✗".red(),
                format!("{} could not start: {e}", suite.name).red()
            ));
            if suite.skip_on_error {
                SuiteResult::Skipped
            } else {
                SuiteResult::Failed
            }
        }
    };

    SuiteOutcome {
        name: suite.name.clone(),
        result,
        duration,
    }
}

fn print_summary(outcomes: &[SuiteOutcome]) {
    let passed: Vec<_> = outcomes.iter().filter(|o| o.result == SuiteResult::Passed).collect();
    let failed: Vec<_> = outcomes.iter().filter(|o| o.result == SuiteResult::Failed).collect();
    let skipped: Vec<_> = outcomes.iter().filter(|o| o.result == SuiteResult::Skipped).collect();

    let total = outcomes.len();
    let pass_rate = if total > 0 {
        passed.len() as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    println!();
    println!("{}", "Suite summary".bold().cyan());
    println!("  Total suites: {total}");
    println!("  {} {}", "✓ Passed:".green(), passed.len());
    println!("  {} {}", "✗ Failed:".red(), failed.len());
    println!("  {} {}", "⊗ Skipped:".yellow(), skipped.len());
    println!("  Pass rate: {pass_rate:.1}%");

    for outcome in outcomes {
        let line = format!("    {} ({:.2}s)", outcome.name, outcome.duration.as_secs_f64());
        match outcome.result {
            SuiteResult::Passed => println!("{}", line.green()),
            SuiteResult::Failed => println!("{}", line.red()),
            SuiteResult::Skipped => println!("{}", line.yellow()),
        }
    }
    println!();

    if failed.is_empty() {
        println!("{}", "All required suites passed".green().bold());
    } else {
        println!("{}", "Some suites failed".red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suite(name: &str, command: &str, args: &[&str], skip_on_error: bool) -> SuiteConfig {
        SuiteConfig {
            name: name.into(),
            command: command.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
            description: None,
            skip_on_error,
        }
    }

    #[test]
    fn passing_suite_reports_passed() {
        let outcome = run_suite(&suite("ok", "true", &[], false), std::path::Path::new("."));
        assert_eq!(outcome.result, SuiteResult::Passed);
    }

    #[test]
    fn failing_suite_reports_failed() {
        let outcome = run_suite(&suite("bad", "false", &[], false), std::path::Path::new("."));
        assert_eq!(outcome.result, SuiteResult::Failed);
    }

    #[test]
    fn failing_suite_with_flag_is_skipped() {
        let outcome = run_suite(&suite("bad", "false", &[], true), std::path::Path::new("."));
        assert_eq!(outcome.result, SuiteResult::Skipped);
    }

    #[test]
    fn missing_command_respects_skip_flag() {
        let outcome = run_suite(
            &suite("ghost", "/nonexistent/binary", &[], true),
            std::path::Path::new("."),
        );
        assert_eq!(outcome.result, SuiteResult::Skipped);
    }
}
