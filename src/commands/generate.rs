//! The `generate` command: scan, extract, classify, join, write

use crate::cli;
use crate::config::CasemapConfig;
use crate::report::{self, OutputFormat};
use crate::results::parse_jest_report;
use crate::scan::scan_project;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct GenerateConfig {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub results: Option<PathBuf>,
}

pub fn handle_generate(cfg: GenerateConfig) -> Result<()> {
    let config = CasemapConfig::load(cfg.config.as_deref(), &cfg.path)?;

    let mut cases = scan_project(&cfg.path, &config)?;
    report::assign_ids(&mut cases);

    if let Some(results_path) = resolve_results_path(&cfg, &config) {
        if results_path.is_file() {
            match parse_jest_report(&results_path) {
                Ok(index) => {
                    log::info!(
                        "joined {} runner outcomes from {}",
                        index.len(),
                        results_path.display()
                    );
                    report::apply_results(&mut cases, &index);
                }
                Err(e) => {
                    // The inventory is still useful without statuses, so
                    // a bad result file is not fatal
                    log::warn!("could not join runner results: {e:#}");
                }
            }
        } else if cfg.results.is_some() {
            // An explicit flag pointing at a missing file deserves a
            // warning; the configured default is skipped quietly
            log::warn!("runner result file not found: {}", results_path.display());
        } else {
            log::debug!("no runner results at {}", results_path.display());
        }
    }

    let case_count = cases.len();
    let inventory = report::build_inventory(cases, cfg.path.clone());

    let format = resolve_format(&cfg, &config)?;
    let destination: Box<dyn Write> = match &cfg.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    let mut writer = report::create_writer(format, destination, config.templates.clone());
    writer.write_inventory(&inventory)?;

    match &cfg.output {
        Some(path) => eprintln!("Generated {} test cases in {}", case_count, path.display()),
        None => log::info!("generated {case_count} test cases"),
    }

    Ok(())
}

/// CLI flag wins over the configured report path; a configured relative
/// path is resolved against the scan root
fn resolve_results_path(cfg: &GenerateConfig, config: &CasemapConfig) -> Option<PathBuf> {
    if let Some(p) = &cfg.results {
        return Some(p.clone());
    }
    config
        .results
        .jest_report
        .as_ref()
        .map(|p| resolve_against(&cfg.path, p))
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn resolve_format(cfg: &GenerateConfig, config: &CasemapConfig) -> Result<OutputFormat> {
    match cfg.format {
        Some(f) => Ok(f.into()),
        None => config
            .output
            .default_format
            .parse()
            .map_err(anyhow::Error::msg),
    }
}
