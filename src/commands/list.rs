//! The `list` command: a quick, column-light view of discovered cases

use crate::cli::ListFormat;
use crate::config::CasemapConfig;
use crate::scan::scan_project;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use std::path::PathBuf;

pub struct ListConfig {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
    pub format: ListFormat,
}

pub fn handle_list(cfg: ListConfig) -> Result<()> {
    let config = CasemapConfig::load(cfg.config.as_deref(), &cfg.path)?;
    let cases = scan_project(&cfg.path, &config)?;

    match cfg.format {
        ListFormat::Terminal => print_terminal(&cases),
        ListFormat::Markdown => print_markdown(&cases),
    }

    eprintln!("Listed {} test cases", cases.len());
    Ok(())
}

fn print_terminal(cases: &[crate::core::TestCase]) {
    if cases.is_empty() {
        println!("No test cases discovered.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["File", "Item", "Title", "Kind", "Criticality"]);

    for case in cases {
        table.add_row(vec![
            case.file.display().to_string(),
            case.item.clone(),
            case.title.clone(),
            case.kind.to_string(),
            case.criticality.to_string(),
        ]);
    }

    println!("{table}");
}

fn print_markdown(cases: &[crate::core::TestCase]) {
    println!("File | Item | Title | Kind | Criticality");
    println!("--- | --- | --- | --- | ---");
    for case in cases {
        println!(
            "{} | {} | {} | {} | {}",
            escape(&case.file.display().to_string()),
            escape(&case.item),
            escape(&case.title),
            case.kind,
            case.criticality
        );
    }
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_protects_pipes() {
        assert_eq!(escape("a|b"), "a\\|b");
    }
}
