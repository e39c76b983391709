//! Terminal inventory display: a case table plus a colored summary block

use super::InventoryWriter;
use crate::core::Inventory;
use anyhow::Result;
use colored::*;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl InventoryWriter for TerminalWriter {
    fn write_inventory(&mut self, inventory: &Inventory) -> Result<()> {
        print_header();
        print_case_table(inventory);
        print_summary(inventory);
        Ok(())
    }
}

fn print_header() {
    println!("{}", "Casemap Test Inventory".bold().blue());
    println!("{}", "======================".blue());
    println!();
}

fn print_case_table(inventory: &Inventory) {
    if inventory.cases.is_empty() {
        println!("  No test cases discovered.");
        println!();
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Kind", "Item", "Title", "Criticality", "Status", "Location"]);

    for case in &inventory.cases {
        table.add_row(vec![
            Cell::new(&case.id),
            Cell::new(case.kind.display_name()),
            Cell::new(&case.item),
            Cell::new(&case.title),
            Cell::new(case.criticality.to_string()),
            Cell::new(case.status.to_string()),
            Cell::new(format!("{}:{}", case.file.display(), case.line)),
        ]);
    }

    println!("{table}");
    println!();
}

fn print_summary(inventory: &Inventory) {
    let s = &inventory.summary;

    println!("{} Summary:", "•".bold());
    println!("  Total cases: {} ({} unit, {} e2e)", s.total, s.unit, s.e2e);
    println!(
        "  Criticality: {} high, {} medium, {} low",
        s.high.to_string().red(),
        s.medium.to_string().yellow(),
        s.low.to_string().green()
    );

    let executed = s.passed + s.failed;
    if executed > 0 {
        println!(
            "  Results: {} passed, {} failed, {} skipped, {} not run",
            s.passed.to_string().green(),
            s.failed.to_string().red(),
            s.skipped.to_string().yellow(),
            s.not_run
        );
        println!("  Pass rate: {}", format_pass_rate(s.pass_rate, s.failed));
    } else {
        println!("  Results: no runner output joined ({} cases not run)", s.not_run);
    }
    println!();
}

fn format_pass_rate(rate: f64, failed: usize) -> String {
    let pct = format!("{:.1}%", rate * 100.0);
    if failed == 0 {
        pct.green().to_string()
    } else if rate >= 0.9 {
        pct.yellow().to_string()
    } else {
        pct.red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_rate_formatting() {
        assert!(format_pass_rate(1.0, 0).contains("100.0%"));
        assert!(format_pass_rate(0.5, 2).contains("50.0%"));
    }
}
