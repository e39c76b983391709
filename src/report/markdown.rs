//! Markdown pipe-table inventory writer

use super::{row_cells, InventoryWriter, COLUMNS};
use crate::config::TemplateConfig;
use crate::core::Inventory;
use anyhow::Result;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
    templates: TemplateConfig,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, templates: TemplateConfig) -> Self {
        Self { writer, templates }
    }

    fn write_row(&mut self, cells: &[String]) -> Result<()> {
        let joined = cells
            .iter()
            .map(|c| escape(c))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(self.writer, "{joined}")?;
        Ok(())
    }
}

impl<W: Write> InventoryWriter for MarkdownWriter<W> {
    fn write_inventory(&mut self, inventory: &Inventory) -> Result<()> {
        let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
        self.write_row(&header)?;

        let separator = vec!["---".to_string(); COLUMNS.len()].join(" | ");
        writeln!(self.writer, "{separator}")?;

        for case in &inventory.cases {
            let cells = row_cells(case, &self.templates);
            self.write_row(&cells)?;
        }
        Ok(())
    }
}

/// Escape pipes and collapse newlines so cells stay in their column
fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
        .replace("\r\n", " ")
        .replace('\n', " ")
        .trim()
        .to_string()
}
