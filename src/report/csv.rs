//! CSV inventory writer.
//!
//! Every cell is wrapped in double quotes with interior quotes doubled,
//! and embedded newlines collapsed to spaces, so titles containing
//! commas, quotes, or line breaks survive a round trip through
//! spreadsheet tools.

use super::{row_cells, InventoryWriter, COLUMNS};
use crate::config::TemplateConfig;
use crate::core::Inventory;
use anyhow::Result;
use std::io::Write;

pub struct CsvWriter<W: Write> {
    writer: W,
    templates: TemplateConfig,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W, templates: TemplateConfig) -> Self {
        Self { writer, templates }
    }

    fn write_row(&mut self, cells: &[String]) -> Result<()> {
        let joined = cells
            .iter()
            .map(|c| format!("\"{}\"", sanitize(c)))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(self.writer, "{joined}")?;
        Ok(())
    }
}

impl<W: Write> InventoryWriter for CsvWriter<W> {
    fn write_inventory(&mut self, inventory: &Inventory) -> Result<()> {
        let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
        self.write_row(&header)?;
        for case in &inventory.cases {
            let cells = row_cells(case, &self.templates);
            self.write_row(&cells)?;
        }
        Ok(())
    }
}

/// Collapse newlines to spaces, double interior quotes, trim
fn sanitize(cell: &str) -> String {
    cell.replace("\r\n", " ")
        .replace('\n', " ")
        .replace('"', "\"\"")
        .trim()
        .to_string()
}
