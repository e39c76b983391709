use super::InventoryWriter;
use crate::core::Inventory;
use anyhow::Result;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> InventoryWriter for JsonWriter<W> {
    fn write_inventory(&mut self, inventory: &Inventory) -> Result<()> {
        let json = serde_json::to_string_pretty(inventory)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}
