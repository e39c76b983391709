pub mod metrics;
pub mod types;

pub use types::{
    Criticality, Inventory, InventorySummary, RunStatus, TestCase, TestKind,
};
