// src/stock/mod.rs

// Owned stock: items paired with their cached category, inventories that
// advance them day by day, and seeded generation of test/bench stock.

pub mod generate;
pub mod inventory;

pub use generate::{StockConfig, StockError, generate};
pub use inventory::*;
