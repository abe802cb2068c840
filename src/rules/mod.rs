// src/rules/mod.rs

// Item categories and the per-category daily update rules.

pub mod category;
pub mod update;

pub use category::*;
pub use update::*;
