//! Seeded stock generation.
//!
//! Builds a reproducible [`Inventory`] of random items for benchmarks and
//! property tests. The same config and seed always give the same stock.

use std::ops::RangeInclusive;

use crate::mechanics::stoch;
use crate::stock::Inventory;
use crate::{Item, QUALITY_MAX, QUALITY_MIN};

#[derive(Clone, Debug)]
pub struct StockConfig {
    /// Number of items to draw.
    pub count: usize,
    pub days: RangeInclusive<i32>,
    pub quality: RangeInclusive<i32>,
    /// Names drawn uniformly; their prefixes decide the category mix.
    pub names: Vec<String>,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            count: 1_000,
            days: -5..=30,
            quality: QUALITY_MIN..=QUALITY_MAX,
            names: [
                "+5 Dexterity Vest",
                "Aged Brie",
                "Sulfuras, Hand of Ragnaros",
                "Backstage passes to a TAFKAL80ETC concert",
                "Conjured Mana Cake",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StockError {
    #[error("empty {field} range")]
    EmptyRange { field: &'static str },
    #[error("no item names to draw from")]
    NoNames,
    #[error("quality range {start}..={end} leaves [0, 50]")]
    QualityOutOfContract { start: i32, end: i32 },
}

impl StockConfig {
    pub fn validate(&self) -> Result<(), StockError> {
        if self.days.is_empty() {
            return Err(StockError::EmptyRange { field: "days" });
        }
        if self.quality.is_empty() {
            return Err(StockError::EmptyRange { field: "quality" });
        }
        let (start, end) = (*self.quality.start(), *self.quality.end());
        if start < QUALITY_MIN || end > QUALITY_MAX {
            return Err(StockError::QualityOutOfContract { start, end });
        }
        if self.names.is_empty() {
            return Err(StockError::NoNames);
        }
        Ok(())
    }
}

/// Draw `cfg.count` items with a `WyRand` seeded from `seed`.
pub fn generate(cfg: &StockConfig, seed: u64) -> Result<Inventory, StockError> {
    cfg.validate()?;
    let mut rng = stoch::seeded(seed);
    let items = (0..cfg.count).map(|_| {
        let name = &cfg.names[stoch::pick_index(&mut rng, cfg.names.len())];
        let days = stoch::uniform_i32(&mut rng, &cfg.days);
        let quality = stoch::uniform_i32(&mut rng, &cfg.quality);
        Item::new(name.clone(), days, quality)
    });
    Ok(Inventory::from_items(items))
}
