//! Tracked items and inventories.
//!
//! A [`TrackedItem`] classifies its name once and keeps the category for
//! its lifetime, so daily updates dispatch on the enum instead of
//! re-testing name prefixes. An [`Inventory`] is an ordered set of tracked
//! items plus a day counter.
//!
//! Items never interact, so update order does not affect results. With the
//! `parallel` feature, [`Inventory::advance_day_par`] updates on the rayon
//! pool and matches [`Inventory::advance_day`] item for item.

use tracing::{debug, trace};

use crate::Item;
use crate::rules::{Category, update_with_category};

/// An item with its category fixed at construction.
///
/// The name is only readable from here, so the cached category cannot
/// drift from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedItem {
    item: Item,
    category: Category,
}

impl TrackedItem {
    pub fn new(item: Item) -> Self {
        let category = item.category();
        Self { item, category }
    }

    /// Use a category the caller already knows instead of classifying.
    pub fn with_category(item: Item, category: Category) -> Self {
        Self { item, category }
    }

    #[inline]
    pub fn item(&self) -> &Item {
        &self.item
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn into_inner(self) -> Item {
        self.item
    }

    /// Advance one day under the cached category.
    #[inline]
    pub fn update(&mut self) {
        update_with_category(&mut self.item, self.category);
    }
}

impl From<Item> for TrackedItem {
    fn from(item: Item) -> Self {
        Self::new(item)
    }
}

/// Point-in-time totals for an inventory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Days advanced so far.
    pub day: u64,
    pub items: usize,
    /// Items with `days_remaining <= 0`.
    pub expired: usize,
    pub total_quality: i64,
}

#[derive(Clone, Debug, Default)]
pub struct Inventory {
    items: Vec<TrackedItem>,
    day: u64,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify each item once and track it.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        Self {
            items: items.into_iter().map(TrackedItem::new).collect(),
            day: 0,
        }
    }

    pub fn push(&mut self, item: impl Into<TrackedItem>) {
        self.items.push(item.into());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackedItem> {
        self.items.iter()
    }

    /// Days advanced since construction.
    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn advance_day(&mut self) {
        for tracked in self.items.iter_mut() {
            tracked.update();
            let item = tracked.item();
            trace!(
                name = %item.name,
                category = %tracked.category(),
                days_remaining = item.days_remaining,
                quality = item.quality,
                "updated item"
            );
        }
        self.finish_day();
    }

    /// [`advance_day`](Self::advance_day) on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn advance_day_par(&mut self) {
        use rayon::prelude::*;

        self.items.par_iter_mut().for_each(TrackedItem::update);
        self.finish_day();
    }

    pub fn advance_days(&mut self, days: usize) {
        for _ in 0..days {
            self.advance_day();
        }
    }

    /// Advance `days` days, calling `observe` after each one.
    pub fn advance_days_with<F>(&mut self, days: usize, mut observe: F)
    where
        F: FnMut(u64, &Inventory),
    {
        for _ in 0..days {
            self.advance_day();
            observe(self.day, self);
        }
    }

    /// Advance `days` days and collect the summary after each one.
    pub fn history(&mut self, days: usize) -> Vec<Summary> {
        let mut out = Vec::with_capacity(days);
        self.advance_days_with(days, |_, inv| out.push(inv.summary()));
        out
    }

    pub fn summary(&self) -> Summary {
        Summary {
            day: self.day,
            items: self.items.len(),
            expired: self.items.iter().filter(|t| t.item().is_expired()).count(),
            total_quality: self.items.iter().map(|t| i64::from(t.item().quality)).sum(),
        }
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items.into_iter().map(TrackedItem::into_inner).collect()
    }

    fn finish_day(&mut self) {
        self.day += 1;
        debug!(
            day = self.day,
            items = self.items.len(),
            expired = self.items.iter().filter(|t| t.item().is_expired()).count(),
            "advanced inventory"
        );
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a TrackedItem;
    type IntoIter = std::slice::Iter<'a, TrackedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
