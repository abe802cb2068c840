/*!
`gilded_rose` — item-update rules for the Gilded Rose inventory.

What it does
- Derives a [`Category`] from an item's name by prefix match
  ("Backstage pass", "Aged", "Sulfuras", "Conjured", otherwise normal).
- Advances an [`Item`] by one simulated day: `days_remaining` drops by one
  (freezing at `i32::MIN`) and `quality` moves by the category's rule,
  clamped to `[0, 50]`.
- All field changes go through saturating helpers in [`mechanics::clamp`],
  so the rules never overflow.

How to use (call surface only)
- One-off: `item.update()` classifies by name on every call.
- Repeated: wrap items in [`stock::TrackedItem`] or an [`stock::Inventory`],
  which classify once and dispatch on the cached category.
- Plain slices: `advance_days(&mut items, days)`.

What it does NOT do
- No I/O, no persistence, no validation of caller-supplied starting values.
*/

/// Lowest quality any rule will produce.
pub const QUALITY_MIN: i32 = 0;
/// Highest quality any rule will produce.
pub const QUALITY_MAX: i32 = 50;
/// `days_remaining` never drops below this; once there it stays.
pub const DAYS_FLOOR: i32 = i32::MIN;

/// Starting values used by [`Item::named`].
pub const DEFAULT_DAYS_REMAINING: i32 = 30;
pub const DEFAULT_QUALITY: i32 = 50;

/// A named stock item with its sell-by countdown and quality.
///
/// `days_remaining` may go negative once the sell-by date has passed.
/// `quality` is expected in `[QUALITY_MIN, QUALITY_MAX]`; this is not checked
/// on construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub days_remaining: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, days_remaining: i32, quality: i32) -> Self {
        Self { name: name.into(), days_remaining, quality }
    }

    /// Item with the default countdown and full quality.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_DAYS_REMAINING, DEFAULT_QUALITY)
    }

    /// Category inferred from the name. Pure; repeated calls agree.
    #[inline]
    pub fn category(&self) -> Category {
        Category::from_name(&self.name)
    }

    /// Advance one day, classifying by name first.
    #[inline]
    pub fn update(&mut self) {
        rules::update_item(self);
    }

    /// Past the sell-by date (`days_remaining <= 0`).
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.days_remaining <= 0
    }
}

/// Advance every item in `items` by `days` days.
///
/// Each item is classified once per call and then dispatched on that
/// category for all `days` steps.
pub fn advance_days(items: &mut [Item], days: usize) {
    for item in items.iter_mut() {
        let category = item.category();
        for _ in 0..days {
            rules::update_with_category(item, category);
        }
    }
}

pub mod mechanics;
pub mod rules;
pub mod stock;

pub use rules::{Category, ParseCategoryError, Rule, update_item, update_with_category};
pub use stock::{Inventory, Summary, TrackedItem};
