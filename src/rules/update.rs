//! Daily update rules, one per [`Category`].
//!
//! Every rule picks its quality branch from the *pre-decrement*
//! `days_remaining`, then takes one day off the countdown. Once the
//! countdown is frozen at `i32::MIN` it still reads as expired, so the
//! expired branches keep applying.

use crate::Item;
use crate::mechanics::clamp::{decrement_days, decrement_quality, increment_quality};
use crate::rules::Category;

/// A daily update rule.
pub type Rule = fn(&mut Item);

/// -1 per day, -2 once expired.
pub fn update_normal(item: &mut Item) {
    if item.days_remaining <= 0 {
        decrement_quality(item, 2);
    } else {
        decrement_quality(item, 1);
    }
    decrement_days(item);
}

/// +1 per day regardless of expiry.
// TODO: decide whether expired items should gain +2 per day, as in the
// classic kata.
pub fn update_ages_well(item: &mut Item) {
    increment_quality(item, 1);
    decrement_days(item);
}

/// Quality untouched; the countdown still runs.
pub fn update_never_degrades(item: &mut Item) {
    decrement_days(item);
}

pub fn update_time_limited(item: &mut Item) {
    if item.days_remaining <= 0 {
        item.quality = 0;
    } else if item.days_remaining <= 5 {
        decrement_quality(item, 3);
    } else if item.days_remaining <= 10 {
        decrement_quality(item, 2);
    } else {
        decrement_quality(item, 1);
    }
    decrement_days(item);
}

/// Twice the normal rate: -2 per day, -4 once expired.
pub fn update_degrades_fast(item: &mut Item) {
    if item.days_remaining <= 0 {
        decrement_quality(item, 4);
    } else {
        decrement_quality(item, 2);
    }
    decrement_days(item);
}

impl Category {
    /// The rule for this category as a plain function value.
    pub fn rule(self) -> Rule {
        match self {
            Category::Normal => update_normal,
            Category::AgesWell => update_ages_well,
            Category::NeverDegrades => update_never_degrades,
            Category::TimeLimited => update_time_limited,
            Category::DegradesFast => update_degrades_fast,
        }
    }
}

/// Advance `item` one day under `category`'s rule.
#[inline]
pub fn update_with_category(item: &mut Item, category: Category) {
    match category {
        Category::TimeLimited => update_time_limited(item),
        Category::AgesWell => update_ages_well(item),
        Category::DegradesFast => update_degrades_fast(item),
        Category::NeverDegrades => update_never_degrades(item),
        Category::Normal => update_normal(item),
    }
}

/// Advance `item` one day, classifying it by name on this call.
///
/// Prefer [`crate::stock::TrackedItem`] when the same item is updated
/// repeatedly.
#[inline]
pub fn update_item(item: &mut Item) {
    update_with_category(item, Category::from_name(&item.name));
}
