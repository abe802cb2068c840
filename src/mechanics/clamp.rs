//! Clamp mechanics: saturating steps toward a floor or ceiling.
//!
//! Item fields change through these helpers, which own the overflow and
//! bound policy so the category rules never see it.

use crate::{DAYS_FLOOR, Item, QUALITY_MAX, QUALITY_MIN};

/// Saturating step down: `max(value - amount, floor)`.
///
/// Never overflows, even when `value - amount` is unrepresentable. Returns
/// `value` untouched once it sits on `floor`.
#[inline]
pub fn decrement_clamped(value: i32, amount: i32, floor: i32) -> i32 {
    if value == floor {
        return value;
    }
    value.saturating_sub(amount).max(floor)
}

/// Saturating step up: `min(value + amount, ceiling)`.
///
/// Never overflows. A no-op once `value` sits on `ceiling`.
#[inline]
pub fn increment_clamped(value: i32, amount: i32, ceiling: i32) -> i32 {
    if value == ceiling {
        return value;
    }
    value.saturating_add(amount).min(ceiling)
}

/// Lower quality by `amount`, not below [`QUALITY_MIN`].
#[inline]
pub fn decrement_quality(item: &mut Item, amount: i32) {
    item.quality = decrement_clamped(item.quality, amount, QUALITY_MIN);
}

/// Raise quality by `amount`, not above [`QUALITY_MAX`].
#[inline]
pub fn increment_quality(item: &mut Item, amount: i32) {
    item.quality = increment_clamped(item.quality, amount, QUALITY_MAX);
}

/// One day off the countdown; freezes at [`DAYS_FLOOR`].
#[inline]
pub fn decrement_days(item: &mut Item) {
    item.days_remaining = decrement_clamped(item.days_remaining, 1, DAYS_FLOOR);
}
