// tests/properties.rs
use gilded_rose::stock::{StockConfig, generate};
use gilded_rose::{Category, Item, QUALITY_MAX, QUALITY_MIN, update_with_category};
use proptest::prelude::*;

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Normal),
        Just(Category::AgesWell),
        Just(Category::NeverDegrades),
        Just(Category::TimeLimited),
        Just(Category::DegradesFast),
    ]
}

fn arb_days() -> impl Strategy<Value = i32> {
    prop_oneof![
        -20i32..=20,
        any::<i32>(),
        Just(i32::MIN),
        Just(i32::MIN + 1),
    ]
}

fn arb_quality() -> impl Strategy<Value = i32> {
    QUALITY_MIN..=QUALITY_MAX
}

fn run(category: Category, days: i32, quality: i32, steps: usize) -> Vec<Item> {
    let mut item = Item::new("x", days, quality);
    let mut trace = vec![item.clone()];
    for _ in 0..steps {
        update_with_category(&mut item, category);
        trace.push(item.clone());
    }
    trace
}

proptest! {
    #[test]
    fn quality_stays_in_range(
        category in arb_category(),
        days in arb_days(),
        quality in arb_quality(),
        steps in 1usize..60,
    ) {
        for item in run(category, days, quality, steps) {
            prop_assert!((QUALITY_MIN..=QUALITY_MAX).contains(&item.quality), "{:?}", item);
        }
    }

    #[test]
    fn countdown_drops_by_one_until_frozen(
        category in arb_category(),
        days in arb_days(),
        quality in arb_quality(),
        steps in 1usize..30,
    ) {
        let trace = run(category, days, quality, steps);
        for pair in trace.windows(2) {
            let (before, after) = (pair[0].days_remaining, pair[1].days_remaining);
            if before == i32::MIN {
                prop_assert_eq!(after, i32::MIN);
            } else {
                prop_assert_eq!(after, before - 1);
            }
        }
    }

    #[test]
    fn legendary_quality_is_invariant(
        days in arb_days(),
        quality in any::<i32>(),
        steps in 1usize..60,
    ) {
        for item in run(Category::NeverDegrades, days, quality, steps) {
            prop_assert_eq!(item.quality, quality);
        }
    }

    #[test]
    fn aged_quality_never_drops_and_saturates(
        days in arb_days(),
        quality in arb_quality(),
        steps in 1usize..80,
    ) {
        let trace = run(Category::AgesWell, days, quality, steps);
        for pair in trace.windows(2) {
            prop_assert!(pair[1].quality >= pair[0].quality);
        }
        let last = trace.last().map(|i| i.quality);
        prop_assert_eq!(last, Some((quality + steps as i32).min(QUALITY_MAX)));
    }

    #[test]
    fn degrading_quality_never_rises(
        category in prop_oneof![
            Just(Category::Normal),
            Just(Category::TimeLimited),
            Just(Category::DegradesFast),
        ],
        days in arb_days(),
        quality in arb_quality(),
        steps in 1usize..80,
    ) {
        let trace = run(category, days, quality, steps);
        for pair in trace.windows(2) {
            prop_assert!(pair[1].quality <= pair[0].quality);
        }
        // Every day costs at least 1, so 50+ days empty any in-range quality.
        if steps >= 60 {
            prop_assert_eq!(trace.last().map(|i| i.quality), Some(0));
        }
    }

    #[test]
    fn time_limited_is_worthless_once_expired(
        days in arb_days(),
        quality in arb_quality(),
        steps in 1usize..40,
    ) {
        let trace = run(Category::TimeLimited, days, quality, steps);
        let mut expired = false;
        for pair in trace.windows(2) {
            expired |= pair[0].days_remaining <= 0;
            if expired {
                prop_assert_eq!(pair[1].quality, 0);
            }
        }
    }

    #[test]
    fn category_rule_table_matches_dispatch(
        category in arb_category(),
        days in arb_days(),
        quality in arb_quality(),
    ) {
        let mut a = Item::new("x", days, quality);
        let mut b = a.clone();
        update_with_category(&mut a, category);
        (category.rule())(&mut b);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn generated_stock_keeps_invariants(seed in any::<u64>(), days in 0usize..40) {
        let cfg = StockConfig { count: 64, ..StockConfig::default() };
        let mut inv = generate(&cfg, seed).expect("default config is valid");
        inv.advance_days(days);
        prop_assert_eq!(inv.day(), days as u64);
        for t in &inv {
            let q = t.item().quality;
            if t.category() != Category::NeverDegrades {
                prop_assert!((QUALITY_MIN..=QUALITY_MAX).contains(&q));
            }
        }
    }
}
