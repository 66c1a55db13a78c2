//! Property-based tests for the packing sessions.
//!
//! Random item streams are packed onto small shelves and checked for:
//! 1. Conservation: every submitted item is either placed or unplaced
//! 2. Rotation validity: placed extents are one of the three orientations
//! 3. Compatibility: every shelf only holds categories its lock admits
//! 4. Capacity and disjointness under the guillotine split
//! 5. Resuming from a snapshot matches an uninterrupted run

use proptest::prelude::*;
use shelfpack_core::Orientation;
use shelfpack_d3::{
    CompatibilityRules, IncrementalPacker, Item, Packer, PackerConfig, PlaceOutcome, ShelfPacker,
    SplitPolicy,
};

const CATEGORIES: [&str; 4] = ["normal", "toxic", "flammable", "acid"];

fn rules() -> CompatibilityRules {
    CompatibilityRules::new()
        .with_rule("toxic", ["toxic"])
        .with_rule("flammable", ["flammable", "normal"])
        .with_rule("normal", ["normal", "flammable", "acid"])
}

/// Whole-number extents keep the fragment arithmetic exact.
fn item_strategy() -> impl Strategy<Value = Item> {
    (1u32..=25, 1u32..=25, 1u32..=25, 0usize..CATEGORIES.len()).prop_map(|(w, h, d, c)| {
        Item::new(f64::from(w), f64::from(h), f64::from(d), CATEGORIES[c])
    })
}

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(item_strategy(), 0..40)
}

fn policy_strategy() -> impl Strategy<Value = SplitPolicy> {
    prop_oneof![
        Just(SplitPolicy::ShelfBounded),
        Just(SplitPolicy::ShelfBoundedFiltered),
        Just(SplitPolicy::Guillotine),
    ]
}

fn config(policy: SplitPolicy) -> PackerConfig {
    PackerConfig::new(40.0, 30.0, 35.0, 3).with_split_policy(policy)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn conservation(items in items_strategy(), policy in policy_strategy()) {
        let mut packer = ShelfPacker::new(config(policy), rules()).unwrap();
        packer.add_items(items.clone()).unwrap();
        let stats = packer.place_all();
        let result = packer.result();

        prop_assert_eq!(stats.submitted, items.len());
        prop_assert!(stats.is_balanced());
        prop_assert_eq!(result.placed_count() + result.unplaced_count(), items.len());
    }

    #[test]
    fn placed_extent_is_a_valid_orientation(items in items_strategy(), policy in policy_strategy()) {
        let mut packer = ShelfPacker::new(config(policy), rules()).unwrap();
        packer.add_items(items.clone()).unwrap();

        for item in &items {
            match packer.place_next().unwrap() {
                PlaceOutcome::Placed { placement, .. } => {
                    let orientation = placement.orientation().unwrap();
                    prop_assert_eq!(placement.dims(), &orientation.apply(item.dims()));
                    prop_assert!(Orientation::between(item.dims(), placement.dims()).is_some());
                }
                PlaceOutcome::Unplaced(unplaced) => prop_assert_eq!(&unplaced, item),
            }
        }
    }

    #[test]
    fn shelves_hold_only_admitted_categories(items in items_strategy(), policy in policy_strategy()) {
        let rules = rules();
        let mut packer = ShelfPacker::new(config(policy), rules.clone()).unwrap();
        packer.add_items(items).unwrap();
        let result = packer.pack();

        for shelf in &result.shelves {
            let Some(first) = shelf.placements().first() else {
                prop_assert!(shelf.compatibility().is_open());
                continue;
            };
            let lock = rules.lock_for(first.category());
            prop_assert_eq!(shelf.compatibility().locked_set(), Some(&lock));
            for placement in shelf.placements() {
                prop_assert!(lock.contains(placement.category()));
            }
        }
    }

    #[test]
    fn guillotine_respects_capacity(items in items_strategy()) {
        let mut packer = ShelfPacker::new(config(SplitPolicy::Guillotine), rules()).unwrap();
        packer.add_items(items).unwrap();
        let result = packer.pack();

        for shelf in &result.shelves {
            prop_assert!(shelf.placed_volume() <= shelf.volume());
            prop_assert!((shelf.placed_volume() + shelf.free_volume() - shelf.volume()).abs() < 1e-6);

            let placements = shelf.placements();
            for (i, a) in placements.iter().enumerate() {
                prop_assert!(a.is_within(shelf.dims()));
                for b in &placements[..i] {
                    prop_assert!(!a.overlaps(b));
                }
            }
            for fragment in shelf.fragments() {
                prop_assert!(!fragment.is_degenerate());
                prop_assert!(fragment.is_within(shelf.dims()));
            }
        }
    }

    #[test]
    fn resume_matches_uninterrupted_run(
        items in items_strategy(),
        split_at in 0usize..40,
        policy in policy_strategy(),
    ) {
        let split_at = split_at.min(items.len());
        let (first, second) = items.split_at(split_at);

        let mut uninterrupted = ShelfPacker::new(config(policy), rules()).unwrap();
        uninterrupted.add_items(items.iter().cloned()).unwrap();
        let expected = uninterrupted.pack();

        let mut before = ShelfPacker::new(config(policy), rules()).unwrap();
        before.add_items(first.iter().cloned()).unwrap();
        let snapshot = before.pack().to_snapshot();

        let mut resumed = IncrementalPacker::new(config(policy), rules(), Some(snapshot)).unwrap();
        resumed.add_items(second.iter().cloned()).unwrap();
        let actual = resumed.pack();

        prop_assert_eq!(actual.shelves, expected.shelves);
        prop_assert_eq!(actual.unplaced, expected.unplaced);
    }

    #[test]
    fn resume_without_new_items_changes_nothing(items in items_strategy(), policy in policy_strategy()) {
        let mut packer = ShelfPacker::new(config(policy), rules()).unwrap();
        packer.add_items(items).unwrap();
        let before = packer.pack();

        let resumed = IncrementalPacker::new(config(policy), rules(), Some(before.to_snapshot()))
            .unwrap()
            .pack();

        prop_assert_eq!(resumed.shelves, before.shelves);
        prop_assert_eq!(resumed.unplaced, before.unplaced);
    }
}
