//! Integration tests for shelfpack-core.

use approx::assert_relative_eq;
use shelfpack_core::{
    CompatibilityRules, FreeSpace, Item, Orientation, PackingResult, Placement, PlacementStats,
    Shelf, ShelfCompatibility, Vector3,
};

fn shelf_dims() -> Vector3<f64> {
    Vector3::new(100.0, 50.0, 60.0)
}

mod compatibility_tests {
    use super::*;

    #[test]
    fn test_rules_from_iterator() {
        let rules: CompatibilityRules = [
            ("toxic", vec!["toxic"]),
            ("flammable", vec!["flammable", "normal"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(rules.len(), 2);
        assert!(rules.lock_for("flammable").contains("normal"));
        // Not symmetric: normal has no rule and locks to itself
        assert_eq!(rules.lock_for("normal").len(), 1);
    }

    #[test]
    fn test_shelf_lock_is_permanent() {
        let rules = CompatibilityRules::new().with_rule("flammable", ["flammable", "normal"]);
        let mut shelf = Shelf::new(0, shelf_dims());

        let first = Item::new(10.0, 10.0, 10.0, "flammable");
        shelf.commit(
            &rules,
            0,
            Placement::of_item(&first, Vector3::zeros(), Orientation::Original),
            [FreeSpace::from_parts(10.0, 0.0, 0.0, 90.0, 10.0, 10.0)],
        );
        let locked = shelf.compatibility().clone();

        let second = Item::new(10.0, 10.0, 10.0, "normal");
        shelf.commit(
            &rules,
            0,
            Placement::of_item(&second, Vector3::new(10.0, 0.0, 0.0), Orientation::Original),
            [],
        );

        assert_eq!(shelf.compatibility(), &locked);
        assert!(!shelf.admits("toxic"));
        assert_eq!(
            ShelfCompatibility::from_set(Default::default()),
            ShelfCompatibility::Open
        );
    }
}

mod result_tests {
    use super::*;

    fn result() -> PackingResult {
        let rules = CompatibilityRules::new();
        let mut used = Shelf::new(0, shelf_dims());
        let item = Item::new(40.0, 20.0, 30.0, "normal").with_metadata("red");
        used.commit(
            &rules,
            0,
            Placement::of_item(&item, Vector3::zeros(), Orientation::SwapWidthHeight),
            [
                FreeSpace::from_parts(20.0, 0.0, 0.0, 80.0, 40.0, 30.0),
                FreeSpace::from_parts(0.0, 40.0, 0.0, 20.0, 10.0, 30.0),
                FreeSpace::from_parts(0.0, 0.0, 30.0, 20.0, 40.0, 30.0),
            ],
        );

        PackingResult {
            shelves: vec![used, Shelf::new(1, shelf_dims())],
            unplaced: vec![Item::new(500.0, 1.0, 1.0, "normal")],
            selected_shelf_id: Some(1),
        }
    }

    #[test]
    fn test_metrics() {
        let result = result();
        let free = 80.0 * 40.0 * 30.0 + 20.0 * 10.0 * 30.0 + 20.0 * 40.0 * 30.0 + 300_000.0;

        assert_eq!(result.placed_count(), 1);
        assert_eq!(result.unplaced_count(), 1);
        assert_relative_eq!(result.capacity_volume(), 600_000.0);
        assert_relative_eq!(result.free_volume(), free);
        assert_relative_eq!(result.placed_volume(), 24_000.0);
        assert_relative_eq!(
            result.utilization_pct(),
            (600_000.0 - free) / 600_000.0 * 100.0
        );
    }

    #[test]
    fn test_visible_shelves_follow_selection() {
        let mut result = result();
        let ids: Vec<usize> = result.visible_shelves().map(Shelf::id).collect();
        assert_eq!(ids, vec![1]);

        result.selected_shelf_id = None;
        assert_eq!(result.visible_shelves().count(), 2);
    }

    #[test]
    fn test_snapshot_carries_everything() {
        let result = result();
        let snapshot = result.to_snapshot();

        assert_eq!(snapshot.shelves.len(), 2);
        assert_eq!(snapshot.placement_count(), 1);
        assert_eq!(snapshot.shelves[0].fragments.as_ref().map(Vec::len), Some(3));
        assert!(snapshot.shelves[0].compatibility.is_some());
        assert!(snapshot.shelves[1].compatibility.is_none());
        assert_eq!(snapshot.unplaced, result.unplaced);

        // Placed items are re-submitted with their placed extent
        let items = snapshot.placed_items();
        assert_eq!(items[0].dims(), &Vector3::new(20.0, 40.0, 30.0));
        assert_eq!(items[0].metadata(), Some("red"));
    }

    #[test]
    fn test_placement_stats() {
        let result = result();
        let stats: PlacementStats = result.placement_stats();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.category_distribution.get("normal"), Some(&1));
        assert_eq!(
            stats.orientation_distribution.get(&Orientation::SwapWidthHeight),
            Some(&1)
        );
    }
}
