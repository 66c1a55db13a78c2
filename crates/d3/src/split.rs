//! Guillotine split of the fragment consumed by a placement.

use shelfpack_core::{FreeSpace, SplitPolicy, Vector3};

/// Leftover fragments for a box of `dims` placed at `origin` inside
/// `consumed`, on a shelf of `shelf_dims`.
///
/// At most three fragments are returned, in +X, +Y, +Z order, each starting
/// at the box's far face on its axis. See [`SplitPolicy`] for how far each
/// one reaches.
pub fn split(
    shelf_dims: &Vector3<f64>,
    consumed: &FreeSpace,
    origin: &Vector3<f64>,
    dims: &Vector3<f64>,
    policy: SplitPolicy,
) -> Vec<FreeSpace> {
    let candidates = match policy {
        SplitPolicy::ShelfBounded | SplitPolicy::ShelfBoundedFiltered => {
            shelf_bounded(shelf_dims, origin, dims)
        }
        SplitPolicy::Guillotine => guillotine(consumed, origin, dims),
    };

    candidates
        .into_iter()
        .filter(|fragment| !(policy.filters_degenerate() && fragment.is_degenerate()))
        .collect()
}

/// Slabs that keep the box's extent on two axes and run to the shelf wall on
/// the third.
fn shelf_bounded(
    shelf_dims: &Vector3<f64>,
    origin: &Vector3<f64>,
    dims: &Vector3<f64>,
) -> [FreeSpace; 3] {
    let far = origin + dims;
    [0, 1, 2].map(|axis| {
        let mut leftover_origin = *origin;
        leftover_origin[axis] = far[axis];

        let mut leftover_dims = *dims;
        leftover_dims[axis] = shelf_dims[axis] - far[axis];

        FreeSpace::new(leftover_origin, leftover_dims)
    })
}

/// Slabs that, together with the box, exactly partition `consumed`.
fn guillotine(consumed: &FreeSpace, origin: &Vector3<f64>, dims: &Vector3<f64>) -> [FreeSpace; 3] {
    let far = origin + dims;
    let start = consumed.origin();
    let extent = consumed.dims();
    let limit = consumed.max_corner();

    [
        FreeSpace::new(
            Vector3::new(far.x, start.y, start.z),
            Vector3::new(limit.x - far.x, extent.y, extent.z),
        ),
        FreeSpace::new(
            Vector3::new(origin.x, far.y, start.z),
            Vector3::new(dims.x, limit.y - far.y, extent.z),
        ),
        FreeSpace::new(
            Vector3::new(origin.x, origin.y, far.z),
            Vector3::new(dims.x, dims.y, limit.z - far.z),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn shelf() -> Vector3<f64> {
        Vector3::new(100.0, 50.0, 60.0)
    }

    #[test]
    fn test_split_from_full_shelf() {
        let consumed = FreeSpace::full(shelf());
        let leftovers = split(
            &shelf(),
            &consumed,
            &Vector3::zeros(),
            &Vector3::new(40.0, 20.0, 30.0),
            SplitPolicy::ShelfBoundedFiltered,
        );

        assert_eq!(
            leftovers,
            vec![
                FreeSpace::from_parts(40.0, 0.0, 0.0, 60.0, 20.0, 30.0),
                FreeSpace::from_parts(0.0, 20.0, 0.0, 40.0, 30.0, 30.0),
                FreeSpace::from_parts(0.0, 0.0, 30.0, 40.0, 20.0, 30.0),
            ]
        );
    }

    #[test]
    fn test_degenerate_kept_only_when_unfiltered() {
        let consumed = FreeSpace::full(shelf());
        let dims = Vector3::new(100.0, 20.0, 30.0);

        let unfiltered = split(&shelf(), &consumed, &Vector3::zeros(), &dims, SplitPolicy::ShelfBounded);
        assert_eq!(unfiltered.len(), 3);
        assert!(unfiltered[0].is_degenerate());
        assert_relative_eq!(unfiltered[0].volume(), 0.0);

        let filtered = split(
            &shelf(),
            &consumed,
            &Vector3::zeros(),
            &dims,
            SplitPolicy::ShelfBoundedFiltered,
        );
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|f| !f.is_degenerate()));
    }

    #[test]
    fn test_shelf_bounded_reaches_past_fragment() {
        // Fragment only 50 wide, but leftovers run to the shelf wall at 100
        let consumed = FreeSpace::from_parts(0.0, 20.0, 0.0, 50.0, 30.0, 30.0);
        let origin = Vector3::new(0.0, 20.0, 0.0);
        let dims = Vector3::new(10.0, 10.0, 10.0);

        let leftovers = split(&shelf(), &consumed, &origin, &dims, SplitPolicy::ShelfBoundedFiltered);
        assert_eq!(leftovers[0], FreeSpace::from_parts(10.0, 20.0, 0.0, 90.0, 10.0, 10.0));
        assert_eq!(leftovers[1], FreeSpace::from_parts(0.0, 30.0, 0.0, 10.0, 20.0, 10.0));
        assert_eq!(leftovers[2], FreeSpace::from_parts(0.0, 20.0, 10.0, 10.0, 10.0, 50.0));
    }

    #[test]
    fn test_guillotine_partitions_fragment() {
        let consumed = FreeSpace::from_parts(0.0, 20.0, 0.0, 50.0, 30.0, 30.0);
        let origin = Vector3::new(0.0, 20.0, 0.0);
        let dims = Vector3::new(10.0, 10.0, 10.0);

        let leftovers = split(&shelf(), &consumed, &origin, &dims, SplitPolicy::Guillotine);
        assert_eq!(
            leftovers,
            vec![
                FreeSpace::from_parts(10.0, 20.0, 0.0, 40.0, 30.0, 30.0),
                FreeSpace::from_parts(0.0, 30.0, 0.0, 10.0, 20.0, 30.0),
                FreeSpace::from_parts(0.0, 20.0, 10.0, 10.0, 10.0, 20.0),
            ]
        );

        let covered: f64 = leftovers.iter().map(FreeSpace::volume).sum::<f64>() + 1000.0;
        assert_relative_eq!(covered, consumed.volume());
        let consumed_max = consumed.max_corner();
        for fragment in &leftovers {
            let max = fragment.max_corner();
            assert!((0..3).all(|axis| max[axis] <= consumed_max[axis]));
        }
    }

    #[test]
    fn test_exact_fit_leaves_nothing_when_filtered() {
        let consumed = FreeSpace::full(shelf());
        for policy in [SplitPolicy::ShelfBoundedFiltered, SplitPolicy::Guillotine] {
            let leftovers = split(&shelf(), &consumed, &Vector3::zeros(), &shelf(), policy);
            assert!(leftovers.is_empty());
        }
    }
}
