//! Best-fit free space search.
//!
//! Every eligible shelf, every fragment on it and every allowed orientation is
//! scored by the volume left unused in the fragment:
//!
//! ```text
//! waste = (frag_w - w) * (frag_h - h) * (frag_d - d)
//! ```
//!
//! The scan runs over shelves in list order, fragments in list order and
//! orientations in [`Orientation::ALL`] order. A candidate replaces the
//! current best only when its waste is strictly smaller, so ties go to the
//! first candidate seen.

use shelfpack_core::{Item, Orientation, Shelf, Vector3};

/// Where and how an item should be placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Index of the shelf in the session's shelf list.
    pub shelf_index: usize,
    /// Index of the fragment in that shelf's fragment list.
    pub fragment_index: usize,
    /// Placement origin (the fragment's minimum corner).
    pub origin: Vector3<f64>,
    /// Rotated item dimensions.
    pub dims: Vector3<f64>,
    /// Orientation that produced `dims`.
    pub orientation: Orientation,
    /// Unused fragment volume.
    pub waste: f64,
}

/// Finds the minimal-waste fit for `item`, or `None` when no eligible shelf
/// has a fragment that can hold it in any orientation.
pub fn find_best_fit(shelves: &[Shelf], item: &Item) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (shelf_index, shelf) in shelves.iter().enumerate() {
        if !shelf.admits(item.category()) {
            continue;
        }

        for (fragment_index, fragment) in shelf.fragments().iter().enumerate() {
            for orientation in Orientation::ALL {
                let dims = orientation.apply(item.dims());
                if !fragment.fits(&dims) {
                    continue;
                }

                let waste = fragment.waste(&dims);
                if best.map_or(true, |b| waste < b.waste) {
                    best = Some(Candidate {
                        shelf_index,
                        fragment_index,
                        origin: *fragment.origin(),
                        dims,
                        orientation,
                        waste,
                    });
                }
            }
        }
    }

    best
}
