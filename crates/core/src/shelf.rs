//! Shelving units.

use crate::compat::{CompatibilityRules, ShelfCompatibility};
use crate::fragment::FreeSpace;
use crate::geometry::volume;
use crate::placement::Placement;
use nalgebra::Vector3;

/// A fixed-size shelf holding placements and the free space around them.
#[derive(Debug, Clone, PartialEq)]
pub struct Shelf {
    /// Identifier, unique within a session.
    id: usize,

    /// Dimensions (width, height, depth).
    dims: Vector3<f64>,

    /// Category lock.
    compatibility: ShelfCompatibility,

    /// Placements in the order they were recorded.
    placements: Vec<Placement>,

    /// Free fragments available for new placements.
    fragments: Vec<FreeSpace>,
}

impl Shelf {
    /// Creates an empty, open shelf whose whole volume is one free fragment.
    pub fn new(id: usize, dims: Vector3<f64>) -> Self {
        Self {
            id,
            dims,
            compatibility: ShelfCompatibility::Open,
            placements: Vec::new(),
            fragments: vec![FreeSpace::full(dims)],
        }
    }

    /// Rebuilds a shelf from persisted parts.
    pub fn restore(
        id: usize,
        dims: Vector3<f64>,
        compatibility: ShelfCompatibility,
        placements: Vec<Placement>,
        fragments: Vec<FreeSpace>,
    ) -> Self {
        Self {
            id,
            dims,
            compatibility,
            placements,
            fragments,
        }
    }

    /// Returns the identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the dimensions.
    pub fn dims(&self) -> &Vector3<f64> {
        &self.dims
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dims.x
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dims.y
    }

    /// Returns the depth.
    pub fn depth(&self) -> f64 {
        self.dims.z
    }

    /// Returns the compatibility state.
    pub fn compatibility(&self) -> &ShelfCompatibility {
        &self.compatibility
    }

    /// True if an item of `category` may go on this shelf.
    pub fn admits(&self, category: &str) -> bool {
        self.compatibility.admits(category)
    }

    /// Returns the placements.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns the free fragments.
    pub fn fragments(&self) -> &[FreeSpace] {
        &self.fragments
    }

    /// Total shelf volume.
    pub fn volume(&self) -> f64 {
        volume(&self.dims)
    }

    /// Sum of placed volumes.
    pub fn placed_volume(&self) -> f64 {
        self.placements.iter().map(Placement::volume).sum()
    }

    /// Sum of fragment volumes.
    pub fn free_volume(&self) -> f64 {
        self.fragments.iter().map(FreeSpace::volume).sum()
    }

    /// Records a placement that consumed the fragment at `fragment_index` and
    /// appends the leftover fragments.
    ///
    /// Locks the shelf's compatibility if this is its first placement.
    ///
    /// # Panics
    ///
    /// Panics if `fragment_index` is out of range.
    pub fn commit(
        &mut self,
        rules: &CompatibilityRules,
        fragment_index: usize,
        placement: Placement,
        leftovers: impl IntoIterator<Item = FreeSpace>,
    ) {
        self.compatibility.lock(rules, placement.category());
        self.fragments.remove(fragment_index);
        self.fragments.extend(leftovers);
        self.placements.push(placement);
    }
}
