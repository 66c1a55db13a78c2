//! Placement representation for positioned items.

use crate::geometry::{volume, Orientation};
use crate::item::Item;
use nalgebra::Vector3;
use std::collections::HashMap;

/// An item fixed at a position inside a shelf.
///
/// Placements are immutable once recorded; sessions only ever append them.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Minimum corner in the shelf's local frame.
    origin: Vector3<f64>,

    /// Dimensions after the orientation was applied.
    dims: Vector3<f64>,

    /// Category of the source item.
    category: String,

    /// Opaque metadata of the source item.
    metadata: Option<String>,

    /// Orientation used, when known.
    orientation: Option<Orientation>,
}

impl Placement {
    /// Creates a placement from its raw parts.
    pub fn new(
        origin: Vector3<f64>,
        dims: Vector3<f64>,
        category: impl Into<String>,
        metadata: Option<String>,
    ) -> Self {
        Self {
            origin,
            dims,
            category: category.into(),
            metadata,
            orientation: None,
        }
    }

    /// Places `item` at `origin` using `orientation`.
    pub fn of_item(item: &Item, origin: Vector3<f64>, orientation: Orientation) -> Self {
        Self {
            origin,
            dims: orientation.apply(item.dims()),
            category: item.category().to_string(),
            metadata: item.metadata().map(str::to_string),
            orientation: Some(orientation),
        }
    }

    /// Records which orientation produced this placement.
    pub fn with_orientation(mut self, orientation: Option<Orientation>) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns the minimum corner.
    pub fn origin(&self) -> &Vector3<f64> {
        &self.origin
    }

    /// Returns the rotated dimensions.
    pub fn dims(&self) -> &Vector3<f64> {
        &self.dims
    }

    /// Returns the maximum corner.
    pub fn max_corner(&self) -> Vector3<f64> {
        self.origin + self.dims
    }

    /// Returns the category label.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the metadata, if any.
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// Returns the orientation, if recorded.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Returns the occupied volume.
    pub fn volume(&self) -> f64 {
        volume(&self.dims)
    }

    /// Rebuilds an item from this placement, treating the placed extent as the
    /// submitted one.
    pub fn to_item(&self) -> Item {
        Item::new(self.dims.x, self.dims.y, self.dims.z, self.category.clone())
            .with_optional_metadata(self.metadata.clone())
    }

    /// Checks whether two placements share interior volume.
    pub fn overlaps(&self, other: &Placement) -> bool {
        let self_max = self.max_corner();
        let other_max = other.max_corner();
        (0..3).all(|axis| {
            self.origin[axis] < other_max[axis] && other.origin[axis] < self_max[axis]
        })
    }

    /// Checks that the placement lies within a shelf of the given dimensions.
    pub fn is_within(&self, bounds: &Vector3<f64>) -> bool {
        let max = self.max_corner();
        (0..3).all(|axis| self.origin[axis] >= 0.0 && max[axis] <= bounds[axis])
    }
}

/// Placement statistics for a set of placements.
#[derive(Debug, Clone, Default)]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Placements per category.
    pub category_distribution: HashMap<String, usize>,
    /// Placements per orientation (placements without one are not counted).
    pub orientation_distribution: HashMap<Orientation, usize>,
    /// Total placed volume.
    pub volume: f64,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements<'a>(placements: impl IntoIterator<Item = &'a Placement>) -> Self {
        let mut stats = Self::default();

        for p in placements {
            stats.count += 1;
            stats.volume += p.volume();
            *stats
                .category_distribution
                .entry(p.category.clone())
                .or_insert(0) += 1;
            if let Some(orientation) = p.orientation {
                *stats.orientation_distribution.entry(orientation).or_insert(0) += 1;
            }
        }

        stats
    }
}
