//! Axis conventions and item orientations.
//!
//! All extents are stored as `Vector3<f64>` in `(width, height, depth)` order,
//! i.e. x = width, y = height, z = depth in the shelf's local frame.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns true if every component is finite and strictly positive.
pub fn is_positive_extent(dims: &Vector3<f64>) -> bool {
    dims.iter().all(|v| v.is_finite() && *v > 0.0)
}

/// Volume of an axis-aligned extent.
pub fn volume(dims: &Vector3<f64>) -> f64 {
    dims.x * dims.y * dims.z
}

/// One of the three axis permutations an item may be placed in.
///
/// Only these three are ever tried; the remaining three box rotations are
/// deliberately not part of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// `(w, h, d)`: as submitted.
    Original,
    /// `(h, w, d)`: width and height swapped.
    SwapWidthHeight,
    /// `(d, w, h)`: depth laid along the width axis.
    DepthFirst,
}

impl Orientation {
    /// All orientations in search order.
    pub const ALL: [Orientation; 3] = [
        Orientation::Original,
        Orientation::SwapWidthHeight,
        Orientation::DepthFirst,
    ];

    /// Applies this orientation to `(w, h, d)` dimensions.
    pub fn apply(self, dims: &Vector3<f64>) -> Vector3<f64> {
        match self {
            Orientation::Original => *dims,
            Orientation::SwapWidthHeight => Vector3::new(dims.y, dims.x, dims.z),
            Orientation::DepthFirst => Vector3::new(dims.z, dims.x, dims.y),
        }
    }

    /// Position of this orientation in [`Orientation::ALL`].
    pub fn index(self) -> usize {
        match self {
            Orientation::Original => 0,
            Orientation::SwapWidthHeight => 1,
            Orientation::DepthFirst => 2,
        }
    }

    /// Inverse of [`Orientation::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the orientation that maps `source` onto `rotated`, if any.
    ///
    /// When several orientations produce the same extent (e.g. a cube) the
    /// first in search order is returned.
    pub fn between(source: &Vector3<f64>, rotated: &Vector3<f64>) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|o| o.apply(source) == *rotated)
    }
}
