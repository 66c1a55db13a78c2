//! Free space fragments inside a shelf.

use crate::geometry::volume;
use nalgebra::Vector3;

/// An empty axis-aligned cuboid available for future placements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeSpace {
    /// Minimum corner in the shelf's local frame.
    origin: Vector3<f64>,
    /// Extent along (x, y, z).
    dims: Vector3<f64>,
}

impl FreeSpace {
    /// Creates a fragment from its corner and extent.
    pub fn new(origin: Vector3<f64>, dims: Vector3<f64>) -> Self {
        Self { origin, dims }
    }

    /// Creates a fragment covering a whole shelf.
    pub fn full(shelf_dims: Vector3<f64>) -> Self {
        Self::new(Vector3::zeros(), shelf_dims)
    }

    /// Creates a fragment from six scalars.
    pub fn from_parts(x: f64, y: f64, z: f64, width: f64, height: f64, depth: f64) -> Self {
        Self::new(Vector3::new(x, y, z), Vector3::new(width, height, depth))
    }

    /// Returns the minimum corner.
    pub fn origin(&self) -> &Vector3<f64> {
        &self.origin
    }

    /// Returns the extent.
    pub fn dims(&self) -> &Vector3<f64> {
        &self.dims
    }

    /// Returns the maximum corner.
    pub fn max_corner(&self) -> Vector3<f64> {
        self.origin + self.dims
    }

    /// Returns the volume. Degenerate fragments have zero or negative volume.
    pub fn volume(&self) -> f64 {
        volume(&self.dims)
    }

    /// True if any extent is zero or negative.
    pub fn is_degenerate(&self) -> bool {
        self.dims.iter().any(|v| *v <= 0.0)
    }

    /// True if a box of `dims` fits inside this fragment.
    pub fn fits(&self, dims: &Vector3<f64>) -> bool {
        dims.x <= self.dims.x && dims.y <= self.dims.y && dims.z <= self.dims.z
    }

    /// Unused volume left when a box of `dims` is placed in this fragment.
    pub fn waste(&self, dims: &Vector3<f64>) -> f64 {
        (self.dims.x - dims.x) * (self.dims.y - dims.y) * (self.dims.z - dims.z)
    }

    /// True if the fragment lies within `[0, bounds]` on every axis.
    pub fn is_within(&self, bounds: &Vector3<f64>) -> bool {
        let max = self.max_corner();
        (0..3).all(|axis| self.origin[axis] >= 0.0 && max[axis] <= bounds[axis])
    }
}
