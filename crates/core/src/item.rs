//! Items submitted for packing.

use crate::error::{Error, Result};
use crate::geometry::is_positive_extent;
use nalgebra::Vector3;

/// A rectangular item waiting to be placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Dimensions (width, height, depth) as submitted.
    dims: Vector3<f64>,

    /// Hazard/category label used for shelf compatibility.
    category: String,

    /// Opaque colour or metadata carried through untouched.
    metadata: Option<String>,
}

impl Item {
    /// Creates a new item with the given dimensions and category.
    pub fn new(width: f64, height: f64, depth: f64, category: impl Into<String>) -> Self {
        Self {
            dims: Vector3::new(width, height, depth),
            category: category.into(),
            metadata: None,
        }
    }

    /// Sets the opaque metadata (typically a display colour).
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Sets or clears the metadata.
    pub fn with_optional_metadata(mut self, metadata: Option<String>) -> Self {
        self.metadata = metadata;
        self
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

    /// Returns the category label.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the metadata, if any.
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        crate::geometry::volume(&self.dims)
    }

    /// Checks that every dimension is finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !is_positive_extent(&self.dims) {
            return Err(Error::InvalidItem(format!(
                "All dimensions for '{}' item must be positive, got {}x{}x{}",
                self.category, self.dims.x, self.dims.y, self.dims.z
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_item_accessors() {
        let item = Item::new(10.0, 20.0, 30.0, "acid").with_metadata("blue");
        assert_eq!(item.width(), 10.0);
        assert_eq!(item.height(), 20.0);
        assert_eq!(item.depth(), 30.0);
        assert_eq!(item.category(), "acid");
        assert_eq!(item.metadata(), Some("blue"));
        assert_relative_eq!(item.volume(), 6000.0);
    }

    #[test]
    fn test_validation() {
        assert!(Item::new(1.0, 1.0, 1.0, "normal").validate().is_ok());
        assert!(matches!(
            Item::new(0.0, 1.0, 1.0, "normal").validate(),
            Err(Error::InvalidItem(_))
        ));
        assert!(Item::new(1.0, -1.0, 1.0, "normal").validate().is_err());
        assert!(Item::new(1.0, 1.0, f64::INFINITY, "normal").validate().is_err());
    }
}
