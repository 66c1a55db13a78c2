//! Session configuration.

use crate::error::{Error, Result};
use crate::geometry::{is_positive_extent, volume};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How leftover space is carved after a placement.
///
/// Leftovers are produced along +X, +Y and +Z from the placed box's far
/// faces. The shelf-bounded variants keep the box's extent on the two other
/// axes and run to the shelf's far wall; they can hand out overlapping
/// fragments once a shelf holds more than one column of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SplitPolicy {
    /// Leftovers run to the shelf's far wall; degenerate leftovers are kept.
    ShelfBounded,
    /// Leftovers run to the shelf's far wall; degenerate leftovers are dropped.
    #[default]
    ShelfBoundedFiltered,
    /// Exact guillotine cut of the consumed fragment: the +X slab spans the
    /// fragment's full height and depth, the +Y slab the box width and the
    /// fragment depth, the +Z slab the box width and height. The slabs and
    /// the box partition the fragment, so fragments never overlap.
    /// Degenerate leftovers are dropped.
    Guillotine,
}

impl SplitPolicy {
    /// True if zero or negative extent leftovers are discarded.
    pub fn filters_degenerate(self) -> bool {
        !matches!(self, SplitPolicy::ShelfBounded)
    }

    /// Parses a policy name, accepting a few spellings.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().replace(['-', ' '], "_").as_str() {
            "shelf_bounded" | "shelf" | "unfiltered" => Some(SplitPolicy::ShelfBounded),
            "shelf_bounded_filtered" | "filtered" | "default" => {
                Some(SplitPolicy::ShelfBoundedFiltered)
            }
            "guillotine" | "fragment" | "fragment_bounded" => Some(SplitPolicy::Guillotine),
            _ => None,
        }
    }
}

/// Configuration for a packing session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackerConfig {
    /// Width of every shelf.
    pub shelf_width: f64,

    /// Height of every shelf.
    pub shelf_height: f64,

    /// Depth of every shelf.
    pub shelf_depth: f64,

    /// Number of shelves; fixed for the session.
    pub shelf_count: usize,

    /// Shelf to highlight in displays. Not used by allocation.
    pub selected_shelf_id: Option<usize>,

    /// Leftover-space policy.
    pub split_policy: SplitPolicy,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            shelf_width: 100.0,
            shelf_height: 50.0,
            shelf_depth: 60.0,
            shelf_count: 1,
            selected_shelf_id: None,
            split_policy: SplitPolicy::default(),
        }
    }
}

impl PackerConfig {
    /// Creates a configuration for `count` shelves of the given size.
    pub fn new(width: f64, height: f64, depth: f64, count: usize) -> Self {
        Self {
            shelf_width: width,
            shelf_height: height,
            shelf_depth: depth,
            shelf_count: count,
            ..Self::default()
        }
    }

    /// Sets the shelf dimensions.
    pub fn with_shelf_dims(mut self, width: f64, height: f64, depth: f64) -> Self {
        self.shelf_width = width;
        self.shelf_height = height;
        self.shelf_depth = depth;
        self
    }

    /// Sets the shelf count.
    pub fn with_shelf_count(mut self, count: usize) -> Self {
        self.shelf_count = count;
        self
    }

    /// Sets the display-only selected shelf.
    pub fn with_selected_shelf(mut self, id: Option<usize>) -> Self {
        self.selected_shelf_id = id;
        self
    }

    /// Sets the split policy.
    pub fn with_split_policy(mut self, policy: SplitPolicy) -> Self {
        self.split_policy = policy;
        self
    }

    /// Shelf dimensions as a vector.
    pub fn shelf_dims(&self) -> Vector3<f64> {
        Vector3::new(self.shelf_width, self.shelf_height, self.shelf_depth)
    }

    /// Total volume of all shelves.
    pub fn capacity(&self) -> f64 {
        volume(&self.shelf_dims()) * self.shelf_count as f64
    }

    /// Rejects non-positive dimensions and a zero shelf count.
    pub fn validate(&self) -> Result<()> {
        if !is_positive_extent(&self.shelf_dims()) {
            return Err(Error::InvalidConfig(format!(
                "Shelf dimensions must be positive, got {}x{}x{}",
                self.shelf_width, self.shelf_height, self.shelf_depth
            )));
        }

        if self.shelf_count == 0 {
            return Err(Error::InvalidConfig(
                "Shelf count must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
