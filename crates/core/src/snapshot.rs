//! Persisted packing state used to resume a session.

use crate::fragment::FreeSpace;
use crate::item::Item;
use crate::placement::Placement;
use nalgebra::Vector3;
use std::collections::BTreeSet;

/// State of one shelf as it was persisted.
///
/// Optional fields record what the persisted form left out; resuming fills
/// them in from the session configuration and compatibility rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfSnapshot {
    /// Shelf identifier.
    pub id: usize,

    /// Persisted dimensions, if any.
    pub dims: Option<Vector3<f64>>,

    /// Persisted compatibility lock, if any.
    pub compatibility: Option<BTreeSet<String>>,

    /// Placements in persisted order.
    pub placements: Vec<Placement>,

    /// Persisted free fragments. `None` means the fragment list was not saved.
    pub fragments: Option<Vec<FreeSpace>>,
}

impl ShelfSnapshot {
    /// Creates an empty snapshot entry for shelf `id`.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            dims: None,
            compatibility: None,
            placements: Vec::new(),
            fragments: None,
        }
    }

    /// Sets the dimensions.
    pub fn with_dims(mut self, width: f64, height: f64, depth: f64) -> Self {
        self.dims = Some(Vector3::new(width, height, depth));
        self
    }

    /// Sets the placements.
    pub fn with_placements(mut self, placements: Vec<Placement>) -> Self {
        self.placements = placements;
        self
    }

    /// Sets the fragment list.
    pub fn with_fragments(mut self, fragments: Vec<FreeSpace>) -> Self {
        self.fragments = Some(fragments);
        self
    }

    /// Sets the compatibility lock.
    pub fn with_compatibility<I, S>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compatibility = Some(allowed.into_iter().map(Into::into).collect());
        self
    }
}

/// A full persisted packing state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Shelves in persisted order.
    pub shelves: Vec<ShelfSnapshot>,

    /// Items that were left unplaced by earlier runs.
    pub unplaced: Vec<Item>,
}

impl Snapshot {
    /// Creates a snapshot from shelves only.
    pub fn new(shelves: Vec<ShelfSnapshot>) -> Self {
        Self {
            shelves,
            unplaced: Vec::new(),
        }
    }

    /// Every placed item, shelf by shelf in list order, as a fresh item with
    /// the placed extent.
    pub fn placed_items(&self) -> Vec<Item> {
        self.shelves
            .iter()
            .flat_map(|shelf| shelf.placements.iter().map(Placement::to_item))
            .collect()
    }

    /// Total number of placements.
    pub fn placement_count(&self) -> usize {
        self.shelves.iter().map(|s| s.placements.len()).sum()
    }
}
