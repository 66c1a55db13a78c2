//! Packing result representation.

use crate::item::Item;
use crate::placement::PlacementStats;
use crate::shelf::Shelf;
use crate::snapshot::{ShelfSnapshot, Snapshot};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counters for one run of a session's item queue.
///
/// `placed + unplaced == submitted` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunStats {
    /// Items taken from the queue.
    pub submitted: usize,
    /// Items that received a placement.
    pub placed: usize,
    /// Items that did not fit anywhere.
    pub unplaced: usize,
}

impl RunStats {
    /// True if the conservation invariant holds.
    pub fn is_balanced(&self) -> bool {
        self.placed + self.unplaced == self.submitted
    }
}

/// Shelves and unplaced items produced by a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackingResult {
    /// Shelves with their placements and remaining fragments.
    pub shelves: Vec<Shelf>,

    /// Items with no placement, including any carried over from a resumed
    /// state.
    pub unplaced: Vec<Item>,

    /// Display-only shelf selection carried through from the configuration.
    pub selected_shelf_id: Option<usize>,
}

impl PackingResult {
    /// Number of placements across all shelves.
    pub fn placed_count(&self) -> usize {
        self.shelves.iter().map(|s| s.placements().len()).sum()
    }

    /// Number of unplaced items.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// True if nothing is unplaced.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Sum of all shelf volumes.
    pub fn capacity_volume(&self) -> f64 {
        self.shelves.iter().map(Shelf::volume).sum()
    }

    /// Sum of all fragment volumes.
    pub fn free_volume(&self) -> f64 {
        self.shelves.iter().map(Shelf::free_volume).sum()
    }

    /// Sum of all placement volumes.
    pub fn placed_volume(&self) -> f64 {
        self.shelves.iter().map(Shelf::placed_volume).sum()
    }

    /// `(capacity - free) / capacity * 100`, or 0 for zero capacity.
    pub fn utilization_pct(&self) -> f64 {
        utilization_pct(self.capacity_volume(), self.free_volume())
    }

    /// Shelves to show in a display: the selected one, or all of them.
    pub fn visible_shelves(&self) -> impl Iterator<Item = &Shelf> {
        let selected = self.selected_shelf_id;
        self.shelves
            .iter()
            .filter(move |s| selected.map_or(true, |id| s.id() == id))
    }

    /// Looks up a shelf by id.
    pub fn shelf(&self, id: usize) -> Option<&Shelf> {
        self.shelves.iter().find(|s| s.id() == id)
    }

    /// Computes placement statistics over all shelves.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(self.shelves.iter().flat_map(|s| s.placements()))
    }

    /// Summary metrics.
    pub fn summary(&self) -> PackingSummary {
        PackingSummary {
            shelf_count: self.shelves.len(),
            placed_count: self.placed_count(),
            unplaced_count: self.unplaced_count(),
            capacity_volume: self.capacity_volume(),
            free_volume: self.free_volume(),
            placed_volume: self.placed_volume(),
            utilization_pct: self.utilization_pct(),
        }
    }

    /// Full snapshot, including fragments and compatibility locks.
    pub fn to_snapshot(&self) -> Snapshot {
        let shelves = self
            .shelves
            .iter()
            .map(|shelf| ShelfSnapshot {
                id: shelf.id(),
                dims: Some(*shelf.dims()),
                compatibility: shelf.compatibility().locked_set().cloned(),
                placements: shelf.placements().to_vec(),
                fragments: Some(shelf.fragments().to_vec()),
            })
            .collect();

        Snapshot {
            shelves,
            unplaced: self.unplaced.clone(),
        }
    }
}

/// Utilization percentage for a capacity and the free volume left in it.
pub fn utilization_pct(capacity: f64, free_volume: f64) -> f64 {
    if capacity > 0.0 {
        (capacity - free_volume) / capacity * 100.0
    } else {
        0.0
    }
}

/// Summary statistics for a packing result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingSummary {
    /// Number of shelves.
    pub shelf_count: usize,
    /// Placements across all shelves.
    pub placed_count: usize,
    /// Unplaced items.
    pub unplaced_count: usize,
    /// Total shelf volume.
    pub capacity_volume: f64,
    /// Volume still covered by free fragments.
    pub free_volume: f64,
    /// Volume occupied by placements.
    pub placed_volume: f64,
    /// Utilization percentage derived from free volume.
    pub utilization_pct: f64,
}
