//! # Shelfpack 3D
//!
//! Greedy best-fit placement of boxes onto fixed-size shelves.
//!
//! Items are placed strictly in arrival order. Each one goes into the free
//! fragment, on a shelf whose compatibility lock admits its category, that
//! leaves the least unused volume across three orientations. The consumed
//! fragment is then split into up to three leftovers.
//!
//! Two sessions share this engine:
//!
//! - [`ShelfPacker`] starts from empty shelves
//! - [`IncrementalPacker`] resumes from a [`Snapshot`] and leaves earlier
//!   placements untouched
//!
//! [`compare_packers`] runs both over the same input and reports which one
//! left more free volume.

pub mod allocator;
pub mod compare;
pub mod incremental;
pub mod packer;
pub mod session;
pub mod split;

// Re-exports
pub use allocator::{find_best_fit, Candidate};
pub use compare::{compare_packers, BetterMethod, Comparison, ComparisonRun, MethodReport};
pub use incremental::IncrementalPacker;
pub use packer::ShelfPacker;
pub use session::{Packer, PackingSession, PlaceOutcome, SessionState};
pub use shelfpack_core::{
    CompatibilityRules, Error, Item, PackerConfig, PackingResult, Placement, Result, Snapshot,
    SplitPolicy,
};
