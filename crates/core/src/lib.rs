//! # Shelfpack Core
//!
//! Core types shared by the shelf packing allocator, its sessions and the
//! state codec.
//!
//! ## Core Components
//!
//! - **Entities**: [`Shelf`], [`Item`], [`Placement`], [`FreeSpace`]
//! - **Compatibility**: [`CompatibilityRules`] and per-shelf [`ShelfCompatibility`] locks
//! - **Configuration**: [`PackerConfig`] and the leftover [`SplitPolicy`]
//! - **Results**: [`PackingResult`], [`PackingSummary`], [`RunStats`]
//! - **Persistence**: [`Snapshot`] for resuming sessions
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod compat;
pub mod config;
pub mod error;
pub mod fragment;
pub mod geometry;
pub mod item;
pub mod placement;
pub mod result;
pub mod shelf;
pub mod snapshot;

// Re-exports
pub use compat::{CompatibilityRules, ShelfCompatibility};
pub use config::{PackerConfig, SplitPolicy};
pub use error::{Error, Result};
pub use fragment::FreeSpace;
pub use geometry::Orientation;
pub use item::Item;
pub use placement::{Placement, PlacementStats};
pub use result::{utilization_pct, PackingResult, PackingSummary, RunStats};
pub use shelf::Shelf;
pub use snapshot::{ShelfSnapshot, Snapshot};

pub use nalgebra::Vector3;
