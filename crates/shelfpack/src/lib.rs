//! # Shelfpack
//!
//! Greedy best-fit placement of boxes onto fixed-size shelves, with
//! per-shelf category locks and sessions that can be resumed from persisted
//! state.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shelfpack::d3::{CompatibilityRules, Item, Packer, PackerConfig, ShelfPacker};
//!
//! let config = PackerConfig::new(100.0, 50.0, 60.0, 2);
//! let rules = CompatibilityRules::new().with_rule("toxic", ["toxic"]);
//!
//! let mut packer = ShelfPacker::new(config, rules)?;
//! packer.add_item(Item::new(40.0, 20.0, 30.0, "toxic"))?;
//! let result = packer.pack();
//! println!("{:.1}% used", result.utilization_pct());
//! ```
//!
//! ## Feature Flags
//!
//! - `d3` (default): allocator and packing sessions
//! - `codec`: JSON state persistence and request/response API
//! - `serde`: Serialization support

/// Core entities, configuration and results.
pub use shelfpack_core as core;

/// Allocator and packing sessions.
#[cfg(feature = "d3")]
pub use shelfpack_d3 as d3;

/// JSON state persistence and API.
#[cfg(feature = "codec")]
pub use shelfpack_codec as codec;

// Re-export commonly used types at root level
pub use shelfpack_core::{
    CompatibilityRules, Error, Item, PackerConfig, PackingResult, Placement, Result, Snapshot,
    SplitPolicy,
};

#[cfg(feature = "d3")]
pub use shelfpack_d3::{IncrementalPacker, Packer, ShelfPacker};
