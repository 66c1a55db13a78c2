//! # Shelfpack Codec
//!
//! JSON persistence for shelf packing state, and a request/response API that
//! runs packing sessions from JSON payloads.
//!
//! The persisted layout:
//!
//! ```json
//! {
//!   "shelves": [
//!     { "id": 0, "width": 100, "height": 50, "depth": 60,
//!       "compatibility": ["toxic"],
//!       "placed_items": [{"x": 0, "y": 0, "z": 0, "width": 20, "height": 40, "depth": 30,
//!                         "item_type": "toxic", "color": "red", "rotation": 1}],
//!       "free_spaces": [{"x": 20, "y": 0, "z": 0, "width": 80, "height": 40, "depth": 30}] }
//!   ],
//!   "unplaced_items": [{"width": 500, "height": 1, "depth": 1, "item_type": "normal"}]
//! }
//! ```

pub mod api;
pub mod codec;
pub mod error;
pub mod types;

pub use api::{
    compare, compare_json, pack, pack_incremental, pack_incremental_json, pack_json, summarize,
    PackOutcome,
};
pub use codec::{
    decode, encode, encode_snapshot, from_json, read_state, to_json, to_json_pretty, write_state,
};
pub use error::{CodecError, Result};
pub use types::*;
