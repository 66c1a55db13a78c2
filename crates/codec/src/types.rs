//! Wire records and API request/response types.

use serde::{Deserialize, Serialize};
use shelfpack_core::{PackingSummary, RunStats};
use shelfpack_d3::{BetterMethod, MethodReport};
use std::collections::BTreeMap;

/// API version from Cargo.toml.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Persisted packing state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    /// Shelves in order.
    #[serde(default)]
    pub shelves: Vec<ShelfRecord>,

    /// Items without a placement.
    #[serde(default)]
    pub unplaced_items: Vec<ItemRecord>,
}

/// One persisted shelf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShelfRecord {
    /// Shelf id. Defaults to the position in the shelf list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,

    /// Shelf width. Defaults to the configured width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Shelf height. Defaults to the configured height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Shelf depth. Defaults to the configured depth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,

    /// Locked compatibility set. Absent or empty means "recompute from the
    /// first placement".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<Vec<String>>,

    /// Placements in order.
    #[serde(default)]
    pub placed_items: Vec<PlacedItemRecord>,

    /// Free fragments. Absent or `null` means they were not persisted; an
    /// empty list means the shelf has no free space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_spaces: Option<Vec<FreeSpaceRecord>>,
}

/// One persisted placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItemRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Index of the orientation used: 0 `(w,h,d)`, 1 `(h,w,d)`, 2 `(d,w,h)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<usize>,
}

/// One persisted free fragment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeSpaceRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// An item as submitted or persisted unplaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// An item in a request, either positional or named.
///
/// Accepts `[w, h, d, "type", "color"]`, `[w, h, d, "type"]` or an
/// [`ItemRecord`] object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemRequest {
    /// `[w, h, d, "type", "color"]`; color may be `null`.
    WithColor(f64, f64, f64, String, Option<String>),
    /// `[w, h, d, "type"]`.
    Plain(f64, f64, f64, String),
    /// `{"width": .., "height": .., "depth": .., "item_type": .., "color": ..}`.
    Record(ItemRecord),
}

/// Request for a packing operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackRequest {
    /// API version.
    #[serde(default)]
    pub version: Option<String>,

    /// Width of every shelf.
    pub shelf_width: f64,

    /// Height of every shelf.
    pub shelf_height: f64,

    /// Depth of every shelf.
    pub shelf_depth: f64,

    /// Number of shelves.
    pub shelf_count: usize,

    /// Display-only shelf selection.
    #[serde(default)]
    pub selected_shelf_id: Option<usize>,

    /// Category to the categories allowed to share a shelf with it.
    #[serde(default)]
    pub compatibility_rules: BTreeMap<String, Vec<String>>,

    /// Items to place, in order.
    #[serde(default)]
    pub items: Vec<ItemRequest>,

    /// Prior state for incremental packing and comparison.
    #[serde(default)]
    pub existing_state: Option<StateRecord>,

    /// Leftover split policy name.
    #[serde(default)]
    pub split_policy: Option<String>,
}

/// Response for pack and resume operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackResponse {
    /// API version.
    pub version: String,

    /// Whether the operation succeeded.
    pub success: bool,

    /// Error message if failed.
    pub error: Option<String>,

    /// Final state.
    #[serde(default)]
    pub result: Option<StateRecord>,

    /// Metrics of the final state.
    #[serde(default)]
    pub summary: Option<PackingSummary>,

    /// Counters for the items submitted in this request.
    #[serde(default)]
    pub stats: Option<RunStats>,

    /// Display-only shelf selection, passed through.
    #[serde(default)]
    pub selected_shelf_id: Option<usize>,
}

impl PackResponse {
    /// A failed response carrying `error`.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: false,
            error: Some(error.into()),
            result: None,
            summary: None,
            stats: None,
            selected_shelf_id: None,
        }
    }
}

/// One side of a comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodResponse {
    /// Final state of this method.
    pub result: StateRecord,

    /// Metrics of this method.
    #[serde(flatten)]
    pub report: MethodReport,
}

/// Response for compare operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    /// API version.
    pub version: String,

    /// Whether the operation succeeded.
    pub success: bool,

    /// Error message if failed.
    pub error: Option<String>,

    /// Configured capacity.
    #[serde(default)]
    pub capacity_volume: f64,

    /// Full repack.
    #[serde(default)]
    pub full: Option<MethodResponse>,

    /// Incremental run.
    #[serde(default)]
    pub incremental: Option<MethodResponse>,

    /// Method that left more free volume.
    #[serde(default)]
    pub better_method: Option<BetterMethod>,
}

impl CompareResponse {
    /// A failed response carrying `error`.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: false,
            error: Some(error.into()),
            capacity_volume: 0.0,
            full: None,
            incremental: None,
            better_method: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_request_shapes() {
        let items: Vec<ItemRequest> = serde_json::from_str(
            r#"[
                [40, 20, 30, "toxic", "red"],
                [10, 10, 10, "normal", null],
                [5, 5, 5, "acid"],
                {"width": 1, "height": 2, "depth": 3, "item_type": "normal"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            items[0],
            ItemRequest::WithColor(40.0, 20.0, 30.0, "toxic".into(), Some("red".into()))
        );
        assert_eq!(
            items[1],
            ItemRequest::WithColor(10.0, 10.0, 10.0, "normal".into(), None)
        );
        assert_eq!(items[2], ItemRequest::Plain(5.0, 5.0, 5.0, "acid".into()));
        assert!(matches!(items[3], ItemRequest::Record(ref r) if r.depth == 3.0));
    }

    #[test]
    fn test_free_spaces_null_and_empty_differ() {
        let absent: ShelfRecord = serde_json::from_str(r#"{"id": 0}"#).unwrap();
        let null: ShelfRecord = serde_json::from_str(r#"{"id": 0, "free_spaces": null}"#).unwrap();
        let empty: ShelfRecord = serde_json::from_str(r#"{"id": 0, "free_spaces": []}"#).unwrap();

        assert_eq!(absent.free_spaces, None);
        assert_eq!(null.free_spaces, None);
        assert_eq!(empty.free_spaces, Some(Vec::new()));
    }

    #[test]
    fn test_request_defaults() {
        let request: PackRequest = serde_json::from_str(
            r#"{"shelf_width": 100, "shelf_height": 50, "shelf_depth": 60, "shelf_count": 2}"#,
        )
        .unwrap();

        assert!(request.items.is_empty());
        assert!(request.compatibility_rules.is_empty());
        assert!(request.existing_state.is_none());
        assert!(request.split_policy.is_none());
    }

    #[test]
    fn test_failure_response_shape() {
        let json = serde_json::to_value(PackResponse::failure("boom")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert_eq!(json["version"], API_VERSION);
    }
}
