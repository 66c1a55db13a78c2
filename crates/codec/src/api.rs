//! JSON request/response API over the packing sessions.
//!
//! The typed functions ([`pack`], [`pack_incremental`], [`compare`]) return
//! errors; the `*_json` variants never fail and report errors inside the
//! response instead.

use crate::codec::{decode, encode};
use crate::error::Result;
use crate::types::{
    CompareResponse, ItemRequest, MethodResponse, PackRequest, PackResponse, API_VERSION,
};
use shelfpack_core::{
    CompatibilityRules, Item, PackerConfig, PackingResult, PackingSummary, RunStats, Snapshot,
    SplitPolicy,
};
use shelfpack_d3::{compare_packers, ComparisonRun, IncrementalPacker, Packer, ShelfPacker};

/// Final state and counters of a pack or resume request.
#[derive(Debug, Clone)]
pub struct PackOutcome {
    /// Final shelves and unplaced items.
    pub result: PackingResult,
    /// Counters for the items in the request.
    pub stats: RunStats,
}

impl PackResponse {
    /// A successful response for `outcome`.
    pub fn success(outcome: &PackOutcome) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: true,
            error: None,
            result: Some(encode(&outcome.result)),
            summary: Some(outcome.result.summary()),
            stats: Some(outcome.stats),
            selected_shelf_id: outcome.result.selected_shelf_id,
        }
    }
}

impl CompareResponse {
    /// A successful response for `run`.
    pub fn success(run: &ComparisonRun) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: true,
            error: None,
            capacity_volume: run.comparison.capacity_volume,
            full: Some(MethodResponse {
                result: encode(&run.full),
                report: run.comparison.full,
            }),
            incremental: Some(MethodResponse {
                result: encode(&run.incremental),
                report: run.comparison.incremental,
            }),
            better_method: Some(run.comparison.better_method),
        }
    }
}

impl ItemRequest {
    /// Converts the request into an item.
    pub fn to_item(&self) -> Item {
        match self {
            ItemRequest::WithColor(w, h, d, category, color) => {
                Item::new(*w, *h, *d, category.as_str()).with_optional_metadata(color.clone())
            }
            ItemRequest::Plain(w, h, d, category) => Item::new(*w, *h, *d, category.as_str()),
            ItemRequest::Record(record) => {
                Item::new(record.width, record.height, record.depth, record.item_type.as_str())
                    .with_optional_metadata(record.color.clone())
            }
        }
    }
}

impl PackRequest {
    /// Session configuration. Unknown split policy names fall back to the
    /// default policy.
    pub fn config(&self) -> PackerConfig {
        PackerConfig::new(
            self.shelf_width,
            self.shelf_height,
            self.shelf_depth,
            self.shelf_count,
        )
        .with_selected_shelf(self.selected_shelf_id)
        .with_split_policy(self.split_policy())
    }

    /// Compatibility rules.
    pub fn rules(&self) -> CompatibilityRules {
        self.compatibility_rules
            .iter()
            .map(|(category, allowed)| (category.as_str(), allowed.iter().map(String::as_str)))
            .collect()
    }

    /// Items in request order.
    pub fn items(&self) -> Vec<Item> {
        self.items.iter().map(ItemRequest::to_item).collect()
    }

    /// Decoded prior state, if any.
    pub fn existing_snapshot(&self) -> Result<Option<Snapshot>> {
        self.existing_state.clone().map(decode).transpose()
    }

    fn split_policy(&self) -> SplitPolicy {
        match self.split_policy.as_deref() {
            None => SplitPolicy::default(),
            Some(name) => SplitPolicy::parse(name).unwrap_or_else(|| {
                log::warn!("Unknown split policy '{}', using the default", name);
                SplitPolicy::default()
            }),
        }
    }
}

/// Packs the request's items onto empty shelves.
pub fn pack(request: &PackRequest) -> Result<PackOutcome> {
    let mut packer = ShelfPacker::new(request.config(), request.rules())?;
    packer.add_items(request.items())?;
    let stats = packer.place_all();

    Ok(PackOutcome {
        result: packer.into_session().into_result(),
        stats,
    })
}

/// Places the request's items around the placements in `existing_state`.
///
/// Without an existing state this packs onto empty shelves.
pub fn pack_incremental(request: &PackRequest) -> Result<PackOutcome> {
    let prior = request.existing_snapshot()?;
    let mut packer = IncrementalPacker::new(request.config(), request.rules(), prior)?;
    packer.add_items(request.items())?;
    let stats = packer.place_all();

    Ok(PackOutcome {
        result: packer.into_session().into_result(),
        stats,
    })
}

/// Compares a full repack with an incremental run of the request.
pub fn compare(request: &PackRequest) -> Result<ComparisonRun> {
    let prior = request.existing_snapshot()?;
    Ok(compare_packers(
        &request.config(),
        &request.rules(),
        prior.as_ref(),
        &request.items(),
    )?)
}

/// Metrics of a persisted state.
pub fn summarize(snapshot: Snapshot) -> Result<PackingSummary> {
    let packer = IncrementalPacker::from_snapshot(CompatibilityRules::new(), snapshot)?;
    Ok(packer.result().summary())
}

/// [`pack`] from and to JSON.
pub fn pack_json(json: &str) -> PackResponse {
    respond(json, pack)
}

/// [`pack_incremental`] from and to JSON.
pub fn pack_incremental_json(json: &str) -> PackResponse {
    respond(json, pack_incremental)
}

/// [`compare`] from and to JSON.
pub fn compare_json(json: &str) -> CompareResponse {
    let request: PackRequest = match serde_json::from_str(json) {
        Ok(r) => r,
        Err(e) => return CompareResponse::failure(format!("Invalid JSON: {}", e)),
    };

    match compare(&request) {
        Ok(run) => CompareResponse::success(&run),
        Err(e) => CompareResponse::failure(e.to_string()),
    }
}

fn respond(json: &str, run: fn(&PackRequest) -> Result<PackOutcome>) -> PackResponse {
    let request: PackRequest = match serde_json::from_str(json) {
        Ok(r) => r,
        Err(e) => return PackResponse::failure(format!("Invalid JSON: {}", e)),
    };

    match run(&request) {
        Ok(outcome) => PackResponse::success(&outcome),
        Err(e) => PackResponse::failure(e.to_string()),
    }
}
