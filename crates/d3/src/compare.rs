//! Side-by-side comparison of a full repack and an incremental run.

use crate::incremental::IncrementalPacker;
use crate::packer::ShelfPacker;
use crate::session::Packer;
use shelfpack_core::{utilization_pct, CompatibilityRules, Item, PackerConfig, PackingResult, Result, Snapshot};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Free volume difference below which the two methods count as equal.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// Method that left more free volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BetterMethod {
    /// Repacking everything from scratch.
    Full,
    /// Placing only the new items around the existing ones.
    Incremental,
    /// Free volumes are equal within [`TIE_TOLERANCE`].
    Tie,
}

/// Metrics for one packing method.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MethodReport {
    /// Sum of fragment volumes across all shelves.
    pub free_volume: f64,
    /// `(capacity - free_volume) / capacity * 100`.
    pub utilization_pct: f64,
    /// Items left without a placement.
    pub unplaced_count: usize,
    /// Placements across all shelves.
    pub placed_count: usize,
}

impl MethodReport {
    fn measure(result: &PackingResult, capacity: f64) -> Self {
        let free_volume = result.free_volume();
        Self {
            free_volume,
            utilization_pct: utilization_pct(capacity, free_volume),
            unplaced_count: result.unplaced_count(),
            placed_count: result.placed_count(),
        }
    }
}

/// Metrics for both methods and the verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Comparison {
    /// Configured capacity: shelf volume times shelf count.
    pub capacity_volume: f64,
    /// Full repack metrics.
    pub full: MethodReport,
    /// Incremental run metrics.
    pub incremental: MethodReport,
    /// Method that left more free volume.
    pub better_method: BetterMethod,
}

/// Both packing results alongside their comparison.
#[derive(Debug, Clone)]
pub struct ComparisonRun {
    /// Result of the full repack.
    pub full: PackingResult,
    /// Result of the incremental run.
    pub incremental: PackingResult,
    /// Metrics and verdict.
    pub comparison: Comparison,
}

/// Runs a full repack and an incremental session over the same input.
///
/// The full repack places every item already placed in `existing`, shelf by
/// shelf with its placed extent, followed by `new_items`. The incremental
/// session resumes from its own copy of `existing` and places only
/// `new_items`.
pub fn compare_packers(
    config: &PackerConfig,
    rules: &CompatibilityRules,
    existing: Option<&Snapshot>,
    new_items: &[Item],
) -> Result<ComparisonRun> {
    let mut full = ShelfPacker::new(config.clone(), rules.clone())?;
    if let Some(snapshot) = existing {
        full.add_items(snapshot.placed_items())?;
    }
    full.add_items(new_items.iter().cloned())?;
    let full = full.pack();

    let mut incremental = IncrementalPacker::new(config.clone(), rules.clone(), existing.cloned())?;
    incremental.add_items(new_items.iter().cloned())?;
    let incremental = incremental.pack();

    let capacity_volume = config.capacity();
    let full_report = MethodReport::measure(&full, capacity_volume);
    let incremental_report = MethodReport::measure(&incremental, capacity_volume);
    let better_method = better_method(full_report.free_volume, incremental_report.free_volume);

    log::info!(
        "Comparison: full leaves {} free, incremental leaves {} free, better: {:?}",
        full_report.free_volume,
        incremental_report.free_volume,
        better_method
    );

    Ok(ComparisonRun {
        full,
        incremental,
        comparison: Comparison {
            capacity_volume,
            full: full_report,
            incremental: incremental_report,
            better_method,
        },
    })
}

fn better_method(full_free: f64, incremental_free: f64) -> BetterMethod {
    if (full_free - incremental_free).abs() < TIE_TOLERANCE {
        BetterMethod::Tie
    } else if full_free > incremental_free {
        BetterMethod::Full
    } else {
        BetterMethod::Incremental
    }
}
