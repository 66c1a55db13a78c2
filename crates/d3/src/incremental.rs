//! Incremental packing session resumed from persisted state.
//!
//! Prior placements are immutable. Only items added to the resumed session
//! are placed, into whatever free fragments the persisted state still holds.
//!
//! Each persisted shelf is rebuilt as follows:
//!
//! - dimensions default to the configured shelf size when not persisted
//! - a non-empty persisted compatibility set is used as is; otherwise the lock
//!   is recomputed from the first placement in the persisted list
//! - persisted fragments are used verbatim; when none were persisted, a shelf
//!   without placements gets one full-extent fragment and a shelf with
//!   placements gets none at all, so nothing more can ever be placed on it

use crate::session::{Packer, PackingSession};
use shelfpack_core::geometry::is_positive_extent;
use shelfpack_core::{
    CompatibilityRules, Error, FreeSpace, PackerConfig, Result, Shelf, ShelfCompatibility,
    ShelfSnapshot, Snapshot, Vector3,
};
use std::collections::HashSet;

/// Places new items around the placements of an earlier run.
#[derive(Debug, Clone)]
pub struct IncrementalPacker {
    config: PackerConfig,
    session: PackingSession,
}

impl IncrementalPacker {
    /// Creates a session from `prior`, or from empty shelves when there is no
    /// prior state.
    ///
    /// With a prior state, the shelf list comes from the snapshot and
    /// `config.shelf_count` is not used. Unplaced items from the snapshot are
    /// carried into the result but never re-attempted.
    pub fn new(
        config: PackerConfig,
        rules: CompatibilityRules,
        prior: Option<Snapshot>,
    ) -> Result<Self> {
        config.validate()?;

        let (shelves, carried) = match prior {
            None => {
                let dims = config.shelf_dims();
                let shelves = (0..config.shelf_count)
                    .map(|id| Shelf::new(id, dims))
                    .collect();
                (shelves, Vec::new())
            }
            Some(snapshot) => {
                let shelves = restore_shelves(&config.shelf_dims(), &rules, snapshot.shelves)?;
                (shelves, snapshot.unplaced)
            }
        };

        log::info!(
            "Incremental packing session: {} shelves, {} prior placements, {} carried unplaced",
            shelves.len(),
            shelves.iter().map(|s| s.placements().len()).sum::<usize>(),
            carried.len()
        );

        let session = PackingSession::new(
            shelves,
            rules,
            config.split_policy,
            config.selected_shelf_id,
        )
        .with_carried_unplaced(carried);

        Ok(Self { config, session })
    }

    /// Creates a session sized from the snapshot itself: shelf dimensions
    /// from its first shelf and the count from its shelf list.
    pub fn from_snapshot(rules: CompatibilityRules, snapshot: Snapshot) -> Result<Self> {
        let first = snapshot.shelves.first().ok_or(Error::EmptyState)?;
        let dims = first.dims.ok_or_else(|| {
            Error::InvalidConfig(format!("Shelf {} has no persisted dimensions", first.id))
        })?;

        let config = PackerConfig::new(dims.x, dims.y, dims.z, snapshot.shelves.len());
        Self::new(config, rules, Some(snapshot))
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PackerConfig {
        &self.config
    }
}

impl Packer for IncrementalPacker {
    fn session(&self) -> &PackingSession {
        &self.session
    }

    fn session_mut(&mut self) -> &mut PackingSession {
        &mut self.session
    }

    fn into_session(self) -> PackingSession {
        self.session
    }
}

fn restore_shelves(
    default_dims: &Vector3<f64>,
    rules: &CompatibilityRules,
    snapshots: Vec<ShelfSnapshot>,
) -> Result<Vec<Shelf>> {
    if snapshots.is_empty() {
        return Err(Error::EmptyState);
    }

    let mut seen = HashSet::with_capacity(snapshots.len());
    snapshots
        .into_iter()
        .map(|snapshot| {
            if !seen.insert(snapshot.id) {
                return Err(Error::InvalidState(format!(
                    "Duplicate shelf id {}",
                    snapshot.id
                )));
            }
            restore_shelf(default_dims, rules, snapshot)
        })
        .collect()
}

fn restore_shelf(
    default_dims: &Vector3<f64>,
    rules: &CompatibilityRules,
    snapshot: ShelfSnapshot,
) -> Result<Shelf> {
    let ShelfSnapshot {
        id,
        dims,
        compatibility,
        placements,
        fragments,
    } = snapshot;

    let dims = dims.unwrap_or(*default_dims);
    if !is_positive_extent(&dims) {
        return Err(Error::InvalidConfig(format!(
            "Shelf {} dimensions must be positive, got {}x{}x{}",
            id, dims.x, dims.y, dims.z
        )));
    }

    let compatibility = match compatibility {
        Some(set) if !set.is_empty() => ShelfCompatibility::Locked(set),
        _ => match placements.first() {
            Some(first) => ShelfCompatibility::from_set(rules.lock_for(first.category())),
            None => ShelfCompatibility::Open,
        },
    };

    let fragments = match fragments {
        Some(fragments) => fragments,
        None if placements.is_empty() => vec![FreeSpace::full(dims)],
        None => {
            log::warn!(
                "Shelf {} has {} placements but no persisted free spaces; it will accept no new items",
                id,
                placements.len()
            );
            Vec::new()
        }
    };

    Ok(Shelf::restore(id, dims, compatibility, placements, fragments))
}
