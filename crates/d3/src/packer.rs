//! Full packing session: every shelf starts empty.

use crate::session::{Packer, PackingSession};
use shelfpack_core::{CompatibilityRules, PackerConfig, Result, Shelf};

/// Packs an ordered item list into fresh shelves.
///
/// Each shelf starts open with a single fragment covering its whole volume.
/// Items are placed strictly in the order they were added.
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    config: PackerConfig,
    session: PackingSession,
}

impl ShelfPacker {
    /// Creates a packer with `config.shelf_count` empty shelves.
    pub fn new(config: PackerConfig, rules: CompatibilityRules) -> Result<Self> {
        config.validate()?;

        let dims = config.shelf_dims();
        let shelves = (0..config.shelf_count)
            .map(|id| Shelf::new(id, dims))
            .collect();

        log::info!(
            "Full packing session: {} shelves of {}x{}x{}, {:?}",
            config.shelf_count,
            config.shelf_width,
            config.shelf_height,
            config.shelf_depth,
            config.split_policy
        );

        let session = PackingSession::new(
            shelves,
            rules,
            config.split_policy,
            config.selected_shelf_id,
        );

        Ok(Self { config, session })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PackerConfig {
        &self.config
    }
}

impl Packer for ShelfPacker {
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
