//! Packing session engine shared by the full and incremental packers.

use crate::allocator::find_best_fit;
use crate::split::split;
use shelfpack_core::{
    CompatibilityRules, Item, PackingResult, Placement, Result, RunStats, Shelf, Snapshot,
    SplitPolicy,
};
use std::collections::VecDeque;

/// Lifecycle of a session's item queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing has been processed yet.
    Empty,
    /// At least one item was processed and more are queued.
    Processing,
    /// At least one item was processed and the queue is drained.
    Done,
}

/// Outcome of placing a single queued item.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceOutcome {
    /// The item was placed on shelf `shelf_id`.
    Placed {
        /// Id of the receiving shelf.
        shelf_id: usize,
        /// The recorded placement.
        placement: Placement,
    },
    /// No compatible fragment could hold the item.
    Unplaced(Item),
}

impl PlaceOutcome {
    /// True if the item was placed.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlaceOutcome::Placed { .. })
    }
}

/// Shelves, queue and bookkeeping for one packing run.
///
/// A session exclusively owns its shelves; nothing is shared with other
/// sessions.
#[derive(Debug, Clone)]
pub struct PackingSession {
    shelves: Vec<Shelf>,
    rules: CompatibilityRules,
    policy: SplitPolicy,
    queue: VecDeque<Item>,
    unplaced: Vec<Item>,
    selected_shelf_id: Option<usize>,
    stats: RunStats,
}

impl PackingSession {
    /// Creates a session over pre-built shelves.
    pub fn new(
        shelves: Vec<Shelf>,
        rules: CompatibilityRules,
        policy: SplitPolicy,
        selected_shelf_id: Option<usize>,
    ) -> Self {
        Self {
            shelves,
            rules,
            policy,
            queue: VecDeque::new(),
            unplaced: Vec::new(),
            selected_shelf_id,
            stats: RunStats::default(),
        }
    }

    /// Seeds the unplaced list with items left over from an earlier run.
    ///
    /// They are reported as unplaced but are not part of this run's counters.
    pub fn with_carried_unplaced(mut self, items: Vec<Item>) -> Self {
        self.unplaced = items;
        self
    }

    /// Queues an item after validating its dimensions.
    pub fn enqueue(&mut self, item: Item) -> Result<()> {
        item.validate()?;
        self.queue.push_back(item);
        Ok(())
    }

    /// Returns the shelves.
    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    /// Returns the compatibility rules.
    pub fn rules(&self) -> &CompatibilityRules {
        &self.rules
    }

    /// Returns the split policy.
    pub fn policy(&self) -> SplitPolicy {
        self.policy
    }

    /// Returns the unplaced items.
    pub fn unplaced(&self) -> &[Item] {
        &self.unplaced
    }

    /// Number of items still queued.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Counters for the items processed so far.
    pub fn run_stats(&self) -> RunStats {
        self.stats
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        if self.stats.submitted == 0 {
            SessionState::Empty
        } else if self.queue.is_empty() {
            SessionState::Done
        } else {
            SessionState::Processing
        }
    }

    /// Places the next queued item, or returns `None` if the queue is empty.
    pub fn place_next(&mut self) -> Option<PlaceOutcome> {
        let item = self.queue.pop_front()?;
        self.stats.submitted += 1;

        let Some(candidate) = find_best_fit(&self.shelves, &item) else {
            log::debug!(
                "No space for {} item {}x{}x{}",
                item.category(),
                item.width(),
                item.height(),
                item.depth()
            );
            self.stats.unplaced += 1;
            self.unplaced.push(item.clone());
            return Some(PlaceOutcome::Unplaced(item));
        };

        let shelf = &mut self.shelves[candidate.shelf_index];
        let consumed = shelf.fragments()[candidate.fragment_index];
        let leftovers = split(
            shelf.dims(),
            &consumed,
            &candidate.origin,
            &candidate.dims,
            self.policy,
        );
        let placement = Placement::of_item(&item, candidate.origin, candidate.orientation);

        log::debug!(
            "Placed {} item on shelf {} at ({}, {}, {}) as {:?}, waste {}",
            item.category(),
            shelf.id(),
            candidate.origin.x,
            candidate.origin.y,
            candidate.origin.z,
            candidate.orientation,
            candidate.waste
        );

        shelf.commit(&self.rules, candidate.fragment_index, placement.clone(), leftovers);
        self.stats.placed += 1;

        Some(PlaceOutcome::Placed {
            shelf_id: shelf.id(),
            placement,
        })
    }

    /// Places every queued item in arrival order.
    pub fn place_all(&mut self) -> RunStats {
        while self.place_next().is_some() {}

        log::info!(
            "Packing run finished: {} submitted, {} placed, {} unplaced",
            self.stats.submitted,
            self.stats.placed,
            self.stats.unplaced
        );
        self.stats
    }

    /// Current shelves and unplaced items.
    pub fn result(&self) -> PackingResult {
        PackingResult {
            shelves: self.shelves.clone(),
            unplaced: self.unplaced.clone(),
            selected_shelf_id: self.selected_shelf_id,
        }
    }

    /// Consumes the session, returning its final state.
    pub fn into_result(self) -> PackingResult {
        PackingResult {
            shelves: self.shelves,
            unplaced: self.unplaced,
            selected_shelf_id: self.selected_shelf_id,
        }
    }

    /// Complete snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.result().to_snapshot()
    }
}

/// Common surface of the full and incremental packers.
pub trait Packer {
    /// The underlying session.
    fn session(&self) -> &PackingSession;

    /// The underlying session, mutably.
    fn session_mut(&mut self) -> &mut PackingSession;

    /// Consumes the packer, returning its session.
    fn into_session(self) -> PackingSession;

    /// Queues an item.
    fn add_item(&mut self, item: Item) -> Result<()> {
        self.session_mut().enqueue(item)
    }

    /// Queues several items in order. Stops at the first invalid item.
    fn add_items(&mut self, items: impl IntoIterator<Item = Item>) -> Result<()>
    where
        Self: Sized,
    {
        items.into_iter().try_for_each(|item| self.add_item(item))
    }

    /// Places the next queued item.
    fn place_next(&mut self) -> Option<PlaceOutcome> {
        self.session_mut().place_next()
    }

    /// Places every queued item.
    fn place_all(&mut self) -> RunStats {
        self.session_mut().place_all()
    }

    /// Current shelves and unplaced items.
    fn result(&self) -> PackingResult {
        self.session().result()
    }

    /// Counters for this run.
    fn run_stats(&self) -> RunStats {
        self.session().run_stats()
    }

    /// Lifecycle state.
    fn state(&self) -> SessionState {
        self.session().state()
    }

    /// Complete snapshot of the current state.
    fn snapshot(&self) -> Snapshot {
        self.session().snapshot()
    }

    /// Places every queued item and returns the final state.
    fn pack(mut self) -> PackingResult
    where
        Self: Sized,
    {
        self.place_all();
        self.into_session().into_result()
    }
}
