//! Board snapshots and the branching move history.
//!
//! History is a list of snapshots starting at the empty board. Moving
//! back through it never discards anything; recording a new move from
//! an earlier point drops the abandoned future first and then appends.

use super::{Board, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A board as it stood after one placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Snapshot {
    /// Board after the placement.
    board: Board,
    /// Square filled to reach this board; `None` for the initial board.
    placed: Option<Position>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self::new(Board::new(), None)
    }
}

/// Ordered snapshots, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// A history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: the initial board is always present.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// The latest snapshot.
    pub fn latest(&self) -> &Snapshot {
        // Non-empty by construction.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// All snapshots in play order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Keeps snapshots `0..=cursor`, then appends `snapshot`.
    ///
    /// Returns the index of the appended snapshot. A cursor past the end
    /// keeps everything.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub fn branch(&mut self, cursor: usize, snapshot: Snapshot) -> usize {
        let keep = cursor + 1;
        if keep < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - keep,
                "Dropping moves after cursor"
            );
            self.snapshots.truncate(keep);
        }
        self.snapshots.push(snapshot);
        self.snapshots.len() - 1
    }

    #[cfg(test)]
    pub(crate) fn snapshots_mut(&mut self) -> &mut Vec<Snapshot> {
        &mut self.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
