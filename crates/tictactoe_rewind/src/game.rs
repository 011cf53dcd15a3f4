//! The game engine: history, cursor and move-list order.
//!
//! `Game` is the single owner of all mutable state. Everything a front
//! end shows is derived on read from the three fields below, so nothing
//! can fall out of step with the cursor.

use super::action::Action;
use super::history::{History, Snapshot};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{self, Outcome};
use super::view::{GameView, SortOrder};
use super::{Board, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Why a placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The displayed board is already won or tied.
    #[display("Game is already over")]
    GameOver,
}

/// Result of [`Game::place_mark`].
///
/// Illegal placements are not errors; they leave the game untouched and
/// report why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The mark was placed and recorded as the newest move.
    Placed {
        /// Player whose mark was placed.
        player: Player,
        /// Square that was filled.
        position: Position,
    },
    /// Nothing changed.
    Ignored(Rejection),
}

impl Placement {
    /// True if the move was recorded.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// Attempt to jump outside the recorded history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// Requested move does not exist.
    #[display("Move #{} does not exist (history holds {} entries)", requested, len)]
    OutOfRange {
        /// Requested move number.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Error from [`Game::apply`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// A jump was rejected.
    #[display("{}", _0)]
    Jump(JumpError),
}

/// Tic-tac-toe with full move history and time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: History,
    cursor: usize,
    sort_order: SortOrder,
}

impl Game {
    /// Creates a new game at the empty board, move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::Ascending)
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: History::new(),
            cursor: 0,
            sort_order,
        }
    }

    /// Places the next player's mark on the displayed board.
    ///
    /// Ignored when the square is taken or the displayed board is already
    /// decided. Otherwise every move after the cursor is discarded, the new
    /// board is appended, and the cursor moves to it.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn place_mark(&mut self, position: Position) -> Placement {
        let current = *self.current();

        if rules::evaluate(current.board()).is_over() {
            debug!("Placement ignored: game over");
            return Placement::Ignored(Rejection::GameOver);
        }
        if !current.board().is_empty(position) {
            debug!("Placement ignored: square occupied");
            return Placement::Ignored(Rejection::SquareOccupied(position));
        }

        let player = self.next_player();
        let snapshot = Snapshot::new(current.board().with_mark(position, player), Some(position));
        self.cursor = self.history.branch(self.cursor, snapshot);
        info!(%player, %position, move_number = self.cursor, "Mark placed");

        self.debug_check();
        Placement::Placed { player, position }
    }

    /// Moves the cursor to `move_number`, leaving history intact.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if no such move exists; the game
    /// is left unchanged.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), JumpError> {
        let len = self.history.len();
        if move_number >= len {
            warn!(len, "Jump target out of range");
            return Err(JumpError::OutOfRange {
                requested: move_number,
                len,
            });
        }
        self.cursor = move_number;
        debug!(next = %self.next_player(), "Jumped");
        self.debug_check();
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = ?self.sort_order, "Sort order toggled");
    }

    /// Applies an inbound event.
    ///
    /// # Errors
    ///
    /// Only jumps can fail; illegal placements are ignored.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Result<(), GameError> {
        match action {
            Action::Place(position) => {
                self.place_mark(position);
            }
            Action::Jump(move_number) => self.jump_to(move_number)?,
            Action::ToggleSort => self.toggle_sort_order(),
        }
        Ok(())
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &Snapshot {
        // Cursor is kept in range by every mutation.
        &self.history.snapshots()[self.cursor]
    }

    /// The board under the cursor.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Full recorded history, including moves after the cursor.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed move.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Player to move on the displayed board, from cursor parity.
    pub fn next_player(&self) -> Player {
        Player::for_move_count(self.cursor)
    }

    /// Outcome of the displayed board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.board())
    }

    /// Read-only projection for rendering.
    pub fn view(&self) -> GameView {
        GameView::from_snapshot(&self.history, self.current(), self.cursor, self.sort_order)
    }

    fn debug_check(&self) {
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "history invariants violated: {:?}",
            GameInvariants::check_all(self)
        );
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    #[cfg(test)]
    pub(crate) fn set_cursor_unchecked(&mut self, cursor: usize) {
        self.cursor = cursor;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
