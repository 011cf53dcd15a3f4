//! Read-only projection of a game for rendering.
//!
//! Nothing here is stored; every field is computed from history, cursor
//! and sort order each time a view is requested.

use super::game::JumpError;
use super::history::{History, Snapshot};
use super::rules::{self, Line, Outcome};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// The opposite order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label for the control that flips the order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "sort descending",
            SortOrder::Descending => "sort ascending",
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveDescriptor {
    /// History index this entry jumps to.
    pub move_index: usize,
    /// Text shown for the entry.
    pub label: String,
    /// Whether this entry is the displayed move.
    pub is_current: bool,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board under the cursor.
    pub board: Board,
    /// Outcome of that board.
    pub outcome: Outcome,
    /// Status line.
    pub status: String,
    /// Move list, in `sort_order`.
    pub moves: Vec<MoveDescriptor>,
    /// Line to highlight, when the board is won.
    pub winning_line: Option<Line>,
    /// Order of `moves`.
    pub sort_order: SortOrder,
    /// Label for the sort toggle control.
    pub sort_toggle_label: String,
}

impl GameView {
    /// Projects the view for `cursor` over `history`.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] when `cursor` is not a recorded move.
    #[instrument(level = "trace", skip(history))]
    pub fn project(
        history: &History,
        cursor: usize,
        sort_order: SortOrder,
    ) -> Result<Self, JumpError> {
        let current = history.get(cursor).ok_or(JumpError::OutOfRange {
            requested: cursor,
            len: history.len(),
        })?;
        Ok(Self::from_snapshot(history, current, cursor, sort_order))
    }

    /// Builds the view once `current` is known to be `history[cursor]`.
    pub(crate) fn from_snapshot(
        history: &History,
        current: &Snapshot,
        cursor: usize,
        sort_order: SortOrder,
    ) -> Self {
        let board = *current.board();
        let outcome = rules::evaluate(&board);
        Self {
            board,
            outcome,
            status: status_text(&outcome, Player::for_move_count(cursor)),
            moves: move_list(history, cursor, sort_order),
            winning_line: outcome.line(),
            sort_order,
            sort_toggle_label: sort_order.toggle_label().to_string(),
        }
    }

    /// Text rendering used by the headless front end.
    pub fn display(&self) -> String {
        let mut out = format!("{}\n\n{}\n\n[{}]\n", self.board.display(), self.status, self.sort_toggle_label);
        for entry in &self.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            out.push_str(&format!("{} {}\n", marker, entry.label));
        }
        out
    }
}

/// Status line for an outcome.
///
/// A tie reads `Winner: tie`, which keeps it distinct from both a win and
/// a game still in play.
pub fn status_text(outcome: &Outcome, next: Player) -> String {
    match outcome {
        Outcome::Winner { player, .. } => format!("Winner: {}", player),
        Outcome::Tie => "Winner: tie".to_string(),
        Outcome::Ongoing => format!("Next player: {}", next),
    }
}

/// Label for the move list entry at `move_index`.
pub fn move_label(history: &History, move_index: usize) -> String {
    match history.get(move_index).and_then(|s| *s.placed()) {
        Some(pos) if move_index > 0 => format!(
            "({},{}) Go to move #{}",
            pos.column(),
            pos.row(),
            move_index
        ),
        _ => "Go to game start".to_string(),
    }
}

/// Move list in the requested order, marking the cursor entry.
pub fn move_list(history: &History, cursor: usize, sort_order: SortOrder) -> Vec<MoveDescriptor> {
    let mut moves: Vec<_> = (0..history.len())
        .map(|i| MoveDescriptor::new(i, move_label(history, i), i == cursor))
        .collect();
    if sort_order == SortOrder::Descending {
        moves.reverse();
    }
    moves
}
