//! Root invariant: history starts at the empty board.

use super::Invariant;
use crate::Game;

/// Invariant: the first snapshot is the empty board with no placement.
pub struct RootIsEmptyInvariant;

impl Invariant<Game> for RootIsEmptyInvariant {
    fn holds(game: &Game) -> bool {
        game.history().get(0).is_some_and(|root| {
            root.board().occupied() == 0 && root.placed().is_none()
        })
    }

    fn description() -> &'static str {
        "History starts at the empty board"
    }
}
