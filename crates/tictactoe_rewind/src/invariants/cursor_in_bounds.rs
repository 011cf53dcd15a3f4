//! Cursor invariant: the cursor always names a recorded move.

use super::Invariant;
use crate::Game;

/// Invariant: `cursor < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<Game> for CursorInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.cursor() < game.history().len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded move"
    }
}
