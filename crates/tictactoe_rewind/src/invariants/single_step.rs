//! Step invariant: each move fills exactly one square.

use super::Invariant;
use crate::{Game, Player, Position, Square};

/// Invariant: every snapshot after the first differs from its
/// predecessor in exactly the recorded square, which went from empty to
/// the mark of the player whose turn it was.
pub struct SingleStepInvariant;

impl Invariant<Game> for SingleStepInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let (before, after) = (pair[0].board(), pair[1].board());
                let Some(placed) = *pair[1].placed() else {
                    return false;
                };
                let expected = Square::Occupied(Player::for_move_count(i));
                Position::ALL.iter().all(|&pos| {
                    if pos == placed {
                        before.get(pos) == Square::Empty && after.get(pos) == expected
                    } else {
                        before.get(pos) == after.get(pos)
                    }
                })
            })
    }

    fn description() -> &'static str {
        "Each move fills exactly one empty square with the mover's mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Snapshot;

    #[test]
    fn test_played_game_holds() {
        let mut game = Game::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            game.place_mark(pos);
        }
        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_two_squares_in_one_step_violates() {
        let mut game = Game::new();
        game.place_mark(Position::Center);
        let board = game
            .board()
            .with_mark(Position::TopLeft, Player::X);
        game.history_mut().snapshots_mut()[1] = Snapshot::new(board, Some(Position::Center));
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut game = Game::new();
        game.place_mark(Position::Center);
        let board = crate::Board::new().with_mark(Position::Center, Player::O);
        game.history_mut().snapshots_mut()[1] = Snapshot::new(board, Some(Position::Center));
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_missing_placement_violates() {
        let mut game = Game::new();
        game.place_mark(Position::Center);
        let board = *game.board();
        game.history_mut().snapshots_mut()[1] = Snapshot::new(board, None);
        assert!(!SingleStepInvariant::holds(&game));
    }
}
