//! Game rules for tic-tac-toe.
//!
//! Pure functions for classifying a board. Rules are separated from
//! board storage and from history so they can be applied to any
//! snapshot, past or present.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line yet and at least one empty square.
    Ongoing,
    /// A player completed a line.
    Winner {
        /// The winning player.
        player: Player,
        /// The completed line, in board order.
        line: Line,
    },
    /// Board is full with no line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// True once the game is decided, by a win or a tie.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Evaluates a board: winner first, then tie, otherwise ongoing.
///
/// Total over every arrangement of nine squares, reachable or not.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        return Outcome::Winner { player, line };
    }
    if is_draw(board) {
        Outcome::Tie
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    fn board(marks: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (i, c) in marks.chars().enumerate() {
            squares[i] = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let b = line
                    .iter()
                    .fold(Board::new(), |b, pos| b.with_mark(*pos, player));
                assert_eq!(evaluate(&b), Outcome::Winner { player, line });
            }
        }
    }

    #[test]
    fn test_canonical_tie() {
        assert_eq!(evaluate(&board("XOXXOOOXX")), Outcome::Tie);
    }

    #[test]
    fn test_partial_board_without_line_is_ongoing() {
        assert_eq!(evaluate(&board("XOX.O.OX.")), Outcome::Ongoing);
    }

    #[test]
    fn test_win_on_full_board_is_not_tie() {
        let outcome = evaluate(&board("XXXOOXXOO"));
        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(
            outcome.line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_first_line_in_order_reported() {
        // Row 0 and column 0 both complete; rows are checked first.
        let outcome = evaluate(&board("XXXX..X.."));
        assert_eq!(
            outcome.line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_partial_board_is_not_tie() {
        let b = board("XOXXOOOX.");
        assert!(!is_draw(&b));
        assert_eq!(evaluate(&b), Outcome::Ongoing);
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(!Outcome::Ongoing.is_over());
        assert!(Outcome::Tie.is_over());
        assert_eq!(Outcome::Tie.winner(), None);
        assert_eq!(Outcome::Tie.line(), None);
    }
}
