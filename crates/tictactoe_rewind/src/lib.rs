//! Tic-tac-toe with move history and time travel.
//!
//! The crate is the pure core of the game: rules for legal moves and
//! win/tie detection, plus a history model that can jump back to any
//! earlier move and branch from it. Front ends drive a [`Game`] with
//! [`Action`]s and render the [`GameView`] it projects.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Game, Position};
//!
//! let mut game = Game::new();
//! game.place_mark(Position::Center);
//! game.place_mark(Position::TopLeft);
//! game.jump_to(1).unwrap();
//!
//! let view = game.view();
//! assert_eq!(view.status, "Next player: O");
//! assert_eq!(view.moves.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Action, ActionParseError, parse_actions};
pub use game::{Game, GameError, JumpError, Placement, Rejection};
pub use history::{History, Snapshot};
pub use position::Position;
pub use rules::{Line, Outcome, evaluate};
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveDescriptor, SortOrder, move_label, move_list, status_text};
