//! Application state and logic.

use crate::input::{AppCommand, Focus, move_cursor};
use tictactoe_rewind::{Game, GameView, Placement, Position, SortOrder};
use tracing::{debug, instrument, warn};

/// Main application state.
///
/// The game engine owns all game state; the app only adds what the
/// terminal needs on top of it: a board cursor, the focused panel and
/// the selected row of the move list.
#[derive(Debug)]
pub struct App {
    game: Game,
    board_cursor: Position,
    focus: Focus,
    selected_row: usize,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            game: Game::with_sort_order(sort_order),
            board_cursor: Position::Center,
            focus: Focus::Board,
            selected_row: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Projection of the game for drawing.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Square under the board cursor.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the displayed move list.
    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Last message for the user, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one command from the keyboard.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: AppCommand) {
        self.notice = None;
        match command {
            AppCommand::Quit => self.should_quit = true,
            AppCommand::MoveCursor(key) => {
                self.board_cursor = move_cursor(self.board_cursor, key);
            }
            AppCommand::PlaceAtCursor => self.place(self.board_cursor),
            AppCommand::Place(position) => {
                self.board_cursor = position;
                self.place(position);
            }
            AppCommand::SwitchFocus => {
                self.focus = self.focus.toggle();
                self.select_current();
            }
            AppCommand::SelectPrevious => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            AppCommand::SelectNext => {
                let last = self.game.history().len() - 1;
                self.selected_row = (self.selected_row + 1).min(last);
            }
            AppCommand::JumpToSelected => {
                if let Some(entry) = self.view().moves.get(self.selected_row) {
                    self.jump(entry.move_index);
                }
            }
            AppCommand::ToggleSort => {
                self.game.toggle_sort_order();
                self.select_current();
            }
            AppCommand::StepBack => match self.game.cursor().checked_sub(1) {
                Some(target) => self.jump(target),
                None => self.notice = Some("Already at game start".to_string()),
            },
            AppCommand::StepForward => {
                let target = self.game.cursor() + 1;
                if target < self.game.history().len() {
                    self.jump(target);
                } else {
                    self.notice = Some("Already at the latest move".to_string());
                }
            }
            AppCommand::JumpToStart => self.jump(0),
            AppCommand::JumpToLatest => self.jump(self.game.history().len() - 1),
        }
    }

    fn place(&mut self, position: Position) {
        match self.game.place_mark(position) {
            Placement::Placed { player, position } => {
                debug!(%player, %position, "Move applied to UI state");
                self.select_current();
            }
            Placement::Ignored(reason) => {
                self.notice = Some(reason.to_string());
            }
        }
    }

    fn jump(&mut self, move_number: usize) {
        if let Err(e) = self.game.jump_to(move_number) {
            warn!(error = %e, "Jump rejected");
            self.notice = Some(e.to_string());
            return;
        }
        self.select_current();
    }

    /// Points the list selection at the displayed move.
    fn select_current(&mut self) {
        if let Some(row) = self.view().moves.iter().position(|m| m.is_current) {
            self.selected_row = row;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use tictactoe_rewind::{Player, Square};

    #[test]
    fn test_place_at_cursor() {
        let mut app = App::new(SortOrder::Ascending);
        app.dispatch(AppCommand::MoveCursor(KeyCode::Up));
        app.dispatch(AppCommand::PlaceAtCursor);
        assert_eq!(
            app.game().board().get(Position::TopCenter),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.selected_row(), 1);
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_occupied_square_sets_notice() {
        let mut app = App::new(SortOrder::Ascending);
        app.dispatch(AppCommand::Place(Position::Center));
        app.dispatch(AppCommand::Place(Position::Center));
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.notice(), Some("Square Center is already occupied"));
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut app = App::new(SortOrder::Ascending);
        app.dispatch(AppCommand::Place(Position::TopLeft));
        app.dispatch(AppCommand::Place(Position::Center));
        app.dispatch(AppCommand::StepBack);
        assert_eq!(app.game().cursor(), 1);
        app.dispatch(AppCommand::StepForward);
        assert_eq!(app.game().cursor(), 2);
        app.dispatch(AppCommand::StepForward);
        assert_eq!(app.notice(), Some("Already at the latest move"));
        app.dispatch(AppCommand::JumpToStart);
        app.dispatch(AppCommand::StepBack);
        assert_eq!(app.notice(), Some("Already at game start"));
        app.dispatch(AppCommand::JumpToLatest);
        assert_eq!(app.game().cursor(), 2);
    }

    #[test]
    fn test_jump_to_selected_respects_sort_order() {
        let mut app = App::new(SortOrder::Descending);
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            app.dispatch(AppCommand::Place(pos));
        }
        app.dispatch(AppCommand::SwitchFocus);
        assert_eq!(app.focus(), Focus::MoveList);
        // Latest move is first when descending.
        assert_eq!(app.selected_row(), 0);
        app.dispatch(AppCommand::SelectNext);
        app.dispatch(AppCommand::SelectNext);
        app.dispatch(AppCommand::JumpToSelected);
        assert_eq!(app.game().cursor(), 1);
        assert_eq!(app.selected_row(), 2);
    }

    #[test]
    fn test_toggle_keeps_selection_on_current() {
        let mut app = App::new(SortOrder::Ascending);
        app.dispatch(AppCommand::Place(Position::TopLeft));
        app.dispatch(AppCommand::Place(Position::Center));
        assert_eq!(app.selected_row(), 2);
        app.dispatch(AppCommand::ToggleSort);
        assert_eq!(app.selected_row(), 0);
        assert_eq!(app.view().sort_order, SortOrder::Descending);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(SortOrder::Ascending);
        assert!(!app.should_quit());
        app.dispatch(AppCommand::Quit);
        assert!(app.should_quit());
    }
}
