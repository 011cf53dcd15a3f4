//! Keyboard mapping for the terminal UI.

use crossterm::event::KeyCode;
use tictactoe_rewind::Position;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    MoveList,
}

impl Focus {
    /// The other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::MoveList,
            Focus::MoveList => Focus::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Leave the app.
    Quit,
    /// Move the board cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Place at the board cursor.
    PlaceAtCursor,
    /// Place at a specific square.
    Place(Position),
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Select the entry above in the move list.
    SelectPrevious,
    /// Select the entry below in the move list.
    SelectNext,
    /// Jump to the selected move-list entry.
    JumpToSelected,
    /// Flip the move-list order.
    ToggleSort,
    /// Jump one move back.
    StepBack,
    /// Jump one move forward.
    StepForward,
    /// Jump to the empty board.
    JumpToStart,
    /// Jump to the latest recorded move.
    JumpToLatest,
}

/// Maps a key press to a command, given the focused panel.
pub fn command_for(key: KeyCode, focus: Focus) -> Option<AppCommand> {
    let command = match (key, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => AppCommand::Quit,
        (KeyCode::Tab | KeyCode::BackTab, _) => AppCommand::SwitchFocus,
        (KeyCode::Char('s'), _) => AppCommand::ToggleSort,
        (KeyCode::Char('u'), _) => AppCommand::StepBack,
        (KeyCode::Char('r'), _) => AppCommand::StepForward,
        (KeyCode::Home, _) => AppCommand::JumpToStart,
        (KeyCode::End, _) => AppCommand::JumpToLatest,
        (KeyCode::Char(c @ '1'..='9'), _) => {
            let index = c.to_digit(10)? as usize - 1;
            AppCommand::Place(Position::from_index(index)?)
        }
        (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right, Focus::Board) => {
            AppCommand::MoveCursor(key)
        }
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => AppCommand::PlaceAtCursor,
        (KeyCode::Up, Focus::MoveList) => AppCommand::SelectPrevious,
        (KeyCode::Down, Focus::MoveList) => AppCommand::SelectNext,
        (KeyCode::Enter | KeyCode::Char(' '), Focus::MoveList) => AppCommand::JumpToSelected,
        _ => return None,
    };
    Some(command)
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
