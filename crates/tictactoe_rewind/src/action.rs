//! Inbound events as first-class values.
//!
//! Every user interaction a front end can report is an [`Action`]. Actions
//! can be logged, parsed from text and replayed against a fresh game.

use super::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A user interaction the engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the next mark at a position.
    Place(Position),
    /// Show the board as it was after the given move.
    Jump(usize),
    /// Flip the move list order.
    ToggleSort,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(pos) => write!(f, "place:{}", pos.to_index()),
            Action::Jump(n) => write!(f, "jump:{}", n),
            Action::ToggleSort => write!(f, "toggle"),
        }
    }
}

/// Failure to parse an [`Action`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid action {:?}: {}", input, reason)]
pub struct ActionParseError {
    /// The text that failed to parse.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl ActionParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Parses `place:<0-8 or label>`, `jump:<n>` or `toggle`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (verb, arg) = match trimmed.split_once(':') {
            Some((verb, arg)) => (verb.trim(), Some(arg.trim())),
            None => (trimmed, None),
        };

        match (verb.to_ascii_lowercase().as_str(), arg) {
            ("place", Some(arg)) => Position::from_label_or_number(arg)
                .map(Action::Place)
                .ok_or_else(|| ActionParseError::new(s, "expected a position 0-8")),
            ("jump", Some(arg)) => arg
                .parse()
                .map(Action::Jump)
                .map_err(|_| ActionParseError::new(s, "expected a move number")),
            ("toggle", None) => Ok(Action::ToggleSort),
            ("place" | "jump", None) => Err(ActionParseError::new(s, "missing argument")),
            ("toggle", Some(_)) => Err(ActionParseError::new(s, "toggle takes no argument")),
            _ => Err(ActionParseError::new(s, "unknown action")),
        }
    }
}

/// Parses a comma- or whitespace-separated list of actions.
///
/// # Errors
///
/// Returns the first entry that fails to parse.
pub fn parse_actions(s: &str) -> Result<Vec<Action>, ActionParseError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_form() {
        assert_eq!("place:4".parse::<Action>(), Ok(Action::Place(Position::Center)));
        assert_eq!("PLACE:top-left".parse::<Action>(), Ok(Action::Place(Position::TopLeft)));
        assert_eq!("jump:12".parse::<Action>(), Ok(Action::Jump(12)));
        assert_eq!(" toggle ".parse::<Action>(), Ok(Action::ToggleSort));
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["place:9", "place", "jump:x", "toggle:1", "undo"] {
            assert!(bad.parse::<Action>().is_err(), "{} should not parse", bad);
        }
        let err = "place:9".parse::<Action>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid action \"place:9\": expected a position 0-8");
    }

    #[test]
    fn test_display_parses_back() {
        for action in [Action::Place(Position::BottomCenter), Action::Jump(3), Action::ToggleSort] {
            assert_eq!(action.to_string().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn test_parse_list() {
        let actions = parse_actions("place:0, place:4\njump:1,toggle").unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Place(Position::TopLeft),
                Action::Place(Position::Center),
                Action::Jump(1),
                Action::ToggleSort,
            ]
        );
        assert!(parse_actions("place:0,bogus").is_err());
    }
}
