//! End-to-end tests for the headless replay command.

use tictactoe_rewind::{Outcome, Player, Position, SortOrder, Square};
use tictactoe_rewind_tui::replay::{render, replay};

#[test]
fn test_replay_branch_discards_future() {
    let view = replay(
        "place:0 place:1 place:2 place:3 jump:2 place:8",
        SortOrder::Ascending,
    )
    .unwrap();
    let labels: Vec<&str> = view.moves.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "(0,0) Go to move #1",
            "(1,0) Go to move #2",
            "(2,2) Go to move #3",
        ]
    );
    assert!(view.moves[3].is_current);
}

#[test]
fn test_replay_tie() {
    let view = replay(
        "place:0,place:1,place:2,place:4,place:3,place:5,place:7,place:6,place:8",
        SortOrder::Ascending,
    )
    .unwrap();
    assert_eq!(view.outcome, Outcome::Tie);
    assert_eq!(view.status, "Winner: tie");
    assert_eq!(view.winning_line, None);
}

#[test]
fn test_replay_descending_text() {
    let view = replay("place:center,place:top-left", SortOrder::Descending).unwrap();
    let text = render(&view, false).unwrap();
    let first_entry = text.lines().find(|l| l.contains("Go to")).unwrap();
    assert_eq!(first_entry, "> (0,0) Go to move #2");
    assert_eq!(view.board.get(Position::Center), Square::Occupied(Player::X));
}

#[test]
fn test_replay_rejects_unknown_action() {
    assert!(replay("place:0,undo", SortOrder::Ascending).is_err());
}
