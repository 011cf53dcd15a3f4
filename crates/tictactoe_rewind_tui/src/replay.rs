//! Headless replay of a scripted list of actions.

use anyhow::{Context, Result};
use tictactoe_rewind::{Game, GameView, SortOrder, parse_actions};
use tracing::{info, instrument};

/// Applies `events` to a fresh game and returns the final view.
///
/// Illegal placements are ignored as they are in the terminal UI. Bad
/// syntax or an out-of-range jump stops the replay with an error.
#[instrument(skip(events))]
pub fn replay(events: &str, sort_order: SortOrder) -> Result<GameView> {
    let actions = parse_actions(events).context("Failed to parse events")?;
    info!(count = actions.len(), "Replaying actions");

    let mut game = Game::with_sort_order(sort_order);
    for (step, action) in actions.into_iter().enumerate() {
        game.apply(action)
            .with_context(|| format!("Action #{} ({}) failed", step + 1, action))?;
    }
    Ok(game.view())
}

/// Renders a replayed view as text or pretty JSON.
pub fn render(view: &GameView, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(view).context("Failed to serialize view")
    } else {
        Ok(view.display())
    }
}
