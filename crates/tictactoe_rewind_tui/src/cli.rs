//! Command-line interface for tictactoe_rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe_rewind.toml")]
    pub config: PathBuf,

    /// Show the move list latest-first
    #[arg(long, global = true)]
    pub descending: bool,

    /// Override the trace log file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a list of actions to a fresh game and print the result
    Replay {
        /// Actions such as "place:4,place:0,jump:1,toggle"
        #[arg(short, long)]
        events: String,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_globals() {
        let cli = Cli::try_parse_from(["tictactoe_rewind", "play", "--descending", "-c", "my.toml"])
            .unwrap();
        assert!(matches!(cli.command, Command::Play));
        assert!(cli.descending);
        assert_eq!(cli.config, PathBuf::from("my.toml"));
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_parse_replay() {
        let cli =
            Cli::try_parse_from(["tictactoe_rewind", "replay", "--events", "place:4", "--json"])
                .unwrap();
        match cli.command {
            Command::Replay { events, json } => {
                assert_eq!(events, "place:4");
                assert!(json);
            }
            Command::Play => panic!("expected replay"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["tictactoe_rewind"]).is_err());
    }
}
