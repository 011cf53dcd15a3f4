//! Terminal front end for tictactoe_rewind.
//!
//! # Architecture
//!
//! - **cli**: command-line parsing
//! - **settings**: TOML settings with command-line overrides
//! - **app**: key commands applied to a single owned `Game`
//! - **input**: key to command mapping
//! - **ui**: stateless ratatui rendering of the game view
//! - **replay**: headless replay of scripted actions

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod input;
pub mod replay;
pub mod settings;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use settings::{Settings, SettingsError};
