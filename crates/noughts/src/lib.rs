//! Noughts - tic-tac-toe against the computer in the terminal.
//!
//! The game rules live in [`noughts_engine`]; this crate owns everything
//! around them: settings, key handling, rendering and the event loop.
//!
//! # Architecture
//!
//! - **Config**: [`Settings`] from an optional TOML file plus [`Cli`] flags
//! - **App**: [`App`] turns key presses into engine calls
//! - **UI**: stateless ratatui rendering of the app
//! - **TUI**: terminal setup and the event loop in [`run`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod tui;
mod ui;

pub use app::{App, COMPUTER, HUMAN, Phase, Screen};
pub use cli::Cli;
pub use config::{ConfigError, Settings};
pub use input::{EntryKey, Intent};
pub use tui::run;
pub use ui::draw;
