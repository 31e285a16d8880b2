//! Command-line client for the home inventory service
//!
//! Each command drives one screen end to end: dispatch its events, wait for
//! the screen to settle, then print the resulting state or its error.

pub mod app;
pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

pub use app::App;
pub use cli::{Cli, Command, ConfigAction};
