//! Terminal front end: command parsing, rendering and the input loop.

pub mod commands;
pub mod render;
pub mod runner;

pub use commands::{parse_command, Command};
pub use runner::{Flow, Runner};
