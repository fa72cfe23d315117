//! Command-line surface: argument parsing and per-command handlers.

pub mod commands;
pub mod parser;
