//! Argument parsing, command dispatch, and output for the `mbq` CLI.

pub mod args;
pub mod commands;
pub mod output;
