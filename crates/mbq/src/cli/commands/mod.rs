//! CLI command implementations.

pub mod artist;
pub mod escape;
pub mod fields;
pub mod recording;
pub mod release;
pub mod release_group;

mod shared;

use std::process::ExitCode;

use super::args::Commands;

/// Dispatches a parsed command to its implementation.
pub fn run(command: Commands) -> ExitCode {
    match command {
        Commands::Artist(cmd) => artist::run(&cmd),
        Commands::Recording(cmd) => recording::run(&cmd),
        Commands::Release(cmd) => release::run(&cmd),
        Commands::ReleaseGroup(cmd) => release_group::run(&cmd),
        Commands::Fields(cmd) => fields::run(&cmd),
        Commands::Escape(cmd) => escape::run(&cmd),
    }
}
