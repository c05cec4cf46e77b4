//! Command-line interface for building MusicBrainz search queries.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::commands::run(cli.command)
}
