//! Implementation of `mbq escape`.

use std::process::ExitCode;

use mbq_lucene::escape;

use crate::cli::args::EscapeCommand;

/// Escapes Lucene reserved characters and prints the result.
pub fn run(cmd: &EscapeCommand) -> ExitCode {
    println!("{}", escape(&cmd.text));
    ExitCode::SUCCESS
}
