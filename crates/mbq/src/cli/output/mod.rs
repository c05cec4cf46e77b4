//! Output formatting for built queries.

use std::process::ExitCode;

use serde::Serialize;

use super::args::OutputArgs;

/// JSON document wrapping a built query string.
#[derive(Serialize)]
struct JsonQueryOutput<'a> {
    /// The rendered Lucene query.
    query: &'a str,
}

/// Prints a built query in the requested output format.
pub fn output_query(query: &str, output: &OutputArgs) -> ExitCode {
    if output.json {
        let doc = JsonQueryOutput { query };
        match serde_json::to_string_pretty(&doc) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{query}");
    }
    ExitCode::SUCCESS
}
