//! Implementation of `mbq fields`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use mbq_search::{ArtistField, EntityField, RecordingField, ReleaseField, ReleaseGroupField};
use serde::Serialize;

use crate::cli::args::{EntityKind, FieldsCommand};

/// One row of the field listing, for JSON output.
#[derive(Serialize)]
struct JsonField {
    /// The field's query name; empty for the default field.
    field: &'static str,
    /// What the field matches.
    description: &'static str,
}

/// Lists the searchable fields for an entity.
pub fn run(cmd: &FieldsCommand) -> ExitCode {
    match cmd.entity {
        EntityKind::Artist => print_fields::<ArtistField>(cmd.output.json),
        EntityKind::Recording => print_fields::<RecordingField>(cmd.output.json),
        EntityKind::Release => print_fields::<ReleaseField>(cmd.output.json),
        EntityKind::ReleaseGroup => print_fields::<ReleaseGroupField>(cmd.output.json),
    }
}

/// Prints one entity's fields as a table or as JSON.
fn print_fields<F: EntityField>(json: bool) -> ExitCode {
    if json {
        return print_json::<F>();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Field", "Description"]);
    for &field in F::all() {
        let name = if field.as_str().is_empty() {
            "(default)"
        } else {
            field.as_str()
        };
        table.add_row(vec![Cell::new(name), Cell::new(field.description())]);
    }
    println!("{table}");
    ExitCode::SUCCESS
}

/// Serializes the field list as pretty JSON.
fn print_json<F: EntityField>() -> ExitCode {
    let rows: Vec<JsonField> = F::all()
        .iter()
        .map(|&field| JsonField {
            field: field.as_str(),
            description: field.description(),
        })
        .collect();
    match serde_json::to_string_pretty(&rows) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}
