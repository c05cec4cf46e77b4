//! Implementation of `mbq release`.

use std::process::ExitCode;

use mbq_lucene::Term;
use mbq_search::ReleaseSearch;

use super::shared;
use crate::cli::args::{ClauseArgs, ReleaseCommand};

/// Builds and prints a release search query.
pub fn run(cmd: &ReleaseCommand) -> ExitCode {
    match build(cmd) {
        Ok(search) => shared::finish(search.into_query(), &cmd.output),
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Translates parsed flags into a `ReleaseSearch`.
fn build(cmd: &ReleaseCommand) -> Result<ReleaseSearch, String> {
    let mut search = ReleaseSearch::new();
    for term in &cmd.terms {
        search = search.default_field(Term::escaped(term));
    }
    if let Some(release) = &cmd.release {
        search = search.release(Term::escaped(release));
    }
    if let Some(artist) = &cmd.artist {
        search = search.artist(Term::escaped(artist));
    }
    if let Some(arid) = &cmd.arid {
        search = search.artist_id(arid.clone());
    }
    if let Some(reid) = &cmd.reid {
        search = search.release_id(reid.clone());
    }
    if let Some(rgid) = &cmd.rgid {
        search = search.release_group_id(rgid.clone());
    }
    if let Some(laid) = &cmd.laid {
        search = search.label_id(laid.clone());
    }
    if let Some(label) = &cmd.label {
        search = search.label(Term::escaped(label));
    }
    if let Some(catno) = &cmd.catno {
        search = search.catalog_number(Term::escaped(catno));
    }
    if let Some(barcode) = &cmd.barcode {
        search = search.barcode(Term::escaped(barcode));
    }
    if let Some(country) = &cmd.country {
        search = search.country(Term::escaped(country));
    }
    if let Some(date) = &cmd.date {
        search = search.date(shared::date_term(date));
    }
    if let Some(format) = &cmd.format {
        search = search.format(Term::escaped(format));
    }
    if let Some(script) = &cmd.script {
        search = search.script(Term::escaped(script));
    }
    if let Some(language) = &cmd.language {
        search = search.language(Term::escaped(language));
    }
    if let Some(tracks) = cmd.tracks {
        search = search.track_count(tracks);
    }
    if let Some(tag) = &cmd.tag {
        search = search.tag(Term::escaped(tag));
    }
    if let Some(status) = shared::any_status(&cmd.status) {
        search = search.status(status);
    }
    if let Some(kind) = shared::any_type(&cmd.primary_type) {
        search = search.primary_type(kind);
    }
    if let Some(kind) = shared::any_type(&cmd.secondary_type) {
        search = search.secondary_type(kind);
    }
    apply_clauses(search, &cmd.clauses)
}

/// Applies the generic clause flags to the builder.
fn apply_clauses(mut search: ReleaseSearch, clauses: &ClauseArgs) -> Result<ReleaseSearch, String> {
    for clause in &clauses.fields {
        let (field, value) = shared::parse_clause(clause)?;
        search = search.field(field, Term::escaped(value));
    }
    for clause in &clauses.require {
        let (field, value) = shared::parse_clause(clause)?;
        search = search.require(field, Term::escaped(value));
    }
    for clause in &clauses.prohibit {
        let (field, value) = shared::parse_clause(clause)?;
        search = search.prohibit(field, Term::escaped(value));
    }
    for name in &clauses.missing {
        search = search.missing(shared::lookup_field(name)?);
    }
    Ok(search)
}
