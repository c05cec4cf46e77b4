//! Implementation of `mbq release-group`.

use std::process::ExitCode;

use mbq_lucene::Term;
use mbq_search::ReleaseGroupSearch;

use super::shared;
use crate::cli::args::{ClauseArgs, ReleaseGroupCommand};

/// Builds and prints a release group search query.
pub fn run(cmd: &ReleaseGroupCommand) -> ExitCode {
    match build(cmd) {
        Ok(search) => shared::finish(search.into_query(), &cmd.output),
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Translates parsed flags into a `ReleaseGroupSearch`.
fn build(cmd: &ReleaseGroupCommand) -> Result<ReleaseGroupSearch, String> {
    let mut search = ReleaseGroupSearch::new();
    for term in &cmd.terms {
        search = search.default_field(Term::escaped(term));
    }
    if let Some(title) = &cmd.release_group {
        search = search.release_group(Term::escaped(title));
    }
    if let Some(artist) = &cmd.artist {
        search = search.artist(Term::escaped(artist));
    }
    if let Some(arid) = &cmd.arid {
        search = search.artist_id(arid.clone());
    }
    if let Some(rgid) = &cmd.rgid {
        search = search.release_group_id(rgid.clone());
    }
    if let Some(release) = &cmd.release {
        search = search.release(Term::escaped(release));
    }
    if let Some(releases) = cmd.releases {
        search = search.release_count(releases);
    }
    if let Some(date) = &cmd.first_release_date {
        search = search.first_release_date(shared::date_term(date));
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
fn apply_clauses(
    mut search: ReleaseGroupSearch,
    clauses: &ClauseArgs,
) -> Result<ReleaseGroupSearch, String> {
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
