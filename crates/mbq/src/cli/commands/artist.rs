//! Implementation of `mbq artist`.

use std::process::ExitCode;

use mbq_lucene::{SingleTerm, Term};
use mbq_search::ArtistSearch;

use super::shared;
use crate::cli::args::{ArtistCommand, ClauseArgs};

/// Builds and prints an artist search query.
pub fn run(cmd: &ArtistCommand) -> ExitCode {
    match build(cmd) {
        Ok(search) => shared::finish(search.into_query(), &cmd.output),
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Translates parsed flags into an `ArtistSearch`.
fn build(cmd: &ArtistCommand) -> Result<ArtistSearch, String> {
    let mut search = ArtistSearch::new();
    for term in &cmd.terms {
        search = search.default_field(Term::escaped(term));
    }
    if let Some(artist) = &cmd.artist {
        search = search.artist(Term::escaped(artist));
    }
    if let Some(word) = &cmd.fuzzy {
        search = search.artist(SingleTerm::escaped(word).fuzzy());
    }
    if let Some(arid) = &cmd.arid {
        search = search.artist_id(arid.clone());
    }
    if let Some(alias) = &cmd.alias {
        search = search.alias(Term::escaped(alias));
    }
    if let Some(tag) = &cmd.tag {
        search = search.tag(Term::escaped(tag));
    }
    if let Some(country) = &cmd.country {
        search = search.country(Term::escaped(country));
    }
    if let Some(kind) = &cmd.artist_type {
        search = search.artist_type(Term::escaped(kind));
    }
    if let Some(begin) = &cmd.begin {
        search = search.begin_date(shared::date_term(begin));
    }
    if let Some(end) = &cmd.end {
        search = search.end_date(shared::date_term(end));
    }
    if let Some(ended) = cmd.ended {
        search = search.ended(ended);
    }
    apply_clauses(search, &cmd.clauses)
}

/// Applies the generic clause flags to the builder.
fn apply_clauses(mut search: ArtistSearch, clauses: &ClauseArgs) -> Result<ArtistSearch, String> {
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
