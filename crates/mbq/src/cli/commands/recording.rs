//! Implementation of `mbq recording`.

use std::process::ExitCode;

use mbq_lucene::Term;
use mbq_search::RecordingSearch;

use super::shared;
use crate::cli::args::{ClauseArgs, RecordingCommand};

/// Builds and prints a recording search query.
pub fn run(cmd: &RecordingCommand) -> ExitCode {
    match build(cmd) {
        Ok(search) => shared::finish(search.into_query(), &cmd.output),
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Translates parsed flags into a `RecordingSearch`.
fn build(cmd: &RecordingCommand) -> Result<RecordingSearch, String> {
    let mut search = RecordingSearch::new();
    for term in &cmd.terms {
        search = search.default_field(Term::escaped(term));
    }
    if let Some(recording) = &cmd.recording {
        search = search.recording(Term::escaped(recording));
    }
    if let Some(artist) = &cmd.artist {
        search = search.artist(Term::escaped(artist));
    }
    if let Some(arid) = &cmd.arid {
        search = search.artist_id(arid.clone());
    }
    if let Some(rid) = &cmd.rid {
        search = search.recording_id(rid.clone());
    }
    if let Some(tid) = &cmd.tid {
        search = search.track_id(tid.clone());
    }
    if let Some(release) = &cmd.release {
        search = search.release(Term::escaped(release));
    }
    if let Some(isrc) = &cmd.isrc {
        search = search.isrc(Term::escaped(isrc));
    }
    if let Some(dur) = cmd.dur {
        search = search.duration(dur);
    }
    if let Some(date) = &cmd.date {
        search = search.date(shared::date_term(date));
    }
    if let Some(country) = &cmd.country {
        search = search.country(Term::escaped(country));
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
    if let Some(video) = cmd.video {
        search = search.video(video);
    }
    apply_clauses(search, &cmd.clauses)
}

/// Applies the generic clause flags to the builder.
fn apply_clauses(
    mut search: RecordingSearch,
    clauses: &ClauseArgs,
) -> Result<RecordingSearch, String> {
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
