//! Shared helpers for command implementations.

use std::process::ExitCode;

use chrono::NaiveDate;
use mbq_lucene::{Expression, Query, Term};
use mbq_search::{EntityField, ReleaseGroupType, ReleaseStatus, StatusTerm, TypeTerm};

use crate::cli::{args::OutputArgs, output};

/// Splits a FIELD=VALUE clause into a typed field and its value.
pub fn parse_clause<F: EntityField>(clause: &str) -> Result<(F, &str), String> {
    let (name, value) = clause
        .split_once('=')
        .ok_or_else(|| format!("bad clause '{clause}', expected FIELD=VALUE"))?;
    Ok((lookup_field(name)?, value))
}

/// Finds a field by its query name.
pub fn lookup_field<F: EntityField>(name: &str) -> Result<F, String> {
    F::all()
        .iter()
        .copied()
        .find(|field| field.as_str() == name)
        .ok_or_else(|| {
            let names: Vec<&str> = F::all()
                .iter()
                .map(|field| field.as_str())
                .filter(|n| !n.is_empty())
                .collect();
            format!(
                "unknown field '{}', expected one of: {}",
                name,
                names.join(", ")
            )
        })
}

/// Interprets a date flag, quoting full dates and escaping partial ones.
pub fn date_term(value: &str) -> Term {
    match value.parse::<NaiveDate>() {
        Ok(date) => Term::from(date),
        Err(_) => Term::escaped(value),
    }
}

/// Folds repeated status flags into a single alternation.
pub fn any_status(statuses: &[ReleaseStatus]) -> Option<StatusTerm> {
    let mut iter = statuses.iter().copied();
    let first = StatusTerm::from(iter.next()?);
    Some(iter.fold(first, StatusTerm::or))
}

/// Folds repeated type flags into a single alternation.
pub fn any_type(types: &[ReleaseGroupType]) -> Option<TypeTerm> {
    let mut iter = types.iter().copied();
    let first = TypeTerm::from(iter.next()?);
    Some(iter.fold(first, TypeTerm::or))
}

/// Renders a finished query, rejecting queries with no clauses.
pub fn finish(query: Query, output_args: &OutputArgs) -> ExitCode {
    if query.is_empty() {
        eprintln!("error: empty query, give a term or at least one field flag");
        return ExitCode::FAILURE;
    }
    output::output_query(&query.build(), output_args)
}
