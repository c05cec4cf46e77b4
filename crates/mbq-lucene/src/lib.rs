//! Lucene query construction for the MusicBrainz search API.
//!
//! This crate builds the query strings the MusicBrainz search server parses
//! with the Lucene classic query parser:
//!
//! - **Terms**: `Aqualung` - single word tokens
//! - **Phrases**: `"Thick as a Brick"` - quoted exact sequences
//! - **Fields**: `artist:Tull` - restrict a term to an indexed attribute
//! - **Require/prohibit**: `+term` / `-term` - presence constraints
//! - **Fuzzy**: `term~2` - bounded edit-distance matching
//! - **Proximity**: `"wood spirit"~5` - bounded word-distance phrases
//! - **Boost**: `term^4` - score weighting
//! - **Boolean**: `(a AND b)` / `(a OR b)` - explicit grouping
//! - **Ranges**: `[1970 TO 1979]` / `{a TO b}` - inclusive and exclusive
//!
//! Callers compose a tree of [`Term`] and [`Field`] nodes, collect them in a
//! [`Query`], and render the result with [`Expression::build`]. All nodes are
//! immutable values; rendering never mutates the tree.
//!
//! # Example
//!
//! ```
//! use mbq_lucene::{Expression, Field, Query, Term};
//!
//! let mut query = Query::new();
//! query.add(Field::new("artist", Term::new("Jethro Tull")));
//! query.add(Field::new("arid", Term::new("5b11f4ce-a62d-471e-81fc-a69a8278c7da")));
//! assert_eq!(
//!     query.build(),
//!     r#"artist:"Jethro Tull" arid:5b11f4ce-a62d-471e-81fc-a69a8278c7da"#
//! );
//! ```

#![warn(missing_docs)]

mod escape;
mod expression;
mod field;
mod query;
mod term;

pub use escape::escape;
pub use expression::Expression;
pub use field::{Field, FieldExpr};
pub use query::Query;
pub use term::{DEFAULT_FUZZY_EDITS, Phrase, SingleTerm, Term};
