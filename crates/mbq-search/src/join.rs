//! Combinator sugar for building compound terms from plain values.
//!
//! [`Term`] already carries `or`, `and`, `inclusive`, and `exclusive`.
//! These traits put the same combinators on the values themselves, so
//! `"guitar".or("bass")` works without routing through [`Term`] by
//! hand.

use chrono::NaiveDate;
use mbq_lucene::{Phrase, SingleTerm, Term};

use crate::{
    mbid::{
        AreaMbid, ArtistMbid, LabelMbid, RecordingMbid, ReleaseGroupMbid, ReleaseMbid, TrackMbid,
        WorkMbid,
    },
    year::Year,
};

/// Joins values into `OR` and `AND` compound terms.
pub trait TermJoin: Into<Term> + Sized {
    /// Joins with `other` so either value matches.
    fn or(self, other: impl Into<Term>) -> Term {
        self.into().or(other)
    }

    /// Joins with `other` so both values must match.
    fn and(self, other: impl Into<Term>) -> Term {
        self.into().and(other)
    }
}

/// Builds range terms between two values.
pub trait TermRange: TermJoin {
    /// A range matching both endpoints (`[from TO to]`).
    fn inclusive(self, to: impl Into<Term>) -> Term {
        self.into().inclusive(to)
    }

    /// A range excluding both endpoints (`{from TO to}`).
    fn exclusive(self, to: impl Into<Term>) -> Term {
        self.into().exclusive(to)
    }
}

impl TermJoin for &str {}
impl TermJoin for String {}
impl TermJoin for SingleTerm {}
impl TermJoin for Phrase {}
impl TermJoin for i8 {}
impl TermJoin for i16 {}
impl TermJoin for i32 {}
impl TermJoin for i64 {}
impl TermJoin for u8 {}
impl TermJoin for u16 {}
impl TermJoin for u32 {}
impl TermJoin for u64 {}
impl TermJoin for NaiveDate {}
impl TermJoin for Year {}

impl TermRange for &str {}
impl TermRange for String {}
impl TermRange for SingleTerm {}
impl TermRange for Phrase {}
impl TermRange for i8 {}
impl TermRange for i16 {}
impl TermRange for i32 {}
impl TermRange for i64 {}
impl TermRange for u8 {}
impl TermRange for u16 {}
impl TermRange for u32 {}
impl TermRange for u64 {}
impl TermRange for NaiveDate {}
impl TermRange for Year {}

impl TermJoin for AreaMbid {}
impl TermJoin for ArtistMbid {}
impl TermJoin for LabelMbid {}
impl TermJoin for RecordingMbid {}
impl TermJoin for ReleaseMbid {}
impl TermJoin for ReleaseGroupMbid {}
impl TermJoin for TrackMbid {}
impl TermJoin for WorkMbid {}

#[cfg(test)]
mod test {
    use super::*;
    use mbq_lucene::Expression;

    #[test]
    fn strings_join_with_or() {
        assert_eq!("guitar".or("bass").build(), "(guitar OR bass)");
    }

    #[test]
    fn joins_chain_without_nesting() {
        let term = "guitar".or("bass").or("drums");
        assert_eq!(term.build(), "(guitar OR bass OR drums)");
    }

    #[test]
    fn numbers_make_ranges() {
        assert_eq!(1000_u32.inclusive(2000).build(), "[1000 TO 2000]");
        assert_eq!(1000_u32.exclusive(2000).build(), "{1000 TO 2000}");
    }

    #[test]
    fn dates_make_quoted_ranges() {
        let from = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        let to = NaiveDate::from_ymd_opt(2020, 1, 4).unwrap();
        assert_eq!(
            from.inclusive(to).build(),
            "[\"2020-01-02\" TO \"2020-01-04\"]"
        );
    }

    #[test]
    fn years_make_ranges() {
        let term = Year::new(1969).inclusive(Year::new(1974));
        assert_eq!(term.build(), "[1969 TO 1974]");
    }

    #[test]
    fn mbids_join_with_or() {
        let term = ArtistMbid::various_artists().or(ArtistMbid::anonymous());
        assert_eq!(
            term.build(),
            "(89ad4ac3-39f7-470e-963a-56509c546377 OR f731ccc4-e22a-43af-a747-64213329e088)"
        );
    }

    #[test]
    fn phrases_join_with_and() {
        let term = Phrase::new("Thick as a Brick").and(Phrase::new("Aqualung"));
        assert_eq!(term.build(), "(\"Thick as a Brick\" AND \"Aqualung\")");
    }
}
