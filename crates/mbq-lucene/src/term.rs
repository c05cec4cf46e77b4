//! Term-level query nodes.
//!
//! [`Term`] is the closed set of node kinds a query term can take, from
//! bare words and quoted phrases up to boolean compounds and ranges.
//! [`SingleTerm`] and [`Phrase`] are standalone types so the modifiers
//! that only make sense for one shape (fuzzy matching on words, proximity
//! on phrases) are methods on that shape alone rather than runtime checks.
//!
//! Escaping is opt-in per term: `new` constructors keep text verbatim,
//! `escaped` constructors backslash-escape reserved characters on render.
//! Typed conversions (numbers, dates, identifiers) never escape.

use std::fmt;

use chrono::NaiveDate;

use crate::{escape::escape_into, expression::Expression};

/// Edit distance applied by [`SingleTerm::fuzzy`].
pub const DEFAULT_FUZZY_EDITS: u8 = 2;

/// A single unquoted word token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleTerm {
    /// The token text, trimmed.
    value: String,
    /// Whether reserved characters are escaped on render.
    escape: bool,
}

impl SingleTerm {
    /// Creates a term that renders its text verbatim. Input is trimmed.
    pub fn new(value: impl AsRef<str>) -> Self {
        Self::raw(value.as_ref().trim(), false)
    }

    /// Creates a term whose reserved characters are escaped on render.
    /// Input is trimmed.
    pub fn escaped(value: impl AsRef<str>) -> Self {
        Self::raw(value.as_ref().trim(), true)
    }

    /// Builds a term from already-trimmed text.
    fn raw(value: &str, escape: bool) -> Self {
        Self {
            value: value.to_string(),
            escape,
        }
    }

    /// The token text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Marks this term fuzzy with the default edit distance of
    /// [`DEFAULT_FUZZY_EDITS`].
    pub fn fuzzy(self) -> Term {
        self.fuzzy_edits(DEFAULT_FUZZY_EDITS)
    }

    /// Marks this term fuzzy, matching words within `max_edits` edits.
    ///
    /// # Panics
    ///
    /// Panics if `max_edits` is greater than 2, the largest edit distance
    /// Lucene supports.
    pub fn fuzzy_edits(self, max_edits: u8) -> Term {
        assert!(
            max_edits <= 2,
            "fuzzy edit distance must be 0..=2, got {max_edits}"
        );
        Term::Fuzzy {
            term: self,
            max_edits,
        }
    }
}

impl Expression for SingleTerm {
    fn append_to(&self, out: &mut String) {
        if self.escape {
            escape_into(out, &self.value);
        } else {
            out.push_str(&self.value);
        }
    }
}

impl fmt::Display for SingleTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

/// A quoted phrase. Renders wrapped in double quotes, even for one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    /// The phrase text, trimmed but with interior whitespace intact.
    value: String,
    /// Whether reserved characters are escaped on render.
    escape: bool,
}

impl Phrase {
    /// Creates a phrase that renders its text verbatim. Input is trimmed.
    pub fn new(value: impl AsRef<str>) -> Self {
        Self::raw(value.as_ref().trim(), false)
    }

    /// Creates a phrase whose reserved characters are escaped on render.
    /// Input is trimmed.
    pub fn escaped(value: impl AsRef<str>) -> Self {
        Self::raw(value.as_ref().trim(), true)
    }

    /// Builds a phrase from already-trimmed text.
    fn raw(value: &str, escape: bool) -> Self {
        Self {
            value: value.to_string(),
            escape,
        }
    }

    /// The phrase text, without the surrounding quotes.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Matches this phrase's words within `distance` words of each other.
    pub fn proximity(self, distance: u32) -> Term {
        Term::Proximity {
            phrase: self,
            distance,
        }
    }
}

impl Expression for Phrase {
    fn append_to(&self, out: &mut String) {
        out.push('"');
        if self.escape {
            escape_into(out, &self.value);
        } else {
            out.push_str(&self.value);
        }
        out.push('"');
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

/// A term-level node in a query expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A single word token.
    Single(SingleTerm),

    /// A quoted phrase.
    Phrase(Phrase),

    /// A regular expression, delimited by escaped slashes.
    Regex {
        /// The pattern text. Escaped on render, never trimmed.
        pattern: String,
    },

    /// The inner term must be present (`+term`).
    Require(Box<Term>),

    /// The inner term must be absent (`-term`).
    Prohibit(Box<Term>),

    /// Negation via the `NOT` keyword.
    Not(Box<Term>),

    /// Fuzzy word match with a bounded edit distance (`term~N`).
    Fuzzy {
        /// The word to match fuzzily.
        term: SingleTerm,
        /// Maximum edit distance, 0..=2.
        max_edits: u8,
    },

    /// Phrase match with a bounded word distance (`"phrase"~N`).
    Proximity {
        /// The phrase to match.
        phrase: Phrase,
        /// Maximum word distance.
        distance: u32,
    },

    /// Score boost for the inner term (`term^N`).
    Boost {
        /// The term whose score is boosted.
        term: Box<Term>,
        /// The boost factor.
        factor: i32,
    },

    /// Conjunction. Renders parenthesized with `AND`.
    And(Vec<Term>),

    /// Disjunction. Renders parenthesized with `OR`.
    Or(Vec<Term>),

    /// Range including both endpoints (`[from TO to]`).
    Inclusive {
        /// Lower endpoint.
        from: Box<Term>,
        /// Upper endpoint.
        to: Box<Term>,
    },

    /// Range excluding both endpoints (`{from TO to}`).
    Exclusive {
        /// Lower endpoint.
        from: Box<Term>,
        /// Upper endpoint.
        to: Box<Term>,
    },
}

impl Term {
    /// Creates a term from text, selecting [`Phrase`] when the trimmed
    /// text contains whitespace and [`SingleTerm`] otherwise. Renders the
    /// text verbatim; use [`Term::escaped`] for untrusted input.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self::classify(text.as_ref(), false)
    }

    /// Like [`Term::new`], but reserved characters in the text are
    /// escaped on render.
    pub fn escaped(text: impl AsRef<str>) -> Self {
        Self::classify(text.as_ref(), true)
    }

    /// Trims and classifies text as a single term or phrase.
    fn classify(text: &str, escape: bool) -> Self {
        let trimmed = text.trim();
        if trimmed.chars().any(char::is_whitespace) {
            Self::Phrase(Phrase::raw(trimmed, escape))
        } else {
            Self::Single(SingleTerm::raw(trimmed, escape))
        }
    }

    /// Creates a regular-expression term. The pattern is not trimmed and
    /// is always escaped on render.
    pub fn regex(pattern: impl Into<String>) -> Self {
        Self::Regex {
            pattern: pattern.into(),
        }
    }

    /// Requires this term to be present (`+term`).
    pub fn require(self) -> Self {
        Self::Require(Box::new(self))
    }

    /// Prohibits this term (`-term`).
    pub fn prohibit(self) -> Self {
        Self::Prohibit(Box::new(self))
    }

    /// Negates this term with the `NOT` keyword.
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Boosts this term's score by `factor` (`term^N`).
    pub fn boost(self, factor: i32) -> Self {
        Self::Boost {
            term: Box::new(self),
            factor,
        }
    }

    /// Combines two terms with `AND`, merging into an existing
    /// conjunction on either side instead of nesting.
    pub fn and(self, other: impl Into<Self>) -> Self {
        match (self, other.into()) {
            (Self::And(mut left), Self::And(right)) => {
                left.extend(right);
                Self::And(left)
            }
            (Self::And(mut left), right) => {
                left.push(right);
                Self::And(left)
            }
            (left, Self::And(mut right)) => {
                right.insert(0, left);
                Self::And(right)
            }
            (left, right) => Self::And(vec![left, right]),
        }
    }

    /// Combines two terms with `OR`, merging into an existing disjunction
    /// on either side instead of nesting.
    pub fn or(self, other: impl Into<Self>) -> Self {
        match (self, other.into()) {
            (Self::Or(mut left), Self::Or(right)) => {
                left.extend(right);
                Self::Or(left)
            }
            (Self::Or(mut left), right) => {
                left.push(right);
                Self::Or(left)
            }
            (left, Self::Or(mut right)) => {
                right.insert(0, left);
                Self::Or(right)
            }
            (left, right) => Self::Or(vec![left, right]),
        }
    }

    /// Builds a range covering both endpoints (`[from TO to]`).
    pub fn inclusive(self, to: impl Into<Self>) -> Self {
        Self::Inclusive {
            from: Box::new(self),
            to: Box::new(to.into()),
        }
    }

    /// Builds a range excluding both endpoints (`{from TO to}`).
    pub fn exclusive(self, to: impl Into<Self>) -> Self {
        Self::Exclusive {
            from: Box::new(self),
            to: Box::new(to.into()),
        }
    }
}

/// Appends `terms` joined by `op`, wrapped in parentheses.
fn append_compound(out: &mut String, terms: &[Term], op: &str) {
    out.push('(');
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            out.push_str(op);
        }
        term.append_to(out);
    }
    out.push(')');
}

/// Appends a range with the given bracket pair.
fn append_range(out: &mut String, from: &Term, to: &Term, open: char, close: char) {
    out.push(open);
    from.append_to(out);
    out.push_str(" TO ");
    to.append_to(out);
    out.push(close);
}

impl Expression for Term {
    fn append_to(&self, out: &mut String) {
        match self {
            Self::Single(term) => term.append_to(out),
            Self::Phrase(phrase) => phrase.append_to(out),
            Self::Regex { pattern } => {
                out.push_str("\\/");
                escape_into(out, pattern);
                out.push_str("\\/");
            }
            Self::Require(term) => {
                out.push('+');
                term.append_to(out);
            }
            Self::Prohibit(term) => {
                out.push('-');
                term.append_to(out);
            }
            Self::Not(term) => {
                out.push_str("NOT ");
                term.append_to(out);
            }
            Self::Fuzzy { term, max_edits } => {
                term.append_to(out);
                out.push('~');
                out.push_str(&max_edits.to_string());
            }
            Self::Proximity { phrase, distance } => {
                phrase.append_to(out);
                out.push('~');
                out.push_str(&distance.to_string());
            }
            Self::Boost { term, factor } => {
                term.append_to(out);
                out.push('^');
                out.push_str(&factor.to_string());
            }
            Self::And(terms) => append_compound(out, terms, " AND "),
            Self::Or(terms) => append_compound(out, terms, " OR "),
            Self::Inclusive { from, to } => append_range(out, from, to, '[', ']'),
            Self::Exclusive { from, to } => append_range(out, from, to, '{', '}'),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<&str> for Term {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Term {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<SingleTerm> for Term {
    fn from(term: SingleTerm) -> Self {
        Self::Single(term)
    }
}

impl From<Phrase> for Term {
    fn from(phrase: Phrase) -> Self {
        Self::Phrase(phrase)
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Self::Single(SingleTerm::raw(if value { "true" } else { "false" }, false))
    }
}

impl From<NaiveDate> for Term {
    fn from(date: NaiveDate) -> Self {
        // The search server expects dates quoted in YYYY-MM-DD form.
        Self::Phrase(Phrase::raw(&date.format("%Y-%m-%d").to_string(), false))
    }
}

/// Converts signed integers; negatives are quoted so the leading minus is
/// not parsed as a prohibit prefix.
macro_rules! term_from_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Term {
            fn from(value: $ty) -> Self {
                if value < 0 {
                    Self::Phrase(Phrase::raw(&value.to_string(), false))
                } else {
                    Self::Single(SingleTerm::raw(&value.to_string(), false))
                }
            }
        }
    )*};
}

/// Converts unsigned integers to bare single terms.
macro_rules! term_from_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Term {
            fn from(value: $ty) -> Self {
                Self::Single(SingleTerm::raw(&value.to_string(), false))
            }
        }
    )*};
}

/// Converts floats; always quoted, matching how the search server indexes
/// decimal values.
macro_rules! term_from_float {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Term {
            fn from(value: $ty) -> Self {
                Self::Phrase(Phrase::raw(&value.to_string(), false))
            }
        }
    )*};
}

term_from_signed!(i8, i16, i32, i64);
term_from_unsigned!(u8, u16, u32, u64);
term_from_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds an unescaped term from text.
    fn term(text: &str) -> Term {
        Term::new(text)
    }

    #[test]
    fn single_word_classifies_as_single_term() {
        assert_eq!(term(" abc "), Term::Single(SingleTerm::new("abc")));
        assert_eq!(term("abc").build(), "abc");
    }

    #[test]
    fn interior_whitespace_classifies_as_phrase() {
        assert_eq!(term(" a b "), Term::Phrase(Phrase::new("a b")));
        assert_eq!(term("a b").build(), "\"a b\"");
    }

    #[test]
    fn empty_text_yields_empty_single_term() {
        assert_eq!(term("   "), Term::Single(SingleTerm::new("")));
        assert_eq!(term("").build(), "");
    }

    #[test]
    fn default_terms_render_verbatim() {
        assert_eq!(term("ter?m").build(), "ter?m");
        assert_eq!(
            term("5b11f4ce-a62d-471e-81fc-a69a8278c7da").build(),
            "5b11f4ce-a62d-471e-81fc-a69a8278c7da"
        );
    }

    #[test]
    fn escaped_single_term_escapes_reserved() {
        assert_eq!(Term::escaped("ter?m").build(), r"ter\?m");
        assert_eq!(Term::escaped(" &&ter?m*^ ").build(), r"\&&ter\?m\*\^");
    }

    #[test]
    fn escaped_phrase_quotes_and_escapes() {
        assert_eq!(
            Term::escaped(" a+phrase else").build(),
            "\"a\\+phrase else\""
        );
    }

    #[test]
    fn phrase_always_quotes_even_one_word() {
        assert_eq!(Phrase::new("Aqualung").build(), "\"Aqualung\"");
    }

    #[test]
    fn require_prefixes_plus() {
        assert_eq!(term("Alice").require().build(), "+Alice");
    }

    #[test]
    fn prohibit_prefixes_minus() {
        assert_eq!(term("Alice").prohibit().build(), "-Alice");
        assert_eq!(
            term("Jethro Tull").prohibit().build(),
            "-\"Jethro Tull\""
        );
    }

    #[test]
    fn not_prefixes_keyword() {
        assert_eq!(term("Alice").not().build(), "NOT Alice");
    }

    #[test]
    fn fuzzy_defaults_to_two_edits() {
        assert_eq!(SingleTerm::new("Bob").fuzzy().build(), "Bob~2");
    }

    #[test]
    fn fuzzy_accepts_explicit_edit_distances() {
        assert_eq!(SingleTerm::new("Bob").fuzzy_edits(0).build(), "Bob~0");
        assert_eq!(SingleTerm::new("Bob").fuzzy_edits(1).build(), "Bob~1");
        assert_eq!(SingleTerm::new("Bob").fuzzy_edits(2).build(), "Bob~2");
    }

    #[test]
    #[should_panic(expected = "fuzzy edit distance")]
    fn fuzzy_rejects_distance_over_two() {
        let _ = SingleTerm::new("Bob").fuzzy_edits(3);
    }

    #[test]
    fn proximity_renders_tilde_distance() {
        assert_eq!(
            Phrase::new("jakarta apache").proximity(10).build(),
            "\"jakarta apache\"~10"
        );
    }

    #[test]
    fn boost_renders_caret_factor() {
        assert_eq!(term("jakarta").boost(4).build(), "jakarta^4");
        assert_eq!(
            term("jakarta apache").boost(4).build(),
            "\"jakarta apache\"^4"
        );
    }

    #[test]
    fn inclusive_range_uses_brackets() {
        assert_eq!(
            term("Alice").inclusive(term("Bob")).build(),
            "[Alice TO Bob]"
        );
    }

    #[test]
    fn exclusive_range_uses_braces() {
        assert_eq!(
            term("Alice").exclusive(term("Bob")).build(),
            "{Alice TO Bob}"
        );
    }

    #[test]
    fn numeric_inclusive_range() {
        assert_eq!(
            Term::from(1000).inclusive(Term::from(2000)).build(),
            "[1000 TO 2000]"
        );
    }

    #[test]
    fn and_renders_parenthesized() {
        assert_eq!(term("a").and(term("b")).build(), "(a AND b)");
    }

    #[test]
    fn or_renders_parenthesized() {
        assert_eq!(term("a").or(term("b")).build(), "(a OR b)");
    }

    #[test]
    fn and_flattens_on_both_sides() {
        let left_leaning = term("a").and(term("b")).and(term("c"));
        let right_leaning = term("a").and(term("b").and(term("c")));

        assert_eq!(left_leaning, right_leaning);
        assert_eq!(left_leaning.build(), "(a AND b AND c)");
    }

    #[test]
    fn or_flattens_on_both_sides() {
        let left_leaning = term("a").or(term("b")).or(term("c"));
        let right_leaning = term("a").or(term("b").or(term("c")));

        assert_eq!(left_leaning, right_leaning);
        assert_eq!(left_leaning.build(), "(a OR b OR c)");
    }

    #[test]
    fn and_of_or_keeps_inner_group() {
        assert_eq!(
            term("a").or(term("b")).and(term("c")).build(),
            "((a OR b) AND c)"
        );
    }

    #[test]
    fn regex_escapes_pattern_between_delimiters() {
        assert_eq!(Term::regex("a?b").build(), r"\/a\?b\/");
        assert_eq!(Term::regex(r"a\?b").build(), r"\/a\\\?b\/");
    }

    #[test]
    fn negative_integers_quote_to_protect_minus() {
        assert_eq!(Term::from(-100).build(), "\"-100\"");
        assert_eq!(Term::from(-1i64).build(), "\"-1\"");
    }

    #[test]
    fn non_negative_integers_render_bare() {
        assert_eq!(Term::from(100).build(), "100");
        assert_eq!(Term::from(7u32).build(), "7");
    }

    #[test]
    fn floats_always_quote() {
        assert_eq!(Term::from(100.45).build(), "\"100.45\"");
    }

    #[test]
    fn bools_render_keywords() {
        assert_eq!(Term::from(true).build(), "true");
        assert_eq!(Term::from(false).build(), "false");
    }

    #[test]
    fn dates_render_quoted_iso() {
        let date = NaiveDate::from_ymd_opt(1963, 10, 4).unwrap();
        assert_eq!(Term::from(date).build(), "\"1963-10-04\"");
    }

    #[test]
    fn display_matches_build() {
        let combined = term("a").or(term("b c")).boost(2);
        assert_eq!(combined.to_string(), combined.build());
    }
}
