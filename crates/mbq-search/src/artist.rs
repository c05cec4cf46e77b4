//! Artist search.

use std::fmt;

use mbq_lucene::{Expression, Field, FieldExpr, Query, Term};

use crate::{mbid::ArtistMbid, search::EntityField};

/// Searchable fields for artist queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtistField {
    /// An alias attached to the artist.
    Alias,
    /// A primary alias attached to the artist.
    PrimaryAlias,
    /// The name of the artist's main associated area.
    Area,
    /// The artist's MBID.
    ArtistId,
    /// The artist's name, diacritics ignored.
    Artist,
    /// The artist's name, diacritics significant.
    ArtistAccent,
    /// The artist's begin date.
    Begin,
    /// The area where the artist began.
    BeginArea,
    /// The artist's disambiguation comment.
    Comment,
    /// The 2-letter code of the artist's main associated country.
    Country,
    /// The field searched when no fields are named.
    Default,
    /// The artist's end date.
    End,
    /// The area where the artist ended.
    EndArea,
    /// Whether the artist has ended.
    Ended,
    /// The artist's gender.
    Gender,
    /// An IPI code associated with the artist.
    Ipi,
    /// An ISNI code associated with the artist.
    Isni,
    /// The artist's sort name.
    SortName,
    /// A tag attached to the artist.
    Tag,
    /// The artist's type, such as person or group.
    Type,
}

impl EntityField for ArtistField {
    fn as_str(self) -> &'static str {
        match self {
            Self::Alias => "alias",
            Self::PrimaryAlias => "primary_alias",
            Self::Area => "area",
            Self::ArtistId => "arid",
            Self::Artist => "artist",
            Self::ArtistAccent => "artistaccent",
            Self::Begin => "begin",
            Self::BeginArea => "beginarea",
            Self::Comment => "comment",
            Self::Country => "country",
            Self::Default => "",
            Self::End => "end",
            Self::EndArea => "endarea",
            Self::Ended => "ended",
            Self::Gender => "gender",
            Self::Ipi => "ipi",
            Self::Isni => "isni",
            Self::SortName => "sortname",
            Self::Tag => "tag",
            Self::Type => "type",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Alias => "an alias attached to the artist",
            Self::PrimaryAlias => "a primary alias attached to the artist",
            Self::Area => "the artist's main associated area",
            Self::ArtistId => "the artist's MBID",
            Self::Artist => "the artist's name (diacritics ignored)",
            Self::ArtistAccent => "the artist's name (diacritics significant)",
            Self::Begin => "the artist's begin date",
            Self::BeginArea => "the artist's begin area",
            Self::Comment => "the artist's disambiguation comment",
            Self::Country => "the artist's main associated country code",
            Self::Default => "the default field, searched without a prefix",
            Self::End => "the artist's end date",
            Self::EndArea => "the artist's end area",
            Self::Ended => "whether the artist has ended",
            Self::Gender => "the artist's gender",
            Self::Ipi => "an IPI code associated with the artist",
            Self::Isni => "an ISNI code associated with the artist",
            Self::SortName => "the artist's sort name",
            Self::Tag => "a tag attached to the artist",
            Self::Type => "the artist's type (person, group, ...)",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Alias,
            Self::PrimaryAlias,
            Self::Area,
            Self::ArtistId,
            Self::Artist,
            Self::ArtistAccent,
            Self::Begin,
            Self::BeginArea,
            Self::Comment,
            Self::Country,
            Self::Default,
            Self::End,
            Self::EndArea,
            Self::Ended,
            Self::Gender,
            Self::Ipi,
            Self::Isni,
            Self::SortName,
            Self::Tag,
            Self::Type,
        ]
    }
}

impl fmt::Display for ArtistField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds artist search queries.
///
/// Each method appends one fielded clause and returns the builder, so
/// calls chain. Clauses join with spaces, which the server treats as
/// an implicit `OR` unless a clause is required or prohibited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistSearch {
    /// Accumulated clauses.
    query: Query,
}

impl ArtistSearch {
    /// Creates an empty search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a clause matching `term` against `field`.
    pub fn field(mut self, field: ArtistField, term: impl Into<Term>) -> Self {
        self.query.add(Field::new(field.as_str(), term));
        self
    }

    /// Appends a clause the artist must match.
    pub fn require(mut self, field: ArtistField, term: impl Into<Term>) -> Self {
        self.query.add(Field::new(field.as_str(), term).require());
        self
    }

    /// Appends a clause the artist must not match.
    pub fn prohibit(mut self, field: ArtistField, term: impl Into<Term>) -> Self {
        self.query.add(Field::new(field.as_str(), term).prohibit());
        self
    }

    /// Appends a clause matching artists with no value for `field`.
    pub fn missing(mut self, field: ArtistField) -> Self {
        self.query.add(Field::empty(field.as_str()));
        self
    }

    /// Appends a prebuilt expression, for explicit `AND`/`OR` grouping
    /// of clauses built with [`Self::clause`].
    pub fn expr(mut self, expr: impl Into<FieldExpr>) -> Self {
        self.query.add(expr);
        self
    }

    /// Builds a standalone clause without appending it.
    pub fn clause(field: ArtistField, term: impl Into<Term>) -> Field {
        Field::new(field.as_str(), term)
    }

    /// Matches an alias attached to the artist.
    pub fn alias(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::Alias, term)
    }

    /// Matches a primary alias attached to the artist.
    pub fn primary_alias(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::PrimaryAlias, term)
    }

    /// Matches the name of the artist's main associated area.
    pub fn area(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::Area, term)
    }

    /// Matches the artist's MBID.
    pub fn artist_id(self, mbid: ArtistMbid) -> Self {
        self.field(ArtistField::ArtistId, mbid)
    }

    /// Matches the artist's name, ignoring diacritics.
    pub fn artist(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::Artist, term)
    }

    /// Matches the artist's name with diacritics significant.
    pub fn artist_accent(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::ArtistAccent, term)
    }

    /// Matches the artist's begin date.
    pub fn begin_date(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::Begin, term)
    }

    /// Matches the artist's begin area.
    pub fn begin_area(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::BeginArea, term)
    }

    /// Matches the artist's disambiguation comment.
    pub fn comment(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::Comment, term)
    }

    /// Matches the artist's main associated country code.
    pub fn country(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::Country, term)
    }

    /// Matches against the default field.
    pub fn default_field(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::Default, term)
    }

    /// Matches the artist's end date.
    pub fn end_date(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::End, term)
    }

    /// Matches the artist's end area.
    pub fn end_area(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::EndArea, term)
    }

    /// Matches whether the artist has ended.
    pub fn ended(self, ended: bool) -> Self {
        self.field(ArtistField::Ended, ended)
    }

    /// Matches the artist's gender.
    pub fn gender(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::Gender, term)
    }

    /// Matches an IPI code associated with the artist.
    pub fn ipi(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::Ipi, term)
    }

    /// Matches an ISNI code associated with the artist.
    pub fn isni(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::Isni, term)
    }

    /// Matches the artist's sort name.
    pub fn sort_name(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::SortName, term)
    }

    /// Matches a tag attached to the artist.
    pub fn tag(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::Tag, term)
    }

    /// Matches the artist's type, such as person or group.
    pub fn artist_type(self, term: impl Into<Term>) -> Self {
        self.field(ArtistField::Type, term)
    }

    /// The accumulated query tree.
    pub fn into_query(self) -> Query {
        self.query
    }
}

impl Expression for ArtistSearch {
    fn append_to(&self, out: &mut String) {
        self.query.append_to(out);
    }
}

impl fmt::Display for ArtistSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<ArtistSearch> for Query {
    fn from(search: ArtistSearch) -> Self {
        search.into_query()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::year::Year;

    #[test]
    fn artist_search_builds_fielded_clauses() {
        let query = ArtistSearch::new()
            .artist("Jethro Tull")
            .artist_type("group")
            .build();
        assert_eq!(query, "artist:\"Jethro Tull\" type:group");
    }

    #[test]
    fn artist_id_takes_typed_mbid() {
        let query = ArtistSearch::new()
            .artist_id(ArtistMbid::various_artists())
            .build();
        assert_eq!(query, "arid:89ad4ac3-39f7-470e-963a-56509c546377");
    }

    #[test]
    fn ended_renders_boolean() {
        assert_eq!(ArtistSearch::new().ended(true).build(), "ended:true");
    }

    #[test]
    fn begin_date_takes_year() {
        let query = ArtistSearch::new().begin_date(Year::new(1947)).build();
        assert_eq!(query, "begin:1947");
    }

    #[test]
    fn require_and_prohibit_mark_clauses() {
        let query = ArtistSearch::new()
            .require(ArtistField::Artist, "Tull")
            .prohibit(ArtistField::Tag, "rock")
            .build();
        assert_eq!(query, "+artist:Tull -tag:rock");
    }

    #[test]
    fn missing_field_renders_prohibited_wildcard() {
        let query = ArtistSearch::new().missing(ArtistField::EndArea).build();
        assert_eq!(query, "-endarea:*");
    }

    #[test]
    fn expr_groups_clauses_explicitly() {
        let group = ArtistSearch::clause(ArtistField::Artist, "Mozart")
            .or(ArtistSearch::clause(ArtistField::Alias, "Mozart"));
        let query = ArtistSearch::new().expr(group).build();
        assert_eq!(query, "(artist:Mozart OR alias:Mozart)");
    }

    #[test]
    fn default_field_has_no_prefix() {
        assert_eq!(ArtistSearch::new().default_field("Tull").build(), "Tull");
    }

    #[test]
    fn field_names_match_server_vocabulary() {
        assert_eq!(ArtistField::ArtistId.as_str(), "arid");
        assert_eq!(ArtistField::Type.as_str(), "type");
        assert_eq!(ArtistField::Default.as_str(), "");
        assert_eq!(ArtistField::all().len(), 20);
    }
}
