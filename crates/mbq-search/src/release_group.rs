//! Release group search.

use std::fmt;

use mbq_lucene::{Expression, Field, FieldExpr, Query, Term};

use crate::{
    group_type::TypeTerm,
    mbid::{ArtistMbid, ReleaseGroupMbid, ReleaseMbid},
    search::EntityField,
    status::StatusTerm,
};

/// Searchable fields for release group queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseGroupField {
    /// An alias attached to the release group.
    Alias,
    /// The MBID of any of the release group artists.
    ArtistId,
    /// The combined credited artist name, including join phrases.
    Artist,
    /// The name of any of the release group artists.
    ArtistName,
    /// The release group's disambiguation comment.
    Comment,
    /// The credited name of any of the release group artists.
    CreditName,
    /// The field searched when no fields are named.
    Default,
    /// The release date of the earliest release in the group.
    FirstReleaseDate,
    /// The primary type of the release group.
    PrimaryType,
    /// The MBID of any release in the group.
    ReleaseId,
    /// The title of any release in the group.
    Release,
    /// The release group's title, diacritics ignored.
    ReleaseGroup,
    /// The release group's title, diacritics significant.
    ReleaseGroupAccentedName,
    /// The number of releases in the group.
    Releases,
    /// The release group's MBID.
    ReleaseGroupId,
    /// A secondary type of the release group.
    SecondaryType,
    /// The status of any release in the group.
    Status,
    /// A tag attached to the release group.
    Tag,
}

impl EntityField for ReleaseGroupField {
    fn as_str(self) -> &'static str {
        match self {
            Self::Alias => "alias",
            Self::ArtistId => "arid",
            Self::Artist => "artist",
            Self::ArtistName => "artistname",
            Self::Comment => "comment",
            Self::CreditName => "creditname",
            Self::Default => "",
            Self::FirstReleaseDate => "firstreleasedate",
            Self::PrimaryType => "primarytype",
            Self::ReleaseId => "reid",
            Self::Release => "release",
            Self::ReleaseGroup => "releasegroup",
            Self::ReleaseGroupAccentedName => "releasegroupaccent",
            Self::Releases => "releases",
            Self::ReleaseGroupId => "rgid",
            Self::SecondaryType => "secondarytype",
            Self::Status => "status",
            Self::Tag => "tag",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Alias => "an alias attached to the release group",
            Self::ArtistId => "the MBID of any release group artist",
            Self::Artist => "the combined credited artist name",
            Self::ArtistName => "the name of any release group artist",
            Self::Comment => "the release group's disambiguation comment",
            Self::CreditName => "the credited name of any release group artist",
            Self::Default => "the default field, searched without a prefix",
            Self::FirstReleaseDate => "the earliest release date in the group",
            Self::PrimaryType => "the primary type of the release group",
            Self::ReleaseId => "the MBID of any release in the group",
            Self::Release => "the title of any release in the group",
            Self::ReleaseGroup => "the release group's title (diacritics ignored)",
            Self::ReleaseGroupAccentedName => "the release group's title (diacritics significant)",
            Self::Releases => "the number of releases in the group",
            Self::ReleaseGroupId => "the release group's MBID",
            Self::SecondaryType => "a secondary type of the release group",
            Self::Status => "the status of any release in the group",
            Self::Tag => "a tag attached to the release group",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Alias,
            Self::ArtistId,
            Self::Artist,
            Self::ArtistName,
            Self::Comment,
            Self::CreditName,
            Self::Default,
            Self::FirstReleaseDate,
            Self::PrimaryType,
            Self::ReleaseId,
            Self::Release,
            Self::ReleaseGroup,
            Self::ReleaseGroupAccentedName,
            Self::Releases,
            Self::ReleaseGroupId,
            Self::SecondaryType,
            Self::Status,
            Self::Tag,
        ]
    }
}

impl fmt::Display for ReleaseGroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds release group search queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseGroupSearch {
    /// Accumulated clauses.
    query: Query,
}

impl ReleaseGroupSearch {
    /// Creates an empty search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a clause matching `term` against `field`.
    pub fn field(mut self, field: ReleaseGroupField, term: impl Into<Term>) -> Self {
        self.query.add(Field::new(field.as_str(), term));
        self
    }

    /// Appends a clause the release group must match.
    pub fn require(mut self, field: ReleaseGroupField, term: impl Into<Term>) -> Self {
        self.query.add(Field::new(field.as_str(), term).require());
        self
    }

    /// Appends a clause the release group must not match.
    pub fn prohibit(mut self, field: ReleaseGroupField, term: impl Into<Term>) -> Self {
        self.query.add(Field::new(field.as_str(), term).prohibit());
        self
    }

    /// Appends a clause matching release groups with no value for
    /// `field`.
    pub fn missing(mut self, field: ReleaseGroupField) -> Self {
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
    pub fn clause(field: ReleaseGroupField, term: impl Into<Term>) -> Field {
        Field::new(field.as_str(), term)
    }

    /// Matches an alias attached to the release group.
    pub fn alias(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseGroupField::Alias, term)
    }

    /// Matches the MBID of any of the release group artists.
    pub fn artist_id(self, mbid: ArtistMbid) -> Self {
        self.field(ReleaseGroupField::ArtistId, mbid)
    }

    /// Matches the combined credited artist name.
    pub fn artist(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseGroupField::Artist, term)
    }

    /// Matches the name of any of the release group artists.
    pub fn artist_name(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseGroupField::ArtistName, term)
    }

    /// Matches the release group's disambiguation comment.
    pub fn comment(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseGroupField::Comment, term)
    }

    /// Matches the credited name of any of the release group artists.
    pub fn credit_name(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseGroupField::CreditName, term)
    }

    /// Matches against the default field.
    pub fn default_field(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseGroupField::Default, term)
    }

    /// Matches the release date of the earliest release in the group.
    pub fn first_release_date(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseGroupField::FirstReleaseDate, term)
    }

    /// Matches the primary type of the release group.
    pub fn primary_type(self, kind: impl Into<TypeTerm>) -> Self {
        let term: TypeTerm = kind.into();
        self.field(ReleaseGroupField::PrimaryType, term)
    }

    /// Matches the MBID of any release in the group.
    pub fn release_id(self, mbid: ReleaseMbid) -> Self {
        self.field(ReleaseGroupField::ReleaseId, mbid)
    }

    /// Matches the title of any release in the group.
    pub fn release(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseGroupField::Release, term)
    }

    /// Matches the release group's title, ignoring diacritics.
    pub fn release_group(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseGroupField::ReleaseGroup, term)
    }

    /// Matches the release group's title with diacritics significant.
    pub fn release_group_accented_name(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseGroupField::ReleaseGroupAccentedName, term)
    }

    /// Matches the number of releases in the group.
    pub fn release_count(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseGroupField::Releases, term)
    }

    /// Matches the release group's MBID.
    pub fn release_group_id(self, mbid: ReleaseGroupMbid) -> Self {
        self.field(ReleaseGroupField::ReleaseGroupId, mbid)
    }

    /// Matches a secondary type of the release group.
    pub fn secondary_type(self, kind: impl Into<TypeTerm>) -> Self {
        let term: TypeTerm = kind.into();
        self.field(ReleaseGroupField::SecondaryType, term)
    }

    /// Matches the status of any release in the group.
    pub fn status(self, status: impl Into<StatusTerm>) -> Self {
        let term: StatusTerm = status.into();
        self.field(ReleaseGroupField::Status, term)
    }

    /// Matches a tag attached to the release group.
    pub fn tag(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseGroupField::Tag, term)
    }

    /// The accumulated query tree.
    pub fn into_query(self) -> Query {
        self.query
    }
}

impl Expression for ReleaseGroupSearch {
    fn append_to(&self, out: &mut String) {
        self.query.append_to(out);
    }
}

impl fmt::Display for ReleaseGroupSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<ReleaseGroupSearch> for Query {
    fn from(search: ReleaseGroupSearch) -> Self {
        search.into_query()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{group_type::ReleaseGroupType, join::TermJoin, status::ReleaseStatus};

    #[test]
    fn release_group_search_builds_fielded_clauses() {
        let query = ReleaseGroupSearch::new()
            .release_group("Thick as a Brick")
            .artist_name("Jethro Tull")
            .build();
        assert_eq!(query, "releasegroup:\"Thick as a Brick\" artistname:\"Jethro Tull\"");
    }

    #[test]
    fn secondary_type_accepts_combined_terms() {
        let query = ReleaseGroupSearch::new()
            .secondary_type(ReleaseGroupType::Live.or(ReleaseGroupType::Compilation))
            .build();
        assert_eq!(query, "secondarytype:(\"live\" OR \"compilation\")");
    }

    #[test]
    fn status_takes_typed_values() {
        let query = ReleaseGroupSearch::new()
            .status(ReleaseStatus::Bootleg)
            .build();
        assert_eq!(query, "status:bootleg");
    }

    #[test]
    fn release_count_matches_numbers() {
        let query = ReleaseGroupSearch::new().release_count(2_u32).build();
        assert_eq!(query, "releases:2");
    }

    #[test]
    fn default_field_joins_terms() {
        let query = ReleaseGroupSearch::new()
            .default_field("Aqualung".or("Benefit"))
            .build();
        assert_eq!(query, "(Aqualung OR Benefit)");
    }

    #[test]
    fn field_names_match_server_vocabulary() {
        assert_eq!(ReleaseGroupField::ReleaseGroupId.as_str(), "rgid");
        assert_eq!(ReleaseGroupField::ReleaseGroupAccentedName.as_str(), "releasegroupaccent");
        assert_eq!(ReleaseGroupField::all().len(), 18);
    }
}
