//! Release search.

use std::fmt;

use mbq_lucene::{Expression, Field, FieldExpr, Query, Term};

use crate::{
    group_type::TypeTerm,
    mbid::{ArtistMbid, LabelMbid, ReleaseGroupMbid, ReleaseMbid},
    search::EntityField,
    status::StatusTerm,
};

/// Searchable fields for release queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseField {
    /// An alias attached to the release.
    Alias,
    /// The MBID of any of the release artists.
    ArtistId,
    /// The complete artist name as it appears on the release.
    Artist,
    /// The name of any artist on the release.
    ArtistName,
    /// The Amazon ASIN for the release.
    Asin,
    /// The barcode of the release.
    Barcode,
    /// A catalog number for the release.
    CatalogNumber,
    /// The release's disambiguation comment.
    Comment,
    /// The two-letter code of the release country.
    Country,
    /// A name credit on the release.
    CreditName,
    /// The release date.
    Date,
    /// The field searched when no fields are named.
    Default,
    /// The total number of disc IDs over all mediums.
    DiscIdCount,
    /// The number of disc IDs on any one medium.
    MediumDiscCount,
    /// The format of any medium in the release.
    Format,
    /// The MBID of a label the release appeared on.
    LabelId,
    /// The name of a label the release appeared on.
    Label,
    /// The three-letter language code of the release.
    Language,
    /// The number of mediums in the release.
    MediumCount,
    /// The number of tracks on any one medium.
    MediumTrackCount,
    /// The packaging of the release.
    Packaging,
    /// The primary type of the release group.
    PrimaryType,
    /// The data quality of the release.
    Quality,
    /// The release's MBID.
    ReleaseId,
    /// The release's title, diacritics ignored.
    Release,
    /// The release's title, diacritics significant.
    ReleaseAccentedName,
    /// The MBID of the release group.
    ReleaseGroupId,
    /// The four-letter script code of the release.
    Script,
    /// A secondary type of the release group.
    SecondaryType,
    /// The status of the release.
    Status,
    /// A tag attached to the release.
    Tag,
    /// The total number of tracks over all mediums.
    TrackCount,
}

impl EntityField for ReleaseField {
    fn as_str(self) -> &'static str {
        match self {
            Self::Alias => "alias",
            Self::ArtistId => "arid",
            Self::Artist => "artist",
            Self::ArtistName => "artistname",
            Self::Asin => "asin",
            Self::Barcode => "barcode",
            Self::CatalogNumber => "catno",
            Self::Comment => "comment",
            Self::Country => "country",
            Self::CreditName => "creditname",
            Self::Date => "date",
            Self::Default => "",
            Self::DiscIdCount => "discids",
            Self::MediumDiscCount => "discidsmedium",
            Self::Format => "format",
            Self::LabelId => "laid",
            Self::Label => "label",
            Self::Language => "lang",
            Self::MediumCount => "mediums",
            Self::MediumTrackCount => "tracksmedium",
            Self::Packaging => "packaging",
            Self::PrimaryType => "primarytype",
            Self::Quality => "quality",
            Self::ReleaseId => "reid",
            Self::Release => "release",
            Self::ReleaseAccentedName => "releaseaccent",
            Self::ReleaseGroupId => "rgid",
            Self::Script => "script",
            Self::SecondaryType => "secondarytype",
            Self::Status => "status",
            Self::Tag => "tag",
            Self::TrackCount => "tracks",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Alias => "an alias attached to the release",
            Self::ArtistId => "the MBID of any release artist",
            Self::Artist => "the complete artist name on the release",
            Self::ArtistName => "the name of any artist on the release",
            Self::Asin => "the Amazon ASIN for the release",
            Self::Barcode => "the barcode of the release",
            Self::CatalogNumber => "a catalog number for the release",
            Self::Comment => "the release's disambiguation comment",
            Self::Country => "the release country code",
            Self::CreditName => "a name credit on the release",
            Self::Date => "the release date",
            Self::Default => "the default field, searched without a prefix",
            Self::DiscIdCount => "the total number of disc IDs",
            Self::MediumDiscCount => "the number of disc IDs on any medium",
            Self::Format => "the format of any medium",
            Self::LabelId => "the MBID of a label on the release",
            Self::Label => "the name of a label on the release",
            Self::Language => "the language code of the release",
            Self::MediumCount => "the number of mediums",
            Self::MediumTrackCount => "the number of tracks on any medium",
            Self::Packaging => "the packaging of the release",
            Self::PrimaryType => "the primary type of the release group",
            Self::Quality => "the data quality of the release",
            Self::ReleaseId => "the release's MBID",
            Self::Release => "the release's title (diacritics ignored)",
            Self::ReleaseAccentedName => "the release's title (diacritics significant)",
            Self::ReleaseGroupId => "the MBID of the release group",
            Self::Script => "the script code of the release",
            Self::SecondaryType => "a secondary type of the release group",
            Self::Status => "the status of the release",
            Self::Tag => "a tag attached to the release",
            Self::TrackCount => "the total number of tracks",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Alias,
            Self::ArtistId,
            Self::Artist,
            Self::ArtistName,
            Self::Asin,
            Self::Barcode,
            Self::CatalogNumber,
            Self::Comment,
            Self::Country,
            Self::CreditName,
            Self::Date,
            Self::Default,
            Self::DiscIdCount,
            Self::MediumDiscCount,
            Self::Format,
            Self::LabelId,
            Self::Label,
            Self::Language,
            Self::MediumCount,
            Self::MediumTrackCount,
            Self::Packaging,
            Self::PrimaryType,
            Self::Quality,
            Self::ReleaseId,
            Self::Release,
            Self::ReleaseAccentedName,
            Self::ReleaseGroupId,
            Self::Script,
            Self::SecondaryType,
            Self::Status,
            Self::Tag,
            Self::TrackCount,
        ]
    }
}

impl fmt::Display for ReleaseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds release search queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseSearch {
    /// Accumulated clauses.
    query: Query,
}

impl ReleaseSearch {
    /// Creates an empty search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a clause matching `term` against `field`.
    pub fn field(mut self, field: ReleaseField, term: impl Into<Term>) -> Self {
        self.query.add(Field::new(field.as_str(), term));
        self
    }

    /// Appends a clause the release must match.
    pub fn require(mut self, field: ReleaseField, term: impl Into<Term>) -> Self {
        self.query.add(Field::new(field.as_str(), term).require());
        self
    }

    /// Appends a clause the release must not match.
    pub fn prohibit(mut self, field: ReleaseField, term: impl Into<Term>) -> Self {
        self.query.add(Field::new(field.as_str(), term).prohibit());
        self
    }

    /// Appends a clause matching releases with no value for `field`.
    pub fn missing(mut self, field: ReleaseField) -> Self {
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
    pub fn clause(field: ReleaseField, term: impl Into<Term>) -> Field {
        Field::new(field.as_str(), term)
    }

    /// Matches an alias attached to the release.
    pub fn alias(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Alias, term)
    }

    /// Matches the MBID of any of the release artists.
    pub fn artist_id(self, mbid: ArtistMbid) -> Self {
        self.field(ReleaseField::ArtistId, mbid)
    }

    /// Matches the complete artist name as it appears on the release.
    pub fn artist(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Artist, term)
    }

    /// Matches the name of any artist on the release.
    pub fn artist_name(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::ArtistName, term)
    }

    /// Matches the Amazon ASIN for the release.
    pub fn asin(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Asin, term)
    }

    /// Matches the barcode of the release.
    pub fn barcode(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Barcode, term)
    }

    /// Matches a catalog number for the release.
    pub fn catalog_number(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::CatalogNumber, term)
    }

    /// Matches the release's disambiguation comment.
    pub fn comment(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Comment, term)
    }

    /// Matches the release country code.
    pub fn country(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Country, term)
    }

    /// Matches a name credit on the release.
    pub fn credit_name(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::CreditName, term)
    }

    /// Matches the release date.
    pub fn date(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Date, term)
    }

    /// Matches against the default field.
    pub fn default_field(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Default, term)
    }

    /// Matches the total number of disc IDs over all mediums.
    pub fn disc_id_count(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::DiscIdCount, term)
    }

    /// Matches the number of disc IDs on any one medium.
    pub fn medium_disc_count(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::MediumDiscCount, term)
    }

    /// Matches the format of any medium in the release.
    pub fn format(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Format, term)
    }

    /// Matches the MBID of a label the release appeared on.
    pub fn label_id(self, mbid: LabelMbid) -> Self {
        self.field(ReleaseField::LabelId, mbid)
    }

    /// Matches the name of a label the release appeared on.
    pub fn label(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Label, term)
    }

    /// Matches the three-letter language code of the release.
    pub fn language(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Language, term)
    }

    /// Matches the number of mediums in the release.
    pub fn medium_count(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::MediumCount, term)
    }

    /// Matches the number of tracks on any one medium.
    pub fn medium_track_count(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::MediumTrackCount, term)
    }

    /// Matches the packaging of the release.
    pub fn packaging(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Packaging, term)
    }

    /// Matches the primary type of the release group.
    pub fn primary_type(self, kind: impl Into<TypeTerm>) -> Self {
        let term: TypeTerm = kind.into();
        self.field(ReleaseField::PrimaryType, term)
    }

    /// Matches the data quality of the release.
    pub fn quality(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Quality, term)
    }

    /// Matches the release's MBID.
    pub fn release_id(self, mbid: ReleaseMbid) -> Self {
        self.field(ReleaseField::ReleaseId, mbid)
    }

    /// Matches the release's title, ignoring diacritics.
    pub fn release(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Release, term)
    }

    /// Matches the release's title with diacritics significant.
    pub fn release_accented_name(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::ReleaseAccentedName, term)
    }

    /// Matches the MBID of the release group.
    pub fn release_group_id(self, mbid: ReleaseGroupMbid) -> Self {
        self.field(ReleaseField::ReleaseGroupId, mbid)
    }

    /// Matches the four-letter script code of the release.
    pub fn script(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Script, term)
    }

    /// Matches a secondary type of the release group.
    pub fn secondary_type(self, kind: impl Into<TypeTerm>) -> Self {
        let term: TypeTerm = kind.into();
        self.field(ReleaseField::SecondaryType, term)
    }

    /// Matches the status of the release.
    pub fn status(self, status: impl Into<StatusTerm>) -> Self {
        let term: StatusTerm = status.into();
        self.field(ReleaseField::Status, term)
    }

    /// Matches a tag attached to the release.
    pub fn tag(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::Tag, term)
    }

    /// Matches the total number of tracks over all mediums.
    pub fn track_count(self, term: impl Into<Term>) -> Self {
        self.field(ReleaseField::TrackCount, term)
    }

    /// The accumulated query tree.
    pub fn into_query(self) -> Query {
        self.query
    }
}

impl Expression for ReleaseSearch {
    fn append_to(&self, out: &mut String) {
        self.query.append_to(out);
    }
}

impl fmt::Display for ReleaseSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<ReleaseSearch> for Query {
    fn from(search: ReleaseSearch) -> Self {
        search.into_query()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    use crate::{group_type::ReleaseGroupType, join::TermRange, status::ReleaseStatus};

    #[test]
    fn release_search_builds_fielded_clauses() {
        let query = ReleaseSearch::new()
            .release("Aqualung")
            .format("Vinyl")
            .build();
        assert_eq!(query, "release:Aqualung format:Vinyl");
    }

    #[test]
    fn date_takes_calendar_dates() {
        let date = NaiveDate::from_ymd_opt(1973, 3, 28).unwrap();
        let query = ReleaseSearch::new().date(date).build();
        assert_eq!(query, "date:\"1973-03-28\"");
    }

    #[test]
    fn date_accepts_ranges() {
        let from = NaiveDate::from_ymd_opt(1973, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(1973, 12, 31).unwrap();
        let query = ReleaseSearch::new().date(from.inclusive(to)).build();
        assert_eq!(query, "date:[\"1973-01-01\" TO \"1973-12-31\"]");
    }

    #[test]
    fn track_count_accepts_ranges() {
        let query = ReleaseSearch::new()
            .track_count(8_u32.inclusive(10))
            .build();
        assert_eq!(query, "tracks:[8 TO 10]");
    }

    #[test]
    fn barcode_matches_bare_numbers() {
        let query = ReleaseSearch::new().barcode("5014025602509").build();
        assert_eq!(query, "barcode:5014025602509");
    }

    #[test]
    fn status_and_type_take_typed_values() {
        let query = ReleaseSearch::new()
            .status(ReleaseStatus::Official)
            .primary_type(ReleaseGroupType::Album.or(ReleaseGroupType::Ep))
            .build();
        assert_eq!(query, "status:official primarytype:(\"album\" OR \"ep\")");
    }

    #[test]
    fn label_fields_distinguish_name_and_id() {
        let laid = LabelMbid::parse("46f0f4cd-8aab-4b33-b698-f459faf64190").unwrap();
        let query = ReleaseSearch::new()
            .label("Harvest")
            .label_id(laid)
            .build();
        assert_eq!(query, "label:Harvest laid:46f0f4cd-8aab-4b33-b698-f459faf64190");
    }

    #[test]
    fn field_names_match_server_vocabulary() {
        assert_eq!(ReleaseField::CatalogNumber.as_str(), "catno");
        assert_eq!(ReleaseField::LabelId.as_str(), "laid");
        assert_eq!(ReleaseField::Language.as_str(), "lang");
        assert_eq!(ReleaseField::MediumTrackCount.as_str(), "tracksmedium");
        assert_eq!(ReleaseField::all().len(), 32);
    }
}
