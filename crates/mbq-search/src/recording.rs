//! Recording search.

use std::fmt;

use mbq_lucene::{Expression, Field, FieldExpr, Query, Term};

use crate::{
    group_type::TypeTerm,
    mbid::{ArtistMbid, RecordingMbid, ReleaseGroupMbid, ReleaseMbid, TrackMbid},
    search::EntityField,
    status::StatusTerm,
};

/// Searchable fields for recording queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordingField {
    /// An alias attached to the recording.
    Alias,
    /// The MBID of any of the recording artists.
    ArtistId,
    /// The combined credited artist name, including join phrases.
    Artist,
    /// The name of any of the recording artists.
    ArtistName,
    /// The recording's disambiguation comment.
    Comment,
    /// A country any release of this recording was released in.
    Country,
    /// The credited name of any of the recording artists.
    CreditName,
    /// The release date of any release including this recording.
    Date,
    /// The field searched when no fields are named.
    Default,
    /// Duration of the track in milliseconds.
    Duration,
    /// The release date of the earliest release including this recording.
    FirstReleaseDate,
    /// The format of any medium including this recording.
    Format,
    /// An ISRC associated with the recording.
    Isrc,
    /// The free-text track number on any medium, such as "A4".
    Number,
    /// The position inside its release of any medium including this
    /// recording, starting at 1.
    Position,
    /// The primary type of any release group including this recording.
    PrimaryType,
    /// The duration quantized into two-second buckets.
    QuantizedDuration,
    /// The recording's title, diacritics ignored.
    Recording,
    /// The recording's title, diacritics significant.
    RecordingAccent,
    /// The name of any release including this recording.
    Release,
    /// The MBID of any release including this recording.
    ReleaseId,
    /// The MBID of any release group including this recording.
    ReleaseGroupId,
    /// The recording's MBID.
    RecordingId,
    /// A secondary type of any release group including this recording.
    SecondaryType,
    /// The status of any release including this recording.
    Status,
    /// A tag attached to the recording.
    Tag,
    /// The MBID of a track connected to this recording.
    TrackId,
    /// The position of the track on any medium, starting at 1 with
    /// pre-gaps at 0.
    TrackNumber,
    /// The number of tracks on any medium including this recording.
    TrackCount,
    /// The number of tracks on any release including this recording.
    ReleaseTrackCount,
    /// Whether the recording is a video recording.
    Video,
}

impl EntityField for RecordingField {
    fn as_str(self) -> &'static str {
        match self {
            Self::Alias => "alias",
            Self::ArtistId => "arid",
            Self::Artist => "artist",
            Self::ArtistName => "artistname",
            Self::Comment => "comment",
            Self::Country => "country",
            Self::CreditName => "creditname",
            Self::Date => "date",
            Self::Default => "",
            Self::Duration => "dur",
            Self::FirstReleaseDate => "firstreleasedate",
            Self::Format => "format",
            Self::Isrc => "isrc",
            Self::Number => "number",
            Self::Position => "position",
            Self::PrimaryType => "primarytype",
            Self::QuantizedDuration => "qdur",
            Self::Recording => "recording",
            Self::RecordingAccent => "recordingaccent",
            Self::Release => "release",
            Self::ReleaseId => "reid",
            Self::ReleaseGroupId => "rgid",
            Self::RecordingId => "rid",
            Self::SecondaryType => "secondarytype",
            Self::Status => "status",
            Self::Tag => "tag",
            Self::TrackId => "tid",
            Self::TrackNumber => "tnum",
            Self::TrackCount => "tracks",
            Self::ReleaseTrackCount => "tracksrelease",
            Self::Video => "video",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Alias => "an alias attached to the recording",
            Self::ArtistId => "the MBID of any of the recording artists",
            Self::Artist => "the combined credited artist name",
            Self::ArtistName => "the name of any of the recording artists",
            Self::Comment => "the recording's disambiguation comment",
            Self::Country => "a country any release was released in",
            Self::CreditName => "the credited name of any recording artist",
            Self::Date => "the release date of any release",
            Self::Default => "the default field, searched without a prefix",
            Self::Duration => "track duration in milliseconds",
            Self::FirstReleaseDate => "the earliest release date",
            Self::Format => "the format of any medium",
            Self::Isrc => "an ISRC associated with the recording",
            Self::Number => "the free-text track number, such as A4",
            Self::Position => "the medium position inside its release",
            Self::PrimaryType => "the primary type of any release group",
            Self::QuantizedDuration => "duration in two-second buckets",
            Self::Recording => "the recording's title (diacritics ignored)",
            Self::RecordingAccent => "the recording's title (diacritics significant)",
            Self::Release => "the name of any release",
            Self::ReleaseId => "the MBID of any release",
            Self::ReleaseGroupId => "the MBID of any release group",
            Self::RecordingId => "the recording's MBID",
            Self::SecondaryType => "a secondary type of any release group",
            Self::Status => "the status of any release",
            Self::Tag => "a tag attached to the recording",
            Self::TrackId => "the MBID of a connected track",
            Self::TrackNumber => "the track position on its medium",
            Self::TrackCount => "the number of tracks on any medium",
            Self::ReleaseTrackCount => "the number of tracks on any release",
            Self::Video => "whether the recording is a video",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Alias,
            Self::ArtistId,
            Self::Artist,
            Self::ArtistName,
            Self::Comment,
            Self::Country,
            Self::CreditName,
            Self::Date,
            Self::Default,
            Self::Duration,
            Self::FirstReleaseDate,
            Self::Format,
            Self::Isrc,
            Self::Number,
            Self::Position,
            Self::PrimaryType,
            Self::QuantizedDuration,
            Self::Recording,
            Self::RecordingAccent,
            Self::Release,
            Self::ReleaseId,
            Self::ReleaseGroupId,
            Self::RecordingId,
            Self::SecondaryType,
            Self::Status,
            Self::Tag,
            Self::TrackId,
            Self::TrackNumber,
            Self::TrackCount,
            Self::ReleaseTrackCount,
            Self::Video,
        ]
    }
}

impl fmt::Display for RecordingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds recording search queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSearch {
    /// Accumulated clauses.
    query: Query,
}

impl RecordingSearch {
    /// Creates an empty search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a clause matching `term` against `field`.
    pub fn field(mut self, field: RecordingField, term: impl Into<Term>) -> Self {
        self.query.add(Field::new(field.as_str(), term));
        self
    }

    /// Appends a clause the recording must match.
    pub fn require(mut self, field: RecordingField, term: impl Into<Term>) -> Self {
        self.query.add(Field::new(field.as_str(), term).require());
        self
    }

    /// Appends a clause the recording must not match.
    pub fn prohibit(mut self, field: RecordingField, term: impl Into<Term>) -> Self {
        self.query.add(Field::new(field.as_str(), term).prohibit());
        self
    }

    /// Appends a clause matching recordings with no value for `field`.
    pub fn missing(mut self, field: RecordingField) -> Self {
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
    pub fn clause(field: RecordingField, term: impl Into<Term>) -> Field {
        Field::new(field.as_str(), term)
    }

    /// Matches an alias attached to the recording.
    pub fn alias(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::Alias, term)
    }

    /// Matches the MBID of any of the recording artists.
    pub fn artist_id(self, mbid: ArtistMbid) -> Self {
        self.field(RecordingField::ArtistId, mbid)
    }

    /// Matches the combined credited artist name.
    pub fn artist(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::Artist, term)
    }

    /// Matches the name of any of the recording artists.
    pub fn artist_name(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::ArtistName, term)
    }

    /// Matches the recording's disambiguation comment.
    pub fn comment(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::Comment, term)
    }

    /// Matches a country any release of this recording was released in.
    pub fn country(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::Country, term)
    }

    /// Matches the credited name of any of the recording artists.
    pub fn credit_name(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::CreditName, term)
    }

    /// Matches the release date of any release including this recording.
    pub fn date(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::Date, term)
    }

    /// Matches against the default field.
    pub fn default_field(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::Default, term)
    }

    /// Matches the track duration in milliseconds.
    pub fn duration(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::Duration, term)
    }

    /// Matches the release date of the earliest release including this
    /// recording.
    pub fn first_release_date(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::FirstReleaseDate, term)
    }

    /// Matches the format of any medium including this recording.
    pub fn format(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::Format, term)
    }

    /// Matches an ISRC associated with the recording.
    pub fn isrc(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::Isrc, term)
    }

    /// Matches the free-text track number, such as "A4".
    pub fn number(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::Number, term)
    }

    /// Matches the position of any medium inside its release.
    pub fn position(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::Position, term)
    }

    /// Matches the primary type of any release group including this
    /// recording.
    pub fn primary_type(self, kind: impl Into<TypeTerm>) -> Self {
        let term: TypeTerm = kind.into();
        self.field(RecordingField::PrimaryType, term)
    }

    /// Matches the duration quantized into two-second buckets.
    pub fn quantized_duration(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::QuantizedDuration, term)
    }

    /// Matches the recording's title, ignoring diacritics.
    pub fn recording(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::Recording, term)
    }

    /// Matches the recording's title with diacritics significant.
    pub fn recording_accent(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::RecordingAccent, term)
    }

    /// Matches the name of any release including this recording.
    pub fn release(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::Release, term)
    }

    /// Matches the MBID of any release including this recording.
    pub fn release_id(self, mbid: ReleaseMbid) -> Self {
        self.field(RecordingField::ReleaseId, mbid)
    }

    /// Matches the MBID of any release group including this recording.
    pub fn release_group_id(self, mbid: ReleaseGroupMbid) -> Self {
        self.field(RecordingField::ReleaseGroupId, mbid)
    }

    /// Matches the recording's MBID.
    pub fn recording_id(self, mbid: RecordingMbid) -> Self {
        self.field(RecordingField::RecordingId, mbid)
    }

    /// Matches a secondary type of any release group including this
    /// recording.
    pub fn secondary_type(self, kind: impl Into<TypeTerm>) -> Self {
        let term: TypeTerm = kind.into();
        self.field(RecordingField::SecondaryType, term)
    }

    /// Matches the status of any release including this recording.
    pub fn status(self, status: impl Into<StatusTerm>) -> Self {
        let term: StatusTerm = status.into();
        self.field(RecordingField::Status, term)
    }

    /// Matches a tag attached to the recording.
    pub fn tag(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::Tag, term)
    }

    /// Matches the MBID of a track connected to this recording.
    pub fn track_id(self, mbid: TrackMbid) -> Self {
        self.field(RecordingField::TrackId, mbid)
    }

    /// Matches the track position on its medium.
    pub fn track_number(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::TrackNumber, term)
    }

    /// Matches the number of tracks on any medium including this
    /// recording.
    pub fn track_count(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::TrackCount, term)
    }

    /// Matches the number of tracks on any release including this
    /// recording.
    pub fn release_track_count(self, term: impl Into<Term>) -> Self {
        self.field(RecordingField::ReleaseTrackCount, term)
    }

    /// Matches whether the recording is a video recording.
    pub fn video(self, video: bool) -> Self {
        self.field(RecordingField::Video, video)
    }

    /// The accumulated query tree.
    pub fn into_query(self) -> Query {
        self.query
    }
}

impl Expression for RecordingSearch {
    fn append_to(&self, out: &mut String) {
        self.query.append_to(out);
    }
}

impl fmt::Display for RecordingSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<RecordingSearch> for Query {
    fn from(search: RecordingSearch) -> Self {
        search.into_query()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{group_type::ReleaseGroupType, join::TermRange, status::ReleaseStatus};

    #[test]
    fn recording_search_builds_fielded_clauses() {
        let query = RecordingSearch::new()
            .artist("Hendrix")
            .recording("Hey Joe")
            .build();
        assert_eq!(query, "artist:Hendrix recording:\"Hey Joe\"");
    }

    #[test]
    fn duration_accepts_ranges() {
        let query = RecordingSearch::new()
            .duration(60_000_u32.inclusive(120_000))
            .build();
        assert_eq!(query, "dur:[60000 TO 120000]");
    }

    #[test]
    fn primary_type_takes_typed_values() {
        let query = RecordingSearch::new()
            .primary_type(ReleaseGroupType::Single)
            .build();
        assert_eq!(query, "primarytype:\"single\"");
    }

    #[test]
    fn status_accepts_combined_terms() {
        let query = RecordingSearch::new()
            .status(ReleaseStatus::Official.or(ReleaseStatus::Promotion))
            .build();
        assert_eq!(query, "status:(official OR promotion)");
    }

    #[test]
    fn video_renders_boolean() {
        assert_eq!(RecordingSearch::new().video(false).build(), "video:false");
    }

    #[test]
    fn isrc_matches_bare_codes() {
        let query = RecordingSearch::new().isrc("GBAYE6800011").build();
        assert_eq!(query, "isrc:GBAYE6800011");
    }

    #[test]
    fn id_fields_take_typed_mbids() {
        let rid = RecordingMbid::parse("b1a9c0e9-d987-4042-ae91-78d6a3267d69").unwrap();
        let query = RecordingSearch::new().recording_id(rid).build();
        assert_eq!(query, "rid:b1a9c0e9-d987-4042-ae91-78d6a3267d69");
    }

    #[test]
    fn field_names_match_server_vocabulary() {
        assert_eq!(RecordingField::QuantizedDuration.as_str(), "qdur");
        assert_eq!(RecordingField::TrackNumber.as_str(), "tnum");
        assert_eq!(RecordingField::ReleaseTrackCount.as_str(), "tracksrelease");
        assert_eq!(RecordingField::all().len(), 31);
    }
}
