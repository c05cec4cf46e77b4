//! Clap argument definitions for the `mbq` CLI.

use std::str;

use clap::{Args, Parser, Subcommand};
use mbq_search::{
    ArtistMbid, LabelMbid, MbidError, RecordingMbid, ReleaseGroupMbid, ReleaseGroupType,
    ReleaseMbid, ReleaseStatus, TrackMbid,
};

/// Parses an artist MBID from a string.
fn parse_artist_mbid(s: &str) -> Result<ArtistMbid, MbidError> {
    s.parse()
}

/// Parses a recording MBID from a string.
fn parse_recording_mbid(s: &str) -> Result<RecordingMbid, MbidError> {
    s.parse()
}

/// Parses a release MBID from a string.
fn parse_release_mbid(s: &str) -> Result<ReleaseMbid, MbidError> {
    s.parse()
}

/// Parses a release group MBID from a string.
fn parse_release_group_mbid(s: &str) -> Result<ReleaseGroupMbid, MbidError> {
    s.parse()
}

/// Parses a label MBID from a string.
fn parse_label_mbid(s: &str) -> Result<LabelMbid, MbidError> {
    s.parse()
}

/// Parses a track MBID from a string.
fn parse_track_mbid(s: &str) -> Result<TrackMbid, MbidError> {
    s.parse()
}

/// Parses a release status from a string.
fn parse_status(s: &str) -> Result<ReleaseStatus, String> {
    s.parse()
}

/// Parses a release group type from a string.
fn parse_group_type(s: &str) -> Result<ReleaseGroupType, String> {
    s.parse()
}

/// Parses an entity kind from a string.
fn parse_entity(s: &str) -> Result<EntityKind, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "mbq")]
#[command(about = "Build Lucene queries for the MusicBrainz search API")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared clause flags available on every entity command.
#[derive(Args, Debug, Clone, Default)]
pub struct ClauseArgs {
    /// Add a fielded clause, written as field=value (can be repeated)
    #[arg(short = 'f', long = "field", value_name = "FIELD=VALUE")]
    pub fields: Vec<String>,

    /// Add a clause the entity must match (+field:value)
    #[arg(long, value_name = "FIELD=VALUE")]
    pub require: Vec<String>,

    /// Add a clause the entity must not match (-field:value)
    #[arg(long = "not", value_name = "FIELD=VALUE")]
    pub prohibit: Vec<String>,

    /// Match entities with no value for a field (can be repeated)
    #[arg(long, value_name = "FIELD")]
    pub missing: Vec<String>,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `mbq artist`.
#[derive(Args, Debug, Clone)]
pub struct ArtistCommand {
    /// Terms matched against the default field
    pub terms: Vec<String>,

    /// Match the artist's name (diacritics ignored)
    #[arg(long)]
    pub artist: Option<String>,

    /// Match the artist's name within two edits (single word)
    #[arg(long, value_name = "WORD")]
    pub fuzzy: Option<String>,

    /// Match the artist's MBID
    #[arg(long, value_parser = parse_artist_mbid)]
    pub arid: Option<ArtistMbid>,

    /// Match an alias attached to the artist
    #[arg(long)]
    pub alias: Option<String>,

    /// Match a tag attached to the artist
    #[arg(long)]
    pub tag: Option<String>,

    /// Match the artist's main associated country code
    #[arg(long)]
    pub country: Option<String>,

    /// Match the artist's type (person, group, ...)
    #[arg(long = "type")]
    pub artist_type: Option<String>,

    /// Match the artist's begin date
    #[arg(long)]
    pub begin: Option<String>,

    /// Match the artist's end date
    #[arg(long)]
    pub end: Option<String>,

    /// Match whether the artist has ended
    #[arg(long)]
    pub ended: Option<bool>,

    #[command(flatten)]
    /// Hand-written clause flags.
    pub clauses: ClauseArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `mbq recording`.
#[derive(Args, Debug, Clone)]
pub struct RecordingCommand {
    /// Terms matched against the default field
    pub terms: Vec<String>,

    /// Match the recording's title (diacritics ignored)
    #[arg(long)]
    pub recording: Option<String>,

    /// Match the name of an artist credited on the recording
    #[arg(long)]
    pub artist: Option<String>,

    /// Match the MBID of an artist credited on the recording
    #[arg(long, value_parser = parse_artist_mbid)]
    pub arid: Option<ArtistMbid>,

    /// Match the recording's MBID
    #[arg(long, value_parser = parse_recording_mbid)]
    pub rid: Option<RecordingMbid>,

    /// Match the MBID of a track linked to the recording
    #[arg(long, value_parser = parse_track_mbid)]
    pub tid: Option<TrackMbid>,

    /// Match the title of a release carrying the recording
    #[arg(long)]
    pub release: Option<String>,

    /// Match an ISRC associated with the recording
    #[arg(long)]
    pub isrc: Option<String>,

    /// Match the recording's duration in milliseconds
    #[arg(long)]
    pub dur: Option<u32>,

    /// Match a release date of the recording (YYYY, YYYY-MM, or YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Match a release country of the recording
    #[arg(long)]
    pub country: Option<String>,

    /// Match a tag attached to the recording
    #[arg(long)]
    pub tag: Option<String>,

    /// Match a release status (repeat to match any of several)
    #[arg(long, value_parser = parse_status)]
    pub status: Vec<ReleaseStatus>,

    /// Match a primary release group type (repeat to match any of several)
    #[arg(long, value_parser = parse_group_type)]
    pub primary_type: Vec<ReleaseGroupType>,

    /// Match a secondary release group type (repeat to match any of several)
    #[arg(long, value_parser = parse_group_type)]
    pub secondary_type: Vec<ReleaseGroupType>,

    /// Match whether the recording is a video
    #[arg(long)]
    pub video: Option<bool>,

    #[command(flatten)]
    /// Hand-written clause flags.
    pub clauses: ClauseArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `mbq release`.
#[derive(Args, Debug, Clone)]
pub struct ReleaseCommand {
    /// Terms matched against the default field
    pub terms: Vec<String>,

    /// Match the release's title (diacritics ignored)
    #[arg(long)]
    pub release: Option<String>,

    /// Match the name of an artist credited on the release
    #[arg(long)]
    pub artist: Option<String>,

    /// Match the MBID of an artist credited on the release
    #[arg(long, value_parser = parse_artist_mbid)]
    pub arid: Option<ArtistMbid>,

    /// Match the release's MBID
    #[arg(long, value_parser = parse_release_mbid)]
    pub reid: Option<ReleaseMbid>,

    /// Match the MBID of the release's release group
    #[arg(long, value_parser = parse_release_group_mbid)]
    pub rgid: Option<ReleaseGroupMbid>,

    /// Match the MBID of a label the release was issued on
    #[arg(long, value_parser = parse_label_mbid)]
    pub laid: Option<LabelMbid>,

    /// Match the name of a label the release was issued on
    #[arg(long)]
    pub label: Option<String>,

    /// Match a catalog number associated with the release
    #[arg(long)]
    pub catno: Option<String>,

    /// Match the release's barcode
    #[arg(long)]
    pub barcode: Option<String>,

    /// Match a release event country
    #[arg(long)]
    pub country: Option<String>,

    /// Match a release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Match a medium format of the release
    #[arg(long)]
    pub format: Option<String>,

    /// Match the release's script code
    #[arg(long)]
    pub script: Option<String>,

    /// Match the release's language code
    #[arg(long)]
    pub language: Option<String>,

    /// Match the release's total track count
    #[arg(long)]
    pub tracks: Option<u32>,

    /// Match a tag attached to the release
    #[arg(long)]
    pub tag: Option<String>,

    /// Match the release's status (repeat to match any of several)
    #[arg(long, value_parser = parse_status)]
    pub status: Vec<ReleaseStatus>,

    /// Match the release group's primary type (repeat to match any of several)
    #[arg(long, value_parser = parse_group_type)]
    pub primary_type: Vec<ReleaseGroupType>,

    /// Match a secondary release group type (repeat to match any of several)
    #[arg(long, value_parser = parse_group_type)]
    pub secondary_type: Vec<ReleaseGroupType>,

    #[command(flatten)]
    /// Hand-written clause flags.
    pub clauses: ClauseArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `mbq release-group`.
#[derive(Args, Debug, Clone)]
pub struct ReleaseGroupCommand {
    /// Terms matched against the default field
    pub terms: Vec<String>,

    /// Match the release group's title (diacritics ignored)
    #[arg(long)]
    pub release_group: Option<String>,

    /// Match the name of an artist credited on the release group
    #[arg(long)]
    pub artist: Option<String>,

    /// Match the MBID of an artist credited on the release group
    #[arg(long, value_parser = parse_artist_mbid)]
    pub arid: Option<ArtistMbid>,

    /// Match the release group's MBID
    #[arg(long, value_parser = parse_release_group_mbid)]
    pub rgid: Option<ReleaseGroupMbid>,

    /// Match the title of a release in the group
    #[arg(long)]
    pub release: Option<String>,

    /// Match the number of releases in the group
    #[arg(long)]
    pub releases: Option<u32>,

    /// Match the group's first release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    #[arg(long)]
    pub first_release_date: Option<String>,

    /// Match a tag attached to the release group
    #[arg(long)]
    pub tag: Option<String>,

    /// Match the status of a release in the group (repeat to match any)
    #[arg(long, value_parser = parse_status)]
    pub status: Vec<ReleaseStatus>,

    /// Match the group's primary type (repeat to match any of several)
    #[arg(long, value_parser = parse_group_type)]
    pub primary_type: Vec<ReleaseGroupType>,

    /// Match a secondary type of the group (repeat to match any of several)
    #[arg(long, value_parser = parse_group_type)]
    pub secondary_type: Vec<ReleaseGroupType>,

    #[command(flatten)]
    /// Hand-written clause flags.
    pub clauses: ClauseArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `mbq fields`.
#[derive(Args, Debug, Clone)]
pub struct FieldsCommand {
    /// Entity whose fields to list: artist, recording, release, release-group
    #[arg(value_parser = parse_entity)]
    pub entity: EntityKind,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `mbq escape`.
#[derive(Args, Debug, Clone)]
pub struct EscapeCommand {
    /// Text to escape
    pub text: String,
}

/// Supported `mbq` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Build an artist search query
    #[command(after_help = "\
EXAMPLES:
  mbq artist --artist 'Jethro Tull' --type group
  mbq artist --tag rock --country GB --ended false
  mbq artist Tull --not tag=electronic --missing endarea
  mbq artist --arid 5b11f4ce-a62d-471e-81fc-a69a8278c7da

Run 'mbq fields artist' to list every searchable field.")]
    Artist(ArtistCommand),

    /// Build a recording search query
    Recording(RecordingCommand),

    /// Build a release search query
    #[command(after_help = "\
EXAMPLES:
  mbq release --release 'Houses of the Holy' --date 1973-03-28
  mbq release --artist Zeppelin --status official --primary-type album
  mbq release --barcode 5099902988313 --format CD
  mbq release -f tracks=8 --not country=US

Run 'mbq fields release' to list every searchable field.")]
    Release(ReleaseCommand),

    /// Build a release group search query
    ReleaseGroup(ReleaseGroupCommand),

    /// List the searchable fields for an entity
    Fields(FieldsCommand),

    /// Escape Lucene reserved characters in text
    Escape(EscapeCommand),
}

/// Entities with searchable field listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Artist fields.
    Artist,
    /// Recording fields.
    Recording,
    /// Release fields.
    Release,
    /// Release group fields.
    ReleaseGroup,
}

impl str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "artist" => Ok(Self::Artist),
            "recording" => Ok(Self::Recording),
            "release" => Ok(Self::Release),
            "release-group" | "releasegroup" | "release_group" => Ok(Self::ReleaseGroup),
            _ => Err(format!(
                "unknown entity '{}', expected one of: artist, recording, release, release-group",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    /// Catches conflicting or misconfigured argument definitions.
    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn entity_kind_parses_all_spellings() {
        assert_eq!("artist".parse::<EntityKind>().unwrap(), EntityKind::Artist);
        assert_eq!("release-group".parse::<EntityKind>().unwrap(), EntityKind::ReleaseGroup);
        assert_eq!("RELEASE".parse::<EntityKind>().unwrap(), EntityKind::Release);
        assert!("label".parse::<EntityKind>().is_err());
    }

    #[test]
    fn entity_commands_expose_clause_flags() {
        let cmd = Cli::command();
        for name in ["artist", "recording", "release", "release-group"] {
            let sub = cmd
                .get_subcommands()
                .find(|c| c.get_name() == name)
                .unwrap_or_else(|| panic!("missing subcommand {name}"));
            for arg in ["fields", "require", "prohibit", "missing", "json"] {
                assert!(
                    sub.get_arguments().any(|a| a.get_id().as_str() == arg),
                    "{name} is missing the {arg} flag"
                );
            }
        }
    }
}
