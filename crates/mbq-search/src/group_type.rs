//! Release group types and their combination into query terms.
//!
//! Some type names contain spaces or slashes (`audio drama`,
//! `mixtape/street`), so types always render as quoted phrases.

use std::{fmt, str};

use mbq_lucene::{Expression, Phrase, Term};

/// Primary or secondary type of a release group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseGroupType {
    /// A full-length release, the primary type most releases carry.
    Album,
    /// A release of one or two songs.
    Single,
    /// An extended play, shorter than a full album.
    Ep,
    /// A primary type for releases no other primary type fits.
    Other,
    /// An episodic release, such as a radio or podcast series.
    Broadcast,
    /// A collection drawn from previous releases.
    Compilation,
    /// The music of a film, show, or game.
    Soundtrack,
    /// An audio recording of spoken material that is not music.
    SpokenWord,
    /// A recorded conversation with an artist.
    Interview,
    /// A reading of a book.
    Audiobook,
    /// A recording of a live performance.
    Live,
    /// Existing material modified into a new version.
    Remix,
    /// A continuous mix performed by a DJ.
    DjMix,
    /// A mixtape or street release.
    MixtapeStreet,
    /// A demonstration recording, typically unpolished.
    Demo,
    /// A dramatized audio performance.
    AudioDrama,
}

impl ReleaseGroupType {
    /// Every type, primary types first, in listing order.
    pub const ALL: [Self; 16] = [
        Self::Album,
        Self::Single,
        Self::Ep,
        Self::Other,
        Self::Broadcast,
        Self::Compilation,
        Self::Soundtrack,
        Self::SpokenWord,
        Self::Interview,
        Self::Audiobook,
        Self::Live,
        Self::Remix,
        Self::DjMix,
        Self::MixtapeStreet,
        Self::Demo,
        Self::AudioDrama,
    ];

    /// The type name as the search server expects it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Single => "single",
            Self::Ep => "ep",
            Self::Other => "other",
            Self::Broadcast => "broadcast",
            Self::Compilation => "compilation",
            Self::Soundtrack => "soundtrack",
            Self::SpokenWord => "spokenword",
            Self::Interview => "interview",
            Self::Audiobook => "audiobook",
            Self::Live => "live",
            Self::Remix => "remix",
            Self::DjMix => "dj-mix",
            Self::MixtapeStreet => "mixtape/street",
            Self::Demo => "demo",
            Self::AudioDrama => "audio drama",
        }
    }

    /// Whether this type can appear as a release group's primary type.
    pub const fn is_primary(self) -> bool {
        matches!(
            self,
            Self::Album | Self::Single | Self::Ep | Self::Other | Self::Broadcast
        )
    }

    /// Combines with `other` so release groups of either type match.
    pub fn or(self, other: Self) -> TypeTerm {
        TypeTerm::from(self).or(other)
    }

    /// Combines with `other` so both types must match.
    pub fn and(self, other: Self) -> TypeTerm {
        TypeTerm::from(self).and(other)
    }
}

impl fmt::Display for ReleaseGroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for ReleaseGroupType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "album" => Ok(Self::Album),
            "single" => Ok(Self::Single),
            "ep" => Ok(Self::Ep),
            "other" => Ok(Self::Other),
            "broadcast" => Ok(Self::Broadcast),
            "compilation" => Ok(Self::Compilation),
            "soundtrack" => Ok(Self::Soundtrack),
            "spokenword" | "spoken-word" | "spoken_word" => Ok(Self::SpokenWord),
            "interview" => Ok(Self::Interview),
            "audiobook" => Ok(Self::Audiobook),
            "live" => Ok(Self::Live),
            "remix" => Ok(Self::Remix),
            "dj-mix" | "djmix" | "dj_mix" => Ok(Self::DjMix),
            "mixtape/street" | "mixtape-street" | "mixtape" | "street" => Ok(Self::MixtapeStreet),
            "demo" => Ok(Self::Demo),
            "audio drama" | "audio-drama" | "audio_drama" | "audiodrama" => Ok(Self::AudioDrama),
            _ => {
                let names: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
                Err(format!(
                    "unknown release group type '{}', expected one of: {}",
                    s,
                    names.join(", ")
                ))
            }
        }
    }
}

impl From<ReleaseGroupType> for Term {
    fn from(kind: ReleaseGroupType) -> Self {
        Phrase::new(kind.as_str()).into()
    }
}

/// One or more release group types combined with `OR` or `AND`, for
/// use with a type field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTerm {
    /// The combined term.
    term: Term,
}

impl TypeTerm {
    /// Extends the term so release groups of either type match.
    pub fn or(self, kind: ReleaseGroupType) -> Self {
        Self {
            term: self.term.or(Term::from(kind)),
        }
    }

    /// Extends the term so both types must match.
    pub fn and(self, kind: ReleaseGroupType) -> Self {
        Self {
            term: self.term.and(Term::from(kind)),
        }
    }
}

impl Expression for TypeTerm {
    fn append_to(&self, out: &mut String) {
        self.term.append_to(out);
    }
}

impl fmt::Display for TypeTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<ReleaseGroupType> for TypeTerm {
    fn from(kind: ReleaseGroupType) -> Self {
        Self {
            term: Term::from(kind),
        }
    }
}

impl From<TypeTerm> for Term {
    fn from(term: TypeTerm) -> Self {
        term.term
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mbq_lucene::Field;

    #[test]
    fn type_renders_quoted() {
        assert_eq!(Term::from(ReleaseGroupType::Album).build(), "\"album\"");
        assert_eq!(
            Term::from(ReleaseGroupType::AudioDrama).build(),
            "\"audio drama\""
        );
        assert_eq!(
            Term::from(ReleaseGroupType::MixtapeStreet).build(),
            "\"mixtape/street\""
        );
    }

    #[test]
    fn primary_types_are_flagged() {
        assert!(ReleaseGroupType::Album.is_primary());
        assert!(ReleaseGroupType::Broadcast.is_primary());
        assert!(!ReleaseGroupType::Compilation.is_primary());
        assert!(!ReleaseGroupType::Live.is_primary());
    }

    #[test]
    fn types_or_together() {
        let term = ReleaseGroupType::Album.or(ReleaseGroupType::Ep);
        assert_eq!(term.build(), "(\"album\" OR \"ep\")");
    }

    #[test]
    fn type_term_in_field() {
        let field = Field::new(
            "primarytype",
            ReleaseGroupType::Album.or(ReleaseGroupType::Single),
        );
        assert_eq!(field.build(), "primarytype:(\"album\" OR \"single\")");
    }

    #[test]
    fn parses_from_str() {
        assert_eq!(
            "album".parse::<ReleaseGroupType>().unwrap(),
            ReleaseGroupType::Album
        );
        assert_eq!(
            "dj-mix".parse::<ReleaseGroupType>().unwrap(),
            ReleaseGroupType::DjMix
        );
        assert_eq!(
            "mixtape/street".parse::<ReleaseGroupType>().unwrap(),
            ReleaseGroupType::MixtapeStreet
        );
        assert_eq!(
            "Audio Drama".parse::<ReleaseGroupType>().unwrap(),
            ReleaseGroupType::AudioDrama
        );
        assert!("vaporwave".parse::<ReleaseGroupType>().is_err());
    }
}
