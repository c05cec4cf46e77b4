//! MBID newtypes for the entity kinds MusicBrainz identifies.
//!
//! An MBID is a UUID in its canonical 36 character form: 32 hex digits
//! in five hyphen-separated groups of 8-4-4-4-12. Each entity kind gets
//! its own newtype so that, say, a release id cannot be handed to a
//! builder method expecting an artist id. Parsing validates the shape.
//! A parsed MBID converts into an unescaped query [`Term`], since its
//! hyphens must reach the server verbatim.

use std::{fmt, str::FromStr};

use mbq_lucene::{SingleTerm, Term};
use thiserror::Error;

/// Errors that can occur when parsing an MBID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MbidError {
    /// The input was not a 36 character hyphenated UUID.
    #[error("invalid mbid: {0:?}")]
    InvalidFormat(String),
}

/// Common interface of the MBID newtypes.
pub trait Mbid: fmt::Display {
    /// The canonical UUID text.
    fn value(&self) -> &str;
}

/// Byte offsets of the four hyphens in the canonical UUID form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Length of the canonical UUID form.
const MBID_LEN: usize = 36;

/// Checks the canonical 8-4-4-4-12 shape. Both hex digit cases are
/// accepted.
fn is_valid_mbid(value: &str) -> bool {
    value.len() == MBID_LEN
        && value.bytes().enumerate().all(|(i, b)| {
            if HYPHENS.contains(&i) {
                b == b'-'
            } else {
                b.is_ascii_hexdigit()
            }
        })
}

/// Defines an MBID newtype with parsing, formatting, and conversion
/// into an unescaped query term.
macro_rules! mbid_type {
    ($(#[$meta:meta])* $name:ident) => {
        mbid_type!($(#[$meta])* $name {});
    };
    (
        $(#[$meta:meta])* $name:ident {
            $($(#[$fn_meta:meta])* $well_known:ident => $uuid:literal;)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            /// Canonical UUID text.
            value: String,
        }

        impl $name {
            /// Parses an MBID, validating the canonical UUID shape.
            pub fn parse(value: &str) -> Result<Self, MbidError> {
                if is_valid_mbid(value) {
                    Ok(Self { value: value.to_string() })
                } else {
                    Err(MbidError::InvalidFormat(value.to_string()))
                }
            }

            $(
                $(#[$fn_meta])*
                pub fn $well_known() -> Self {
                    Self { value: $uuid.to_string() }
                }
            )*
        }

        impl Mbid for $name {
            fn value(&self) -> &str {
                &self.value
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl FromStr for $name {
            type Err = MbidError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$name> for Term {
            fn from(mbid: $name) -> Self {
                SingleTerm::new(mbid.value).into()
            }
        }

        impl From<&$name> for Term {
            fn from(mbid: &$name) -> Self {
                SingleTerm::new(mbid.value.as_str()).into()
            }
        }
    };
}

mbid_type! {
    /// Identifies an area: a country, region, or city.
    AreaMbid
}

mbid_type! {
    /// Identifies an artist.
    ArtistMbid {
        /// Special purpose artist for anonymous performers.
        anonymous => "f731ccc4-e22a-43af-a747-64213329e088";
        /// Special purpose artist for data tracks with no audio.
        data => "33cf029c-63b0-41a0-9855-be2a3665fb3b";
        /// Special purpose artist for spoken dialogue.
        dialogue => "314e1c25-dde7-4e4d-b2f4-0a7b9f7c56dc";
        /// Special purpose artist for tracks with no artist at all.
        no_artist => "eec63d3c-3b81-4ad4-b1e4-7c147d4d2b61";
        /// Special purpose artist for traditional music of unknown authorship.
        traditional => "9be7f096-97ec-4615-8957-8d40b5dcbc41";
        /// Special purpose artist for performers the cataloguer could not identify.
        unknown => "125ec42a-7229-4250-afc5-e057484327fe";
        /// Special purpose artist credited on compilations of multiple artists.
        various_artists => "89ad4ac3-39f7-470e-963a-56509c546377";
    }
}

mbid_type! {
    /// Identifies a label.
    LabelMbid
}

mbid_type! {
    /// Identifies a recording.
    RecordingMbid
}

mbid_type! {
    /// Identifies a release.
    ReleaseMbid
}

mbid_type! {
    /// Identifies a release group.
    ReleaseGroupMbid
}

mbid_type! {
    /// Identifies a track on a release medium.
    TrackMbid
}

mbid_type! {
    /// Identifies a work.
    WorkMbid
}

#[cfg(test)]
mod test {
    use super::*;
    use mbq_lucene::Expression;

    #[test]
    fn mbid_parses_and_formats() {
        let mbid: ArtistMbid = "c0b2500e-0cef-4130-869d-732b23ed9df5".parse().unwrap();
        assert_eq!(mbid.value(), "c0b2500e-0cef-4130-869d-732b23ed9df5");
        assert_eq!(mbid.to_string(), "c0b2500e-0cef-4130-869d-732b23ed9df5");
    }

    #[test]
    fn mbid_accepts_uppercase_hex() {
        assert!(ReleaseMbid::parse("38650E8C-3C6F-431B-A7C6-879792C79B7C").is_ok());
    }

    #[test]
    fn invalid_mbids_error() {
        assert!(ArtistMbid::parse("").is_err());
        assert!(ArtistMbid::parse("not-a-uuid").is_err());
        // 37 characters
        assert!(ArtistMbid::parse("c0b2500e-0cef-4130-869d-732b23ed9df55").is_err());
        // hyphen out of place
        assert!(ArtistMbid::parse("c0b2500e0-cef-4130-869d-732b23ed9df5").is_err());
        // non-hex digit
        assert!(ArtistMbid::parse("z0b2500e-0cef-4130-869d-732b23ed9df5").is_err());
    }

    #[test]
    fn error_reports_offending_value() {
        let err = ArtistMbid::parse("nope").unwrap_err();
        assert_eq!(err.to_string(), "invalid mbid: \"nope\"");
    }

    #[test]
    fn well_known_artists_are_valid() {
        assert!(is_valid_mbid(ArtistMbid::various_artists().value()));
        assert!(is_valid_mbid(ArtistMbid::anonymous().value()));
        assert!(is_valid_mbid(ArtistMbid::no_artist().value()));
        assert!(is_valid_mbid(ArtistMbid::unknown().value()));
        assert!(is_valid_mbid(ArtistMbid::data().value()));
        assert!(is_valid_mbid(ArtistMbid::dialogue().value()));
        assert!(is_valid_mbid(ArtistMbid::traditional().value()));
    }

    #[test]
    fn mbid_renders_as_unescaped_term() {
        let term = Term::from(ArtistMbid::various_artists());
        assert_eq!(term.build(), "89ad4ac3-39f7-470e-963a-56509c546377");
    }
}
