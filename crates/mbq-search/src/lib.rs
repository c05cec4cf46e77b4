//! Typed search builders for the MusicBrainz search API.
//!
//! Each searchable entity gets a builder over its own field vocabulary:
//!
//! - [`ArtistSearch`] searches artists
//! - [`RecordingSearch`] searches recordings
//! - [`ReleaseSearch`] searches releases
//! - [`ReleaseGroupSearch`] searches release groups
//!
//! A builder accumulates fielded clauses and renders the Lucene query
//! string the server expects. Identifier fields take validated MBID
//! newtypes, so a release id cannot be passed where an artist id is
//! wanted:
//!
//! ```
//! use mbq_lucene::Expression;
//! use mbq_search::{ArtistMbid, ReleaseSearch};
//!
//! let arid: ArtistMbid = "5b11f4ce-a62d-471e-81fc-a69a8278c7da".parse()?;
//! let query = ReleaseSearch::new()
//!     .artist_id(arid)
//!     .release("Houses of the Holy")
//!     .build();
//! assert_eq!(
//!     query,
//!     "arid:5b11f4ce-a62d-471e-81fc-a69a8278c7da release:\"Houses of the Holy\""
//! );
//! # Ok::<(), mbq_search::MbidError>(())
//! ```

#![warn(missing_docs)]

mod artist;
mod group_type;
mod join;
mod mbid;
mod recording;
mod release;
mod release_group;
mod search;
mod status;
mod year;

pub use artist::{ArtistField, ArtistSearch};
pub use group_type::{ReleaseGroupType, TypeTerm};
pub use join::{TermJoin, TermRange};
pub use mbid::{
    AreaMbid, ArtistMbid, LabelMbid, Mbid, MbidError, RecordingMbid, ReleaseGroupMbid, ReleaseMbid,
    TrackMbid, WorkMbid,
};
pub use recording::{RecordingField, RecordingSearch};
pub use release::{ReleaseField, ReleaseSearch};
pub use release_group::{ReleaseGroupField, ReleaseGroupSearch};
pub use search::EntityField;
pub use status::{ReleaseStatus, StatusTerm};
pub use year::Year;
