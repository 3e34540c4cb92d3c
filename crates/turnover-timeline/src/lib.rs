//! Turnover Timeline - Interchange timeline data model
//!
//! Implements the track-based interchange model and the transformation
//! that produces it from a channel-based strip layout:
//! - Source strips with channel/start/trim metadata
//! - Channel grouping and ordering
//! - Gapless track assembly (clips and explicit gaps)

pub mod builder;
pub mod channel;
pub mod clip;
pub mod item;
pub mod timeline;
pub mod track;

pub use builder::{build_timeline, build_track};
pub use channel::{group_by_channel, Channel};
pub use clip::{Clip, MediaReference};
pub use item::{ItemKind, SourceItem};
pub use timeline::Timeline;
pub use track::{Track, TrackItem, TrackKind};
