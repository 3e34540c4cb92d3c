//! Track types for the interchange timeline.

use serde::{Deserialize, Serialize};
use turnover_core::TimeRange;

use crate::clip::Clip;
use crate::item::ItemKind;

/// Kind of track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackKind {
    Video,
    Audio,
}

impl TrackKind {
    /// Single-letter prefix used in track names (`V1`, `A2`, ...).
    pub fn letter(self) -> char {
        match self {
            TrackKind::Video => 'V',
            TrackKind::Audio => 'A',
        }
    }

    /// Whether a strip of the given kind belongs on this track.
    pub fn accepts(self, kind: ItemKind) -> bool {
        matches!(
            (self, kind),
            (TrackKind::Video, ItemKind::Movie) | (TrackKind::Audio, ItemKind::Sound)
        )
    }
}

/// An item in a track: media, or the explicit absence of media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrackItem {
    Clip(Clip),
    Gap { source_range: TimeRange },
}

impl TrackItem {
    /// Duration of this item in frames.
    pub fn duration_frames(&self) -> i64 {
        match self {
            TrackItem::Clip(clip) => clip.source_range.duration.value,
            TrackItem::Gap { source_range } => source_range.duration.value,
        }
    }
}

/// A gapless, single-kind lane of clips and gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Track name (`V1`, `V2`, ..., `A1`, ...).
    pub name: String,
    /// Track kind
    pub kind: TrackKind,
    /// Items in playback order
    pub items: Vec<TrackItem>,
}

impl Track {
    /// Create a new empty track.
    pub fn new(name: impl Into<String>, kind: TrackKind) -> Self {
        Self {
            name: name.into(),
            kind,
            items: Vec::new(),
        }
    }

    /// Total duration of this track in frames.
    pub fn duration_frames(&self) -> i64 {
        self.items.iter().map(TrackItem::duration_frames).sum()
    }

    /// Add a clip to the end of the track.
    pub fn append_clip(&mut self, clip: Clip) {
        self.items.push(TrackItem::Clip(clip));
    }

    /// Add a gap to the end of the track.
    pub fn append_gap(&mut self, source_range: TimeRange) {
        self.items.push(TrackItem::Gap { source_range });
    }

    /// Number of clips (excluding gaps) in this track.
    pub fn clip_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, TrackItem::Clip(_)))
            .count()
    }

    /// True when the track holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
