//! The timeline container: root of the exported object graph.

use serde::{Deserialize, Serialize};

use crate::track::Track;

/// A complete interchange timeline: all video tracks, then all audio tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Scene name from the host.
    pub name: String,
    /// Tracks in output order.
    pub tracks: Vec<Track>,
}

impl Timeline {
    /// Create a new empty timeline.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    /// Append a track.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Total duration in frames: the longest track wins.
    pub fn duration_frames(&self) -> i64 {
        self.tracks
            .iter()
            .map(Track::duration_frames)
            .max()
            .unwrap_or(0)
    }
}
