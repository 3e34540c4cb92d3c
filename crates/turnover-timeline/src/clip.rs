//! Interchange clip and media reference types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use turnover_core::{Rate, Result, TimeRange, TurnoverError};

use crate::item::SourceItem;

/// Reference to the full underlying source media file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaReference {
    /// Absolute path to the media file.
    pub target_path: PathBuf,
    /// Range of the file that is usable: starts at zero and spans the full
    /// untrimmed media duration. The scene rate stands in for the true
    /// per-clip rate, which the host cannot report.
    pub available_range: TimeRange,
}

impl MediaReference {
    /// Create a reference covering `media_duration` frames from time zero.
    pub fn new(target_path: impl Into<PathBuf>, media_duration: i64, rate: Rate) -> Self {
        Self {
            target_path: target_path.into(),
            available_range: TimeRange::from_frames(0, media_duration, rate),
        }
    }
}

/// A clip on an interchange track: the used slice of one media file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// File basename of the referenced media.
    pub name: String,
    /// Portion of the source actually used: head trim offset and post-trim
    /// duration at the scene rate.
    pub source_range: TimeRange,
    /// The referenced media with provenance.
    pub media: MediaReference,
}

impl Clip {
    /// Build a clip from a validated strip.
    ///
    /// Fails with [`TurnoverError::UnresolvableMedia`] when the host could
    /// not resolve the strip's media path; a silently dropped clip would
    /// leave an unexplained hole in the track.
    pub fn from_item(item: &SourceItem, rate: Rate) -> Result<Self> {
        let path = item.media_path.as_deref().ok_or_else(|| {
            TurnoverError::UnresolvableMedia(format!(
                "strip '{}' (channel {}, frame {}) has no resolvable media path",
                item.name, item.channel, item.start
            ))
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| item.name.clone());

        Ok(Self {
            name,
            source_range: TimeRange::from_frames(item.trim_start_offset, item.final_duration, rate),
            media: MediaReference::new(path, item.media_duration, rate),
        })
    }
}
