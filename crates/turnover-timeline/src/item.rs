//! Source-side strip model.
//!
//! The host editor hands over loosely structured strip records; this is the
//! explicit contract they are validated against before grouping.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use turnover_core::{Result, TurnoverError};

/// Kind of a placed strip. Kinds other than movie and sound pass through
/// the pipeline untouched and end up on no track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Movie,
    Sound,
    Other,
}

/// One placed unit of media in the source editor's timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceItem {
    /// Strip name as shown in the editor (used in diagnostics).
    pub name: String,
    /// Media kind tag.
    pub kind: ItemKind,
    /// 1-based layering lane; higher numbers composite above lower ones.
    pub channel: u32,
    /// Absolute scene frame where the strip starts.
    pub start: i64,
    /// Post-trim duration in frames.
    pub final_duration: i64,
    /// Frames trimmed from the head of the source media.
    pub trim_start_offset: i64,
    /// Full untrimmed length of the source media in frames.
    pub media_duration: i64,
    /// Absolute media path resolved by the host, when it could provide one.
    pub media_path: Option<PathBuf>,
}

impl SourceItem {
    /// Validate the contract before the item enters the pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.channel == 0 {
            return Err(TurnoverError::InvalidItem(format!(
                "strip '{}' has channel 0; channels are 1-based",
                self.name
            )));
        }
        if self.final_duration <= 0 {
            return Err(TurnoverError::InvalidItem(format!(
                "strip '{}' has non-positive duration {}",
                self.name, self.final_duration
            )));
        }
        if self.trim_start_offset < 0 {
            return Err(TurnoverError::InvalidItem(format!(
                "strip '{}' has negative head trim {}",
                self.name, self.trim_start_offset
            )));
        }
        Ok(())
    }
}
