//! Host scene contract and the JSON snapshot that satisfies it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use turnover_core::{FrameRate, Result, TurnoverError};
use turnover_timeline::SourceItem;

/// What one export needs from the host editor: the scene name, the scene
/// frame rate, and the strip list. Implementations are read once per export
/// and must not be re-entered during the call.
pub trait SceneSource {
    /// Scene name, used as the timeline name.
    fn name(&self) -> &str;

    /// Scene frame rate as the host reports it (fps over fps base).
    fn frame_rate(&self) -> FrameRate;

    /// All strips in the scene, in host enumeration order.
    fn items(&self) -> Result<Vec<SourceItem>>;
}

fn default_fps_base() -> u32 {
    1
}

/// A host scene captured to a plain JSON document, so an export can run
/// outside the editor process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Scene name.
    pub name: String,
    /// Frame rate numerator (e.g. 24000).
    pub fps: u32,
    /// Frame rate denominator (e.g. 1001). Defaults to 1.
    #[serde(default = "default_fps_base")]
    pub fps_base: u32,
    /// Strips in host enumeration order.
    pub items: Vec<SourceItem>,
}

impl SceneSnapshot {
    /// Parse a snapshot from JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data)
            .map_err(|e| TurnoverError::Serialization(format!("invalid scene snapshot: {e}")))
    }

    /// Load a snapshot from a file path.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }
}

impl SceneSource for SceneSnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn frame_rate(&self) -> FrameRate {
        FrameRate::new(self.fps, self.fps_base)
    }

    fn items(&self) -> Result<Vec<SourceItem>> {
        Ok(self.items.clone())
    }
}
