//! The export operation: host scene in, interchange file out.

use std::path::{Path, PathBuf};
use tracing::info;
use turnover_core::{Result, TurnoverError};
use turnover_timeline::{build_timeline, Timeline};

use crate::format::{resolve_output_path, ExportFormat};
use crate::otio_json::OtioJsonAdapter;
use crate::scene::SceneSource;

/// Serializer collaborator: turns a finished timeline into bytes on disk
/// and back.
pub trait Adapter {
    /// Write the timeline to `path`. All-or-nothing: either the complete
    /// document lands on disk or no file is produced.
    fn write_timeline(&self, timeline: &Timeline, path: &Path) -> Result<()>;

    /// Read a timeline back from `path`.
    fn read_timeline(&self, path: &Path) -> Result<Timeline>;
}

/// Look up the adapter for a format.
///
/// Only the OTIO JSON adapter is linked into this build; `Other` writes the
/// native container to the literal path. Formats needing an external
/// adapter fail fast here rather than at write time.
pub fn adapter_for(format: ExportFormat) -> Result<Box<dyn Adapter>> {
    match format {
        ExportFormat::Otio | ExportFormat::Other => Ok(Box::new(OtioJsonAdapter)),
        other => Err(TurnoverError::UnsupportedFormat(format!(
            "no adapter for '{}' is linked into this build",
            other.tag()
        ))),
    }
}

/// Run one export from a host scene to an interchange file.
///
/// A missing or empty destination means "nothing to do" and returns
/// `Ok(None)` without touching the host. On success the written path
/// (after extension resolution) is returned.
pub fn export_scene(
    source: &dyn SceneSource,
    dest: Option<&Path>,
    format: ExportFormat,
) -> Result<Option<PathBuf>> {
    let Some(dest) = dest.filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(None);
    };

    let rate = source.frame_rate().normalized();
    let items = source.items()?;
    info!(
        scene = source.name(),
        strips = items.len(),
        %rate,
        "building interchange timeline"
    );

    let timeline = build_timeline(source.name(), &items, rate)?;

    let path = resolve_output_path(dest, format);
    let adapter = adapter_for(format)?;
    adapter.write_timeline(&timeline, &path)?;

    info!(path = %path.display(), tracks = timeline.tracks.len(), "exported timeline");
    Ok(Some(path))
}
