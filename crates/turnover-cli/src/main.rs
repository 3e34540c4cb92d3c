//! Turnover - Timeline interchange exporter
//!
//! Reads a scene snapshot (JSON) captured from the host editor and writes
//! the interchange timeline it describes.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use turnover_export::{export_scene, ExportFormat, SceneSnapshot};

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = std::env::args().skip(1);
    let (scene_path, dest, format) = match (args.next(), args.next(), args.next()) {
        (Some(scene), Some(dest), format) => (PathBuf::from(scene), PathBuf::from(dest), format),
        _ => {
            eprintln!("usage: turnover <scene.json> <output> [otio|edl|fcpxml|aaf|kdenlive|other]");
            std::process::exit(2);
        }
    };

    let format = match format.as_deref() {
        None => ExportFormat::Otio,
        Some(tag) => match ExportFormat::from_tag(tag) {
            Some(fmt) => fmt,
            None => bail!("unknown format '{tag}'"),
        },
    };

    let scene = SceneSnapshot::load_from_file(&scene_path)?;
    info!(scene = %scene.name, path = %scene_path.display(), "loaded scene snapshot");

    match export_scene(&scene, Some(Path::new(&dest)), format)? {
        Some(written) => println!("Exported: {}", written.display()),
        None => println!("Nothing to do: no destination given"),
    }

    Ok(())
}
