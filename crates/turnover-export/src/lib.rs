//! Turnover Export - From host scene to interchange file
//!
//! Ties the pipeline together: a [`SceneSource`] supplies the scene name,
//! frame rate, and strips; the timeline crate assembles tracks; an
//! [`Adapter`] writes the finished graph to disk. OTIO JSON is the native
//! adapter; other containers plug in through the same seam.

pub mod export;
pub mod format;
pub mod otio_json;
pub mod scene;

pub use export::{adapter_for, export_scene, Adapter};
pub use format::{resolve_output_path, ExportFormat};
pub use otio_json::OtioJsonAdapter;
pub use scene::{SceneSnapshot, SceneSource};
