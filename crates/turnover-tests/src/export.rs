//! Integration tests for the export boundary.
//!
//! Drives a scene snapshot through the full pipeline and back through the
//! native adapter's reader.

use std::path::Path;
use turnover_export::{
    export_scene, Adapter, ExportFormat, OtioJsonAdapter, SceneSnapshot, SceneSource,
};
use turnover_timeline::{ItemKind, SourceItem, TrackItem, TrackKind};

// ── Helpers ────────────────────────────────────────────────────

fn strip(name: &str, kind: ItemKind, channel: u32, start: i64, duration: i64) -> SourceItem {
    SourceItem {
        name: name.into(),
        kind,
        channel,
        start,
        final_duration: duration,
        trim_start_offset: 0,
        media_duration: duration,
        media_path: Some(format!("/footage/{name}.mov").into()),
    }
}

fn snapshot(fps: u32, fps_base: u32, items: Vec<SourceItem>) -> SceneSnapshot {
    SceneSnapshot {
        name: "Picture Lock".into(),
        fps,
        fps_base,
        items,
    }
}

// ── Scenario: simple cut ───────────────────────────────────────

#[test]
fn simple_cut_exports_back_to_back_clips() {
    let scene = snapshot(
        24,
        1,
        vec![
            strip("a", ItemKind::Movie, 1, 0, 48),
            strip("b", ItemKind::Movie, 1, 48, 24),
        ],
    );

    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let written = export_scene(&scene, Some(&tmp.path().join("cut")), ExportFormat::Otio)
        .unwrap()
        .unwrap();

    let timeline = OtioJsonAdapter.read_timeline(&written).unwrap();
    let video = &timeline.tracks[0];
    assert_eq!(video.clip_count(), 2);
    assert_eq!(video.items.len(), 2, "flush cut must not introduce a gap");
    assert_eq!(video.duration_frames(), 72);
}

// ── Scenario: single gap ───────────────────────────────────────

#[test]
fn late_strip_exports_with_leading_gap() {
    let mut late = strip("late", ItemKind::Movie, 1, 10, 20);
    late.trim_start_offset = 4;
    let scene = snapshot(24, 1, vec![late]);

    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let written = export_scene(&scene, Some(&tmp.path().join("gap")), ExportFormat::Otio)
        .unwrap()
        .unwrap();

    let timeline = OtioJsonAdapter.read_timeline(&written).unwrap();
    let video = &timeline.tracks[0];
    assert_eq!(video.items.len(), 2);

    let TrackItem::Gap { source_range } = &video.items[0] else {
        panic!("expected a leading gap");
    };
    assert_eq!(source_range.start.value, 0);
    assert_eq!(source_range.duration.value, 10);

    let TrackItem::Clip(clip) = &video.items[1] else {
        panic!("expected a clip after the gap");
    };
    assert_eq!(clip.source_range.start.value, 4);
    assert_eq!(clip.source_range.duration.value, 20);
    assert_eq!(clip.name, "late.mov");
}

// ── Round trip is bit-exact ────────────────────────────────────

#[test]
fn export_roundtrip_preserves_structure_at_ntsc_rate() {
    let scene = snapshot(
        24000,
        1001,
        vec![
            strip("pic", ItemKind::Movie, 1, 12, 100),
            strip("mix", ItemKind::Sound, 2, 0, 150),
        ],
    );

    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let written = export_scene(&scene, Some(&tmp.path().join("lock")), ExportFormat::Otio)
        .unwrap()
        .unwrap();

    // Build the same timeline in memory and compare against the file.
    let rate = scene.frame_rate().normalized();
    let expected =
        turnover_timeline::build_timeline("Picture Lock", &scene.items, rate).unwrap();
    let loaded = OtioJsonAdapter.read_timeline(&written).unwrap();

    assert_eq!(loaded, expected);
    assert_eq!(
        loaded.tracks.iter().map(|t| t.kind).collect::<Vec<_>>(),
        [TrackKind::Video, TrackKind::Video, TrackKind::Audio, TrackKind::Audio]
    );
}

// ── Failure surfaces ───────────────────────────────────────────

#[test]
fn offline_media_aborts_export_before_any_write() {
    let mut offline = strip("offline", ItemKind::Movie, 1, 0, 24);
    offline.media_path = None;
    let scene = snapshot(24, 1, vec![offline]);

    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let dest = tmp.path().join("broken");
    let err = export_scene(&scene, Some(&dest), ExportFormat::Otio).unwrap_err();

    assert!(err.to_string().contains("offline"));
    assert!(!tmp.path().join("broken.otio").exists());
}

#[test]
fn empty_destination_exports_nothing() {
    let scene = snapshot(24, 1, vec![strip("a", ItemKind::Movie, 1, 0, 24)]);
    let result = export_scene(&scene, Some(Path::new("")), ExportFormat::Otio).unwrap();
    assert_eq!(result, None);
}
