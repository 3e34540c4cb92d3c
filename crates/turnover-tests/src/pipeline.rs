//! Integration tests for the grouping and track assembly pipeline.
//!
//! Exercises turnover-core and turnover-timeline together on full scenes.

use turnover_core::FrameRate;
use turnover_timeline::{
    build_timeline, group_by_channel, ItemKind, SourceItem, TrackItem, TrackKind,
};

// ── Helpers ────────────────────────────────────────────────────

fn strip(name: &str, kind: ItemKind, channel: u32, start: i64, duration: i64) -> SourceItem {
    SourceItem {
        name: name.into(),
        kind,
        channel,
        start,
        final_duration: duration,
        trim_start_offset: 0,
        media_duration: duration + 50,
        media_path: Some(format!("/footage/{name}.mov").into()),
    }
}

/// A scene resembling a real rough cut: picture on channels 1-2,
/// sound on channel 3, a title strip the exporter ignores on channel 4.
fn rough_cut() -> Vec<SourceItem> {
    vec![
        strip("sc01", ItemKind::Movie, 1, 0, 120),
        strip("sc02", ItemKind::Movie, 1, 120, 96),
        strip("sc03", ItemKind::Movie, 1, 260, 48),
        strip("insert", ItemKind::Movie, 2, 48, 24),
        strip("dialogue", ItemKind::Sound, 3, 0, 216),
        strip("music", ItemKind::Sound, 3, 260, 48),
        SourceItem {
            media_path: None,
            ..strip("title", ItemKind::Other, 4, 10, 80)
        },
    ]
}

// ── Grouping across a full scene ───────────────────────────────

#[test]
fn rough_cut_groups_into_four_channels() {
    let items = rough_cut();
    let channels = group_by_channel(&items);
    assert_eq!(channels.len(), 4);
    assert_eq!(
        channels.iter().map(|c| c.number).collect::<Vec<_>>(),
        [1, 2, 3, 4]
    );
    assert_eq!(channels[0].items.len(), 3);
}

// ── Full assembly ──────────────────────────────────────────────

#[test]
fn rough_cut_assembles_expected_tracks() {
    let items = rough_cut();
    let rate = FrameRate::FPS_24.normalized();
    let timeline = build_timeline("Rough Cut", &items, rate).unwrap();

    // 4 channels × 2 kinds, video block first.
    assert_eq!(timeline.tracks.len(), 8);
    let names: Vec<&str> = timeline.tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["V1", "V2", "V3", "V4", "A1", "A2", "A3", "A4"]);

    // V1: three cuts with one hole between sc02 (ends 216) and sc03 (260).
    let v1 = &timeline.tracks[0];
    assert_eq!(v1.clip_count(), 3);
    assert_eq!(v1.items.len(), 4);
    assert!(matches!(v1.items[2], TrackItem::Gap { .. }));
    assert_eq!(v1.duration_frames(), 308);

    // V2: insert starts at 48, so one leading gap.
    let v2 = &timeline.tracks[1];
    assert_eq!(v2.items.len(), 2);
    assert_eq!(v2.duration_frames(), 72);

    // Channel 3 carries no picture; channel 4 only the ignored title.
    assert!(timeline.tracks[2].is_empty());
    assert!(timeline.tracks[3].is_empty());

    // A3: dialogue flush at 0, then a gap up to the music at 260.
    let a3 = &timeline.tracks[6];
    assert_eq!(a3.kind, TrackKind::Audio);
    assert_eq!(a3.clip_count(), 2);
    assert_eq!(a3.items.len(), 3);
    assert_eq!(a3.duration_frames(), 308);

    assert_eq!(timeline.duration_frames(), 308);
}

#[test]
fn every_track_is_contiguous() {
    let items = rough_cut();
    let rate = FrameRate::FPS_29_97.normalized();
    let timeline = build_timeline("Rough Cut", &items, rate).unwrap();

    for track in &timeline.tracks {
        let mut pos = 0i64;
        for item in &track.items {
            if let TrackItem::Gap { source_range } = item {
                assert_eq!(source_range.start.value, pos);
            }
            assert!(item.duration_frames() > 0);
            pos += item.duration_frames();
        }
        assert_eq!(pos, track.duration_frames());
    }
}

#[test]
fn ntsc_rate_flows_through_to_clip_ranges() {
    let items = vec![strip("sc01", ItemKind::Movie, 1, 0, 24)];
    let rate = FrameRate::FPS_23_976.normalized();
    let timeline = build_timeline("NTSC", &items, rate).unwrap();

    let TrackItem::Clip(clip) = &timeline.tracks[0].items[0] else {
        panic!("expected a clip");
    };
    assert!(!clip.source_range.duration.rate.is_whole());
    assert!((clip.source_range.duration.rate.to_f64() - 23.976).abs() < 1e-9);
}
