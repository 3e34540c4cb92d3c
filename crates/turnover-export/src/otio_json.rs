//! Native OTIO JSON adapter.
//!
//! Emits the OpenTimelineIO document schema (`Timeline.1` wrapping a
//! `Stack.1` of `Track.1`s) and parses it back, so a written timeline can be
//! verified against its on-disk form without the reference library.

use serde_json::{json, Value};
use std::path::Path;
use turnover_core::{Rate, RationalTime, Result, TimeRange, TurnoverError};
use turnover_timeline::{Clip, MediaReference, Timeline, Track, TrackItem, TrackKind};

use crate::export::Adapter;

/// Adapter writing and reading the native OTIO JSON container.
pub struct OtioJsonAdapter;

impl Adapter for OtioJsonAdapter {
    fn write_timeline(&self, timeline: &Timeline, path: &Path) -> Result<()> {
        // Serialize the whole document first so a failure leaves no file.
        let doc = timeline_to_json(timeline);
        let bytes = serde_json::to_vec_pretty(&doc)
            .map_err(|e| TurnoverError::Serialization(format!("OTIO JSON encode failed: {e}")))?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn read_timeline(&self, path: &Path) -> Result<Timeline> {
        let data = std::fs::read_to_string(path)?;
        read_from_str(&data)
    }
}

// ── Writing ─────────────────────────────────────────────────────

fn time_to_json(time: RationalTime) -> Value {
    json!({
        "OTIO_SCHEMA": "RationalTime.1",
        "value": time.value,
        "rate": time.rate,
    })
}

fn range_to_json(range: TimeRange) -> Value {
    json!({
        "OTIO_SCHEMA": "TimeRange.1",
        "start_time": time_to_json(range.start),
        "duration": time_to_json(range.duration),
    })
}

fn clip_to_json(clip: &Clip) -> Value {
    json!({
        "OTIO_SCHEMA": "Clip.2",
        "name": clip.name,
        "source_range": range_to_json(clip.source_range),
        "media_reference": {
            "OTIO_SCHEMA": "ExternalReference.1",
            "target_url": clip.media.target_path.to_string_lossy(),
            "available_range": range_to_json(clip.media.available_range),
        },
    })
}

fn item_to_json(item: &TrackItem) -> Value {
    match item {
        TrackItem::Clip(clip) => clip_to_json(clip),
        TrackItem::Gap { source_range } => json!({
            "OTIO_SCHEMA": "Gap.1",
            "name": "",
            "source_range": range_to_json(*source_range),
        }),
    }
}

fn track_to_json(track: &Track) -> Value {
    let kind = match track.kind {
        TrackKind::Video => "Video",
        TrackKind::Audio => "Audio",
    };
    json!({
        "OTIO_SCHEMA": "Track.1",
        "name": track.name,
        "kind": kind,
        "children": track.items.iter().map(item_to_json).collect::<Vec<_>>(),
    })
}

/// Build the full OTIO document for a timeline.
pub fn timeline_to_json(timeline: &Timeline) -> Value {
    json!({
        "OTIO_SCHEMA": "Timeline.1",
        "name": timeline.name,
        "tracks": {
            "OTIO_SCHEMA": "Stack.1",
            "name": "tracks",
            "children": timeline.tracks.iter().map(track_to_json).collect::<Vec<_>>(),
        },
    })
}

// ── Reading ─────────────────────────────────────────────────────

fn malformed(what: &str, detail: &str) -> TurnoverError {
    TurnoverError::Serialization(format!("malformed OTIO {what}: {detail}"))
}

fn parse_time(value: &Value, what: &str) -> Result<RationalTime> {
    let frames = value
        .get("value")
        .and_then(Value::as_f64)
        .ok_or_else(|| malformed(what, "missing time value"))?;
    let rate = value
        .get("rate")
        .and_then(Value::as_f64)
        .ok_or_else(|| malformed(what, "missing rate"))?;
    Ok(RationalTime::new(frames.round() as i64, Rate::from_fps(rate)))
}

fn parse_range(value: &Value, what: &str) -> Result<TimeRange> {
    let start = value
        .get("start_time")
        .ok_or_else(|| malformed(what, "missing start_time"))?;
    let duration = value
        .get("duration")
        .ok_or_else(|| malformed(what, "missing duration"))?;
    Ok(TimeRange::new(
        parse_time(start, what)?,
        parse_time(duration, what)?,
    ))
}

fn parse_clip(value: &Value) -> Result<Clip> {
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let source_range = parse_range(
        value
            .get("source_range")
            .ok_or_else(|| malformed("clip", "missing source_range"))?,
        "clip",
    )?;

    let media_ref = value
        .get("media_reference")
        .ok_or_else(|| malformed("clip", "missing media_reference"))?;
    let target = media_ref
        .get("target_url")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("media reference", "missing target_url"))?;
    let available_range = parse_range(
        media_ref
            .get("available_range")
            .ok_or_else(|| malformed("media reference", "missing available_range"))?,
        "media reference",
    )?;

    Ok(Clip {
        name,
        source_range,
        media: MediaReference {
            target_path: target.into(),
            available_range,
        },
    })
}

fn parse_track(value: &Value) -> Result<Track> {
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let kind = match value.get("kind").and_then(Value::as_str) {
        Some("Audio") => TrackKind::Audio,
        _ => TrackKind::Video,
    };

    let mut track = Track::new(name, kind);
    if let Some(children) = value.get("children").and_then(Value::as_array) {
        for child in children {
            let schema = child
                .get("OTIO_SCHEMA")
                .and_then(Value::as_str)
                .unwrap_or_default();
            if schema.starts_with("Clip") {
                track.append_clip(parse_clip(child)?);
            } else if schema.starts_with("Gap") {
                let range = parse_range(
                    child
                        .get("source_range")
                        .ok_or_else(|| malformed("gap", "missing source_range"))?,
                    "gap",
                )?;
                track.append_gap(range);
            }
            // Other schemas (transitions, nested stacks) are not produced
            // by this exporter and are skipped on read.
        }
    }
    Ok(track)
}

/// Parse an OTIO JSON document into a timeline.
pub fn read_from_str(data: &str) -> Result<Timeline> {
    let doc: Value = serde_json::from_str(data)
        .map_err(|e| TurnoverError::Serialization(format!("invalid OTIO JSON: {e}")))?;

    let schema = doc
        .get("OTIO_SCHEMA")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if !schema.starts_with("Timeline") {
        return Err(malformed("document", &format!("unexpected schema '{schema}'")));
    }

    let mut timeline = Timeline::new(
        doc.get("name")
            .and_then(Value::as_str)
            .unwrap_or_default(),
    );

    if let Some(children) = doc
        .get("tracks")
        .and_then(|stack| stack.get("children"))
        .and_then(Value::as_array)
    {
        for track in children {
            timeline.add_track(parse_track(track)?);
        }
    }

    Ok(timeline)
}
