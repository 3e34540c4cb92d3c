//! Track assembly: turn ordered channels into gapless interchange tracks.
//!
//! Each channel is walked once per track kind. A running frame cursor tracks
//! how much content the track already holds; any hole between the cursor and
//! the next strip becomes an explicit gap, so the finished track is
//! contiguous from frame zero to its duration.

use turnover_core::{Rate, Result, TimeRange};

use crate::channel::{group_by_channel, Channel};
use crate::clip::Clip;
use crate::item::SourceItem;
use crate::timeline::Timeline;
use crate::track::{Track, TrackKind};

/// Build one track of the given kind from an ordered channel.
///
/// Strips of other kinds are skipped; a channel holding only sound strips
/// still yields a (then empty) video track so channel cardinality is
/// preserved across both passes.
pub fn build_track(
    channel: &Channel<'_>,
    kind: TrackKind,
    name: impl Into<String>,
    rate: Rate,
) -> Result<Track> {
    let mut track = Track::new(name, kind);
    // Frames of content appended so far.
    let mut cursor: i64 = 0;

    for item in &channel.items {
        if !kind.accepts(item.kind) {
            continue;
        }

        let clip_start = item.start;
        if clip_start > cursor {
            track.append_gap(TimeRange::from_frames(cursor, clip_start - cursor, rate));
            cursor = clip_start;
        }

        track.append_clip(Clip::from_item(item, rate)?);
        cursor += item.final_duration;
    }

    Ok(track)
}

/// Build the full timeline: every video track (in channel order), then every
/// audio track (in channel order). Tracks are numbered per kind as created.
pub fn build_timeline(name: impl Into<String>, items: &[SourceItem], rate: Rate) -> Result<Timeline> {
    for item in items {
        item.validate()?;
    }

    let channels = group_by_channel(items);
    let mut timeline = Timeline::new(name);

    for kind in [TrackKind::Video, TrackKind::Audio] {
        for (index, channel) in channels.iter().enumerate() {
            let track_name = format!("{}{}", kind.letter(), index + 1);
            timeline.add_track(build_track(channel, kind, track_name, rate)?);
        }
    }

    Ok(timeline)
}
