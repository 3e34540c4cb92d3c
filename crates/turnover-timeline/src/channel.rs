//! Channel grouping: bucket strips by lane and order them by start frame.

use smallvec::SmallVec;

use crate::item::SourceItem;

/// One non-empty layering lane with its strips in playback order.
#[derive(Debug, Clone)]
pub struct Channel<'a> {
    /// 1-based channel number from the source editor.
    pub number: u32,
    /// Strips ascending by start frame; ties keep host enumeration order.
    pub items: SmallVec<[&'a SourceItem; 8]>,
}

/// Group strips into per-channel sequences ordered by start frame.
///
/// Channels with no strips are omitted, so a layout occupying only
/// channels 2 and 5 yields exactly two channels. Items must have passed
/// [`SourceItem::validate`]; channel numbers are 1-based.
pub fn group_by_channel(items: &[SourceItem]) -> Vec<Channel<'_>> {
    let max_channel = items.iter().map(|item| item.channel).max().unwrap_or(0);

    let mut buckets: Vec<SmallVec<[&SourceItem; 8]>> =
        vec![SmallVec::new(); max_channel as usize];
    for item in items {
        buckets[(item.channel - 1) as usize].push(item);
    }

    let mut channels = Vec::new();
    for (index, mut bucket) in buckets.into_iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        // Stable sort: strips sharing a start frame keep their input order.
        bucket.sort_by_key(|item| item.start);
        channels.push(Channel {
            number: index as u32 + 1,
            items: bucket,
        });
    }
    channels
}
