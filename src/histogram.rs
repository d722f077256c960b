use std::collections::BTreeMap;

use rgb::RGBA;

use crate::color::{pack, unpack};

/// An exact tally for one distinct RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCount {
    pub color: RGBA<u8>,
    pub count: u64,
}

/// Build an exact per-color histogram, sorted by descending count.
///
/// Every pixel is visited once and counted under its full RGBA tuple — no
/// bucketing, no floats, so the result is identical across runs for the same
/// byte content. Equal counts are ordered by ascending packed RGBA key
/// (lexicographic r, g, b, a): the map iterates in ascending key order and
/// the sort is stable.
pub fn build_histogram(pixels: &[RGBA<u8>]) -> Vec<ColorCount> {
    let mut buckets: BTreeMap<u32, u64> = BTreeMap::new();

    for p in pixels {
        *buckets.entry(pack(*p)).or_insert(0) += 1;
    }

    let mut counts: Vec<ColorCount> = buckets
        .into_iter()
        .map(|(key, count)| ColorCount {
            color: unpack(key),
            count,
        })
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
