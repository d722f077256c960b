use rgb::RGBA;

use crate::color::within_tolerance;
use crate::histogram::ColorCount;

/// A cluster of near-identical colors: the representative color, the exact
/// aggregate pixel count, and that count's share of all pixels.
///
/// The representative is the exact color that founded the cluster — the
/// highest-count color not absorbed by an earlier cluster. It is never
/// recomputed as a centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRatio {
    pub color: RGBA<u8>,
    pub count: u64,
    pub ratio: f32,
}

/// Greedily merge a descending-count histogram into tolerance clusters.
///
/// Each entry is matched against existing clusters in creation order; the
/// first representative within tolerance absorbs its count (no best-match
/// search). Entries with no match open a new cluster. Because the similarity
/// predicate is not transitive, this is order-dependent by design: dominant
/// colors claim their neighborhoods first.
///
/// The output is re-sorted by descending aggregate count — merging can
/// promote a cluster past ones created before it. The sort is stable, so
/// clusters with equal counts keep creation order, which itself derives
/// from the histogram's packed-key tie-break.
///
/// Counts accumulate as exact integers; ratios are computed by a single
/// division at the end. An empty histogram yields an empty cluster list.
pub fn reduce(counts: &[ColorCount], tolerance: u8) -> Vec<ColorRatio> {
    let total: u64 = counts.iter().map(|c| c.count).sum();

    let mut clusters: Vec<ColorCount> = Vec::new();
    for item in counts {
        match clusters
            .iter_mut()
            .find(|c| within_tolerance(c.color, item.color, tolerance))
        {
            Some(cluster) => cluster.count += item.count,
            None => clusters.push(*item),
        }
    }

    clusters.sort_by(|a, b| b.count.cmp(&a.count));

    clusters
        .into_iter()
        .map(|c| ColorRatio {
            color: c.color,
            count: c.count,
            ratio: c.count as f32 / total as f32,
        })
        .collect()
}
