use rgb::RGBA;

use crate::cluster::ColorRatio;
use crate::color::within_tolerance;

/// Replace every pixel with the representative of the first cluster it
/// matches, returning a freshly allocated buffer.
///
/// The cluster list is scanned in its given (ratio-descending) order with
/// the same tolerance used to build it, so dominant clusters claim pixels
/// first — mirroring the reducer's greedy policy. A pixel matching no
/// cluster keeps its original value; that cannot happen when the clusters
/// came from the same buffer and tolerance, since every exact color was
/// absorbed by some cluster whose representative is within tolerance of it.
///
/// O(pixels × clusters). Cheap after aggressive clustering, but at
/// tolerance 0 on colorful images the cluster list is the full distinct
/// color set and this stage dominates the runtime.
pub fn remap_pixels(pixels: &[RGBA<u8>], clusters: &[ColorRatio], tolerance: u8) -> Vec<RGBA<u8>> {
    let mut out = pixels.to_vec();

    for px in &mut out {
        if let Some(cluster) = clusters
            .iter()
            .find(|c| within_tolerance(c.color, *px, tolerance))
        {
            *px = cluster.color;
        }
    }

    out
}
