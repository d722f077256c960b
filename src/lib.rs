//! Color-ratio analysis for RGBA pixel buffers.
//!
//! Scans a decoded pixel buffer once into an exact per-color histogram,
//! greedily merges near-identical colors under a channel-wise tolerance,
//! and reports each cluster's share of the image. The cluster list can
//! also be rendered back over the buffer to preview the quantization.
//!
//! The engine is synchronous and allocation-only: it never mutates caller
//! buffers, holds no shared state, and is safe to run on any worker thread.
//! Decoding bytes into an image and re-encoding the rendered buffer are the
//! host's concern.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod color;
pub mod error;
pub mod histogram;
pub mod remap;

pub use cluster::ColorRatio;
pub use color::within_tolerance;
pub use error::AnalyzeError;
pub use histogram::ColorCount;

use std::time::{Duration, Instant};

use rgb::{ComponentBytes, FromSlice, RGBA};

/// Bytes per pixel in the raw buffer layout (R, G, B, A).
pub const PIXEL_STRIDE: usize = 4;

/// The outcome of one analysis: tolerance clusters ordered by descending
/// ratio, plus the tolerance used and how long histogram+reduce took.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    clusters: Vec<ColorRatio>,
    tolerance: u8,
    total_pixels: u64,
    duration: Duration,
}

impl AnalysisResult {
    /// Clusters in descending-ratio order. Ratios are f32; exact shares are
    /// available as `ColorRatio::count` over [`total_pixels`](Self::total_pixels).
    pub fn color_ratios(&self) -> &[ColorRatio] {
        &self.clusters
    }

    pub fn cluster_len(&self) -> usize {
        self.clusters.len()
    }

    /// The tolerance the clusters were built with.
    pub fn tolerance(&self) -> u8 {
        self.tolerance
    }

    pub fn total_pixels(&self) -> u64 {
        self.total_pixels
    }

    /// Wall-clock time of the histogram and cluster stages.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Analyze a pixel buffer: exact histogram, then tolerance clustering.
///
/// `pixels.len()` must equal `width * height`. A zero-pixel buffer is legal
/// and yields an empty cluster list.
pub fn analyze(
    pixels: &[RGBA<u8>],
    width: usize,
    height: usize,
    tolerance: u8,
) -> Result<AnalysisResult, AnalyzeError> {
    validate_dimensions(pixels.len(), width, height)?;

    let start = Instant::now();
    let counts = histogram::build_histogram(pixels);
    let clusters = cluster::reduce(&counts, tolerance);
    let duration = start.elapsed();

    Ok(AnalysisResult {
        clusters,
        tolerance,
        total_pixels: pixels.len() as u64,
        duration,
    })
}

/// Analyze a raw byte buffer in R,G,B,A order at 4 bytes per pixel.
///
/// The byte length must be a multiple of [`PIXEL_STRIDE`] and the resulting
/// pixel count must match `width * height`.
pub fn analyze_bytes(
    bytes: &[u8],
    width: usize,
    height: usize,
    tolerance: u8,
) -> Result<AnalysisResult, AnalyzeError> {
    analyze(cast_pixels(bytes, width, height)?, width, height, tolerance)
}

/// Render the quantization preview: every pixel snaps to the representative
/// of the first cluster it matches at the result's tolerance.
///
/// Returns a freshly allocated buffer of identical shape; the input is never
/// mutated. Pixels matching no cluster (possible only when `result` came
/// from a different buffer) keep their original value.
pub fn render(
    pixels: &[RGBA<u8>],
    width: usize,
    height: usize,
    result: &AnalysisResult,
) -> Result<Vec<RGBA<u8>>, AnalyzeError> {
    validate_dimensions(pixels.len(), width, height)?;
    Ok(remap::remap_pixels(
        pixels,
        &result.clusters,
        result.tolerance,
    ))
}

/// Byte-level counterpart of [`render`]; the output buffer has the same
/// length and R,G,B,A layout as the input and is safe to hand back to any
/// image encoder.
pub fn render_bytes(
    bytes: &[u8],
    width: usize,
    height: usize,
    result: &AnalysisResult,
) -> Result<Vec<u8>, AnalyzeError> {
    let pixels = cast_pixels(bytes, width, height)?;
    let out = remap::remap_pixels(pixels, &result.clusters, result.tolerance);
    Ok(out.as_bytes().to_vec())
}

fn cast_pixels(bytes: &[u8], width: usize, height: usize) -> Result<&[RGBA<u8>], AnalyzeError> {
    if bytes.len() % PIXEL_STRIDE != 0 {
        return Err(AnalyzeError::RaggedBuffer {
            len: bytes.len(),
            stride: PIXEL_STRIDE,
        });
    }
    let pixels = bytes.as_rgba();
    validate_dimensions(pixels.len(), width, height)?;
    Ok(pixels)
}

fn validate_dimensions(
    pixel_count: usize,
    width: usize,
    height: usize,
) -> Result<(), AnalyzeError> {
    if pixel_count != width * height {
        return Err(AnalyzeError::DimensionMismatch {
            len: pixel_count,
            width,
            height,
        });
    }
    Ok(())
}
