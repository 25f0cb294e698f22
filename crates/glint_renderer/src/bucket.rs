//! Row-band buckets for parallel rendering.
//!
//! The image is split into horizontal bands of whole rows. Each band maps
//! to one contiguous slice of the framebuffer, so bands can be rendered on
//! different threads without sharing any output memory.

use crate::renderer::render_pixel;
use crate::{Scene, Viewport};

/// A band of consecutive rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// First row of the band (0 = top)
    pub y: u32,
    /// Number of rows in the band
    pub height: u32,
    /// Position of this bucket in top-to-bottom order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(y: u32, height: u32, index: usize) -> Self {
        Self { y, height, index }
    }

    /// Number of pixels in this bucket for an image of the given width.
    pub fn pixel_count(&self, width: u32) -> usize {
        self.height as usize * width as usize
    }

    /// Rows covered by this bucket.
    pub fn rows(&self) -> std::ops::Range<u32> {
        self.y..self.y + self.height
    }
}

/// Default rows per bucket: one scanline per task.
pub const DEFAULT_ROWS_PER_BUCKET: u32 = 1;

/// Split `height` rows into bands of `rows_per_bucket` rows.
///
/// Bands are returned top to bottom, do not overlap, and cover every row
/// exactly once; the last band may be shorter. Returns no buckets if
/// `rows_per_bucket` is zero.
pub fn generate_buckets(height: u32, rows_per_bucket: u32) -> Vec<Bucket> {
    if rows_per_bucket == 0 {
        return Vec::new();
    }

    let mut buckets = Vec::with_capacity(height.div_ceil(rows_per_bucket) as usize);
    let mut y = 0;
    while y < height {
        let rows = rows_per_bucket.min(height - y);
        buckets.push(Bucket::new(y, rows, buckets.len()));
        y += rows;
    }

    buckets
}

/// Render one bucket into `out`, its slice of the framebuffer.
///
/// `out` holds `bucket.height` rows of `width` packed pixels.
pub fn render_bucket(
    bucket: &Bucket,
    viewport: &Viewport,
    scene: &Scene,
    width: u32,
    height: u32,
    out: &mut [u32],
) {
    debug_assert_eq!(out.len(), bucket.pixel_count(width));

    for (row, y) in out.chunks_exact_mut(width as usize).zip(bucket.rows()) {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = render_pixel(viewport, scene, x as u32, y, width, height);
        }
    }
}
