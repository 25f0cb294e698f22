//! Parallel frame renderer.
//!
//! Every pixel is independent: the scene and camera are only read, and each
//! worker writes a disjoint band of the framebuffer. The output therefore
//! does not depend on thread count or bucket size.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread::{self, Thread};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, DEFAULT_ROWS_PER_BUCKET};
use crate::framebuffer::pack_argb;
use crate::{Camera, Framebuffer, RenderError, RenderResult, Scene, Viewport};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Worker threads; `None` (or 0) uses one per logical CPU
    pub threads: Option<usize>,
    /// Rows handed to a worker at a time
    pub rows_per_bucket: u32,
    /// Log progress from a reporter thread while rendering
    pub report_progress: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            threads: None,
            rows_per_bucket: DEFAULT_ROWS_PER_BUCKET,
            report_progress: true,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the worker thread count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Set the number of rows per bucket.
    pub fn with_rows_per_bucket(mut self, rows: u32) -> Self {
        self.rows_per_bucket = rows;
        self
    }

    /// Enable or disable progress logging.
    pub fn with_progress(mut self, report: bool) -> Self {
        self.report_progress = report;
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.rows_per_bucket == 0 {
            return Err(RenderError::InvalidBucketSize);
        }
        Ok(())
    }
}

/// Timing of a finished render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    pub elapsed: Duration,
    /// One primary ray per pixel
    pub primary_rays: u64,
    pub threads: usize,
}

impl RenderStats {
    /// Primary rays traced per second.
    pub fn rays_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.primary_rays as f64 / secs
        } else {
            0.0
        }
    }
}

/// Map pixel `(x, y)` (y = 0 at the top) to image-plane coordinates.
///
/// `s` runs left to right and `t` bottom to top, so the top row maps to
/// `t = 1`. A dimension of one pixel maps to the center of the plane.
#[inline]
pub fn pixel_coordinates(x: u32, y: u32, width: u32, height: u32) -> (f64, f64) {
    let s = if width > 1 {
        x as f64 / (width - 1) as f64
    } else {
        0.5
    };
    let t = if height > 1 {
        (height - 1 - y) as f64 / (height - 1) as f64
    } else {
        0.5
    };
    (s, t)
}

/// Trace a single pixel and return it packed as `0xFFRRGGBB`.
pub fn render_pixel(
    viewport: &Viewport,
    scene: &Scene,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> u32 {
    let (s, t) = pixel_coordinates(x, y, width, height);
    let ray = viewport.get_ray(s, t);
    pack_argb(scene.trace(&ray, 0))
}

/// Render the scene to a framebuffer.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> RenderResult<Framebuffer> {
    render_with_stats(scene, camera, config).map(|(framebuffer, _)| framebuffer)
}

/// Render the scene and report how long it took.
pub fn render_with_stats(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
) -> RenderResult<(Framebuffer, RenderStats)> {
    config.validate()?;
    camera.validate()?;

    let (width, height) = (config.width, config.height);
    let viewport = camera.viewport(config.aspect_ratio());
    let buckets = generate_buckets(height, config.rows_per_bucket);
    let stride = width as usize * config.rows_per_bucket as usize;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.unwrap_or(0))
        .build()
        .map_err(|e| RenderError::ThreadPool(e.to_string()))?;
    let threads = pool.current_num_threads();

    log::info!(
        "Rendering {}x{} ({} spheres, {} lights) with {} threads, {} rows per bucket",
        width,
        height,
        scene.sphere_count(),
        scene.light_count(),
        threads,
        config.rows_per_bucket
    );

    let mut framebuffer = Framebuffer::new(width, height);
    let rows_done = AtomicUsize::new(0);
    let finished = AtomicBool::new(false);
    let start = Instant::now();

    thread::scope(|s| {
        let reporter = config
            .report_progress
            .then(|| s.spawn(|| report_progress(&rows_done, &finished, height as usize)));
        // Stops the reporter even if a worker panics
        let _finish = FinishGuard {
            finished: &finished,
            reporter: reporter.as_ref().map(|r| r.thread().clone()),
        };

        pool.install(|| {
            framebuffer
                .pixels_mut()
                .par_chunks_mut(stride)
                .zip(buckets.par_iter())
                .for_each(|(out, bucket)| {
                    render_bucket(bucket, &viewport, scene, width, height, out);
                    rows_done.fetch_add(bucket.height as usize, Ordering::Relaxed);
                });
        });
    });

    let stats = RenderStats {
        elapsed: start.elapsed(),
        primary_rays: width as u64 * height as u64,
        threads,
    };

    log::info!(
        "Render time: {:.3} seconds ({:.2} Mrays/sec)",
        stats.elapsed.as_secs_f64(),
        stats.rays_per_second() / 1_000_000.0
    );

    Ok((framebuffer, stats))
}

/// Sets `finished` and wakes the reporter when dropped.
struct FinishGuard<'a> {
    finished: &'a AtomicBool,
    reporter: Option<Thread>,
}

impl Drop for FinishGuard<'_> {
    fn drop(&mut self) {
        self.finished.store(true, Ordering::Release);
        if let Some(reporter) = &self.reporter {
            reporter.unpark();
        }
    }
}

/// Log completion in 10% steps until `finished` is set.
///
/// Runs on its own thread; the workers only bump `rows_done`.
fn report_progress(rows_done: &AtomicUsize, finished: &AtomicBool, total_rows: usize) {
    let mut last_step = 0;
    while !finished.load(Ordering::Acquire) {
        let step = rows_done.load(Ordering::Relaxed) * 10 / total_rows;
        if step > last_step {
            log::info!("Progress: {}%", step * 10);
            last_step = step;
        }
        thread::park_timeout(Duration::from_millis(100));
    }
    log::info!("Progress: 100% - Done!");
}
