//! Glint renderer - CPU Whitted-style ray tracing.
//!
//! Spheres, point lights and a pinhole camera, shaded with Phong local
//! illumination, hard shadows and depth-bounded mirror reflection. Frames
//! are rendered in parallel across row buckets with rayon and returned as a
//! packed ARGB [`Framebuffer`] for a display to present.

mod bucket;
mod camera;
mod error;
pub mod fixed;
mod framebuffer;
mod hittable;
mod light;
mod material;
mod renderer;
mod scene;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, DEFAULT_ROWS_PER_BUCKET};
pub use camera::{Camera, Viewport};
pub use error::{RenderError, RenderResult};
pub use fixed::IntersectionBackend;
pub use framebuffer::{clamp_color, pack_argb, quantize_channel, Framebuffer};
pub use hittable::HitRecord;
pub use light::Light;
pub use material::{Color, Material};
pub use renderer::{
    pixel_coordinates, render, render_pixel, render_with_stats, RenderConfig, RenderStats,
};
pub use scene::{Scene, DEFAULT_BACKGROUND, HIT_EPSILON, MAX_DEPTH};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};
