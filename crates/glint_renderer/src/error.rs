//! Errors reported by the renderer.

use thiserror::Error;

/// Errors that can occur while setting up or exporting a render.
///
/// Shading itself never fails; these cover invalid frame, camera or
/// worker-pool state detected before any pixel is traced.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid resolution {width}x{height}: both dimensions must be non-zero")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Invalid bucket size: rows per bucket must be non-zero")]
    InvalidBucketSize,

    #[error("Degenerate camera: {0}")]
    DegenerateCamera(String),

    #[error("Invalid field of view {0} degrees: must be within (0, 180)")]
    InvalidFieldOfView(f64),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;
