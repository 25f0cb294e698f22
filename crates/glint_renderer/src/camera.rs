//! Pinhole camera for primary ray generation.

use crate::{RenderError, RenderResult};
use glint_math::{normalize, Ray, Vec3};

/// Pinhole camera described by a look-from/look-at pair.
///
/// `up` must not be parallel to `position - target`; [`Camera::validate`]
/// checks this and `render` calls it before tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov: f64,
}

impl Camera {
    /// Create a camera with +Y up and a 60 degree field of view.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov: 60.0,
        }
    }

    /// Set the up vector.
    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    /// Check that the camera spans a usable basis.
    pub fn validate(&self) -> RenderResult<()> {
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(RenderError::InvalidFieldOfView(self.fov));
        }

        if !(self.position.is_finite() && self.target.is_finite() && self.up.is_finite()) {
            return Err(RenderError::DegenerateCamera(format!(
                "non-finite position {:?}, target {:?} or up {:?}",
                self.position, self.target, self.up
            )));
        }

        let view = self.position - self.target;
        if view.length_squared() == 0.0 {
            return Err(RenderError::DegenerateCamera(format!(
                "position and target coincide at {:?}",
                self.position
            )));
        }

        let side = self.up.cross(view);
        if side.length() <= 1e-12 * self.up.length() * view.length() {
            return Err(RenderError::DegenerateCamera(format!(
                "up {:?} is parallel to the view direction {:?}",
                self.up, -view
            )));
        }

        Ok(())
    }

    /// Build the image plane for a given width/height ratio.
    ///
    /// The plane sits one unit in front of the camera.
    pub fn viewport(&self, aspect_ratio: f64) -> Viewport {
        let h = (self.fov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        // Orthonormal basis
        let w = normalize(self.position - self.target);
        let u = normalize(self.up.cross(w));
        let v = w.cross(u);

        let horizontal = u * viewport_width;
        let vertical = v * viewport_height;
        let lower_left = self.position - horizontal / 2.0 - vertical / 2.0 - w;

        Viewport {
            origin: self.position,
            lower_left,
            horizontal,
            vertical,
        }
    }

    /// Generate the ray through normalized image coordinates `(s, t)`.
    ///
    /// `s` runs left to right and `t` bottom to top, both in [0, 1].
    pub fn get_ray(&self, s: f64, t: f64, aspect_ratio: f64) -> Ray {
        self.viewport(aspect_ratio).get_ray(s, t)
    }
}

/// Image plane of a camera at a fixed aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    origin: Vec3,
    lower_left: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Viewport {
    /// Generate the ray through normalized image coordinates `(s, t)`.
    #[inline]
    pub fn get_ray(&self, s: f64, t: f64) -> Ray {
        let direction = self.lower_left + self.horizontal * s + self.vertical * t - self.origin;
        Ray::new(self.origin, direction)
    }
}
