//! Point light source.

use crate::Color;
use glint_math::Vec3;

/// An isotropic point light.
///
/// Lights have no falloff; `intensity` scales both the diffuse and the
/// specular contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f64,
}

impl Light {
    /// Create a new light. Negative intensities are clamped to zero.
    pub fn new(position: Vec3, color: Color, intensity: f64) -> Self {
        Self {
            position,
            color,
            intensity: intensity.max(0.0),
        }
    }
}
