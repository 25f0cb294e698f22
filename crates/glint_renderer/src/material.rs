//! Phong surface description.

use glint_math::{Interval, Vec3};

/// Color type alias (RGB, nominally 0-1 but unclamped during shading)
pub type Color = Vec3;

/// Per-surface color and Phong coefficients.
///
/// The coefficients are descriptive weights and are not normalized against
/// each other. `reflectivity` blends the mirrored color with the local color
/// rather than adding to it (see [`Material::blend_reflection`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base surface color
    pub color: Color,
    /// Ambient weight, applied regardless of lights or shadows
    pub ambient: f64,
    /// Lambertian diffuse weight
    pub diffuse: f64,
    /// Specular highlight weight
    pub specular: f64,
    /// Phong exponent (> 0); larger means a tighter highlight
    pub shininess: f64,
    /// Mirror weight in [0, 1]
    pub reflectivity: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::ONE,
            ambient: 0.1,
            diffuse: 0.7,
            specular: 0.6,
            shininess: 32.0,
            reflectivity: 0.3,
        }
    }
}

impl Material {
    /// Create a new material from all of its coefficients.
    ///
    /// Weights and `reflectivity` are clamped to [0, 1]. A non-positive
    /// `shininess` becomes the smallest positive value.
    pub fn new(
        color: Color,
        ambient: f64,
        diffuse: f64,
        specular: f64,
        shininess: f64,
        reflectivity: f64,
    ) -> Self {
        Self {
            color,
            ambient: Interval::UNIT.clamp(ambient),
            diffuse: Interval::UNIT.clamp(diffuse),
            specular: Interval::UNIT.clamp(specular),
            shininess: if shininess > 0.0 {
                shininess
            } else {
                f64::MIN_POSITIVE
            },
            reflectivity: Interval::UNIT.clamp(reflectivity),
        }
    }

    /// Create a material with the given color and default coefficients.
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set the reflectivity, clamped to [0, 1].
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = Interval::UNIT.clamp(reflectivity);
        self
    }

    /// True if the surface spawns reflection rays.
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }

    /// Ambient term: `color * ambient`.
    #[inline]
    pub fn ambient_term(&self) -> Color {
        self.color * self.ambient
    }

    /// Lambertian term for one unoccluded light.
    ///
    /// `n_dot_l` is the cosine between the surface normal and the light
    /// direction; back-facing light contributes nothing.
    #[inline]
    pub fn diffuse_term(&self, n_dot_l: f64, intensity: f64) -> Color {
        self.color * self.diffuse * n_dot_l.max(0.0) * intensity
    }

    /// Phong specular term for one unoccluded light.
    ///
    /// `v_dot_r` is the cosine between the view direction and the mirrored
    /// light direction. The highlight takes the light's color.
    #[inline]
    pub fn specular_term(&self, v_dot_r: f64, light_color: Color, intensity: f64) -> Color {
        let spec = v_dot_r.max(0.0).powf(self.shininess);
        light_color * self.specular * spec * intensity
    }

    /// Energy-conserving reflection blend:
    /// `local * (1 - reflectivity) + reflected * reflectivity`.
    ///
    /// With both inputs in [0, 1] per channel the result stays in [0, 1].
    #[inline]
    pub fn blend_reflection(&self, local: Color, reflected: Color) -> Color {
        local * (1.0 - self.reflectivity) + reflected * self.reflectivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_unit_color(rng: &mut StdRng) -> Color {
        Color::new(rng.gen(), rng.gen(), rng.gen())
    }

    #[test]
    fn test_material_defaults() {
        let m = Material::default();
        assert_eq!(m.color, Color::ONE);
        assert_eq!(m.ambient, 0.1);
        assert_eq!(m.diffuse, 0.7);
        assert_eq!(m.specular, 0.6);
        assert_eq!(m.shininess, 32.0);
        assert_eq!(m.reflectivity, 0.3);
        assert!(m.is_reflective());
        assert!(!m.with_reflectivity(0.0).is_reflective());
    }

    #[test]
    fn test_diffuse_term_back_facing() {
        let m = Material::with_color(Color::new(1.0, 0.5, 0.0));
        assert_eq!(m.diffuse_term(-0.5, 1.0), Color::ZERO);
        assert_eq!(m.diffuse_term(1.0, 2.0), Color::new(1.4, 0.7, 0.0));
    }

    #[test]
    fn test_specular_term_uses_light_color() {
        let m = Material::new(Color::ZERO, 0.0, 0.0, 0.5, 8.0, 0.0);
        let light = Color::new(1.0, 0.0, 0.5);

        assert_eq!(m.specular_term(1.0, light, 1.0), Color::new(0.5, 0.0, 0.25));
        assert_eq!(m.specular_term(-1.0, light, 1.0), Color::ZERO);
        // 0.5^8
        let s = m.specular_term(0.5, Color::ONE, 1.0);
        assert!((s.x - 0.5 * 0.5f64.powi(8)).abs() < 1e-12);
    }

    #[test]
    fn test_blend_stays_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let m = Material::default().with_reflectivity(rng.gen_range(0.0..=1.0));
            let blended = m.blend_reflection(random_unit_color(&mut rng), random_unit_color(&mut rng));

            for c in blended.to_array() {
                assert!((0.0..=1.0).contains(&c), "channel {} out of range", c);
            }
        }
    }

    #[test]
    fn test_out_of_range_coefficients_clamped() {
        let m = Material::new(Color::ONE, -0.5, 1.5, 2.0, 0.0, 1.7);
        assert_eq!(m.ambient, 0.0);
        assert_eq!(m.diffuse, 1.0);
        assert_eq!(m.specular, 1.0);
        assert!(m.shininess > 0.0);
        assert_eq!(m.reflectivity, 1.0);

        assert_eq!(Material::default().with_reflectivity(-3.0).reflectivity, 0.0);
        assert_eq!(Material::new(Color::ONE, 0.1, 0.7, 0.6, f64::NAN, 0.3).shininess, f64::MIN_POSITIVE);

        // Over-range reflectivity can no longer push the blend past 1
        let blended = m.blend_reflection(Color::ONE, Color::ONE);
        assert_eq!(blended, Color::ONE);
    }

    #[test]
    fn test_blend_endpoints() {
        let local = Color::new(0.2, 0.4, 0.6);
        let reflected = Color::new(1.0, 0.0, 0.5);

        assert_eq!(Material::default().with_reflectivity(0.0).blend_reflection(local, reflected), local);
        assert_eq!(Material::default().with_reflectivity(1.0).blend_reflection(local, reflected), reflected);
    }
}
