//! Scene container and recursive Whitted shading.
//!
//! A scene is built once through [`Scene::add_sphere`] / [`Scene::add_light`]
//! and then only read. All queries take `&self`, so one scene can be shared
//! by every render worker without locking.

use crate::fixed::IntersectionBackend;
use crate::{Color, HitRecord, Light, Material, Sphere};
use glint_math::{normalize, reflect, Interval, Ray, Vec3};

/// Maximum reflection depth. Rays at a greater depth return the background.
pub const MAX_DEPTH: u32 = 3;

/// Minimum accepted hit distance, rejects self-intersection at a ray origin.
pub const HIT_EPSILON: f64 = 0.001;

/// Background color of a new scene.
pub const DEFAULT_BACKGROUND: Color = Color::new(0.1, 0.1, 0.15);

/// Spheres, lights and a background color.
#[derive(Debug, Clone)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    background: Color,
    backend: IntersectionBackend,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
            background: DEFAULT_BACKGROUND,
            backend: IntersectionBackend::default(),
        }
    }
}

impl Scene {
    /// Create an empty scene with the default background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the intersection backend.
    pub fn with_backend(mut self, backend: IntersectionBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Add a sphere and return its index.
    pub fn add_sphere(&mut self, center: Vec3, radius: f64, material: Material) -> usize {
        let index = self.spheres.len();
        self.spheres.push(Sphere::new(center, radius, material));
        index
    }

    /// Add a point light.
    pub fn add_light(&mut self, position: Vec3, color: Color, intensity: f64) {
        self.lights.push(Light::new(position, color, intensity));
    }

    /// Set the color returned for rays that escape the scene.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn backend(&self) -> IntersectionBackend {
        self.backend
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Find the nearest sphere hit beyond [`HIT_EPSILON`].
    ///
    /// Linear scan over every sphere.
    pub fn closest_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let mut closest: Option<(f64, usize)> = None;
        let mut closest_so_far = f64::INFINITY;

        for (index, sphere) in self.spheres.iter().enumerate() {
            let interval = Interval::new(HIT_EPSILON, closest_so_far);
            if let Some(t) = sphere.hit_with(ray, interval, self.backend) {
                closest_so_far = t;
                closest = Some((t, index));
            }
        }

        closest.map(|(t, index)| HitRecord::new(ray, t, index, &self.spheres[index]))
    }

    /// True if any sphere is hit strictly between [`HIT_EPSILON`] and
    /// `max_distance`. Stops at the first such hit.
    pub fn occluded(&self, ray: &Ray, max_distance: f64) -> bool {
        let interval = Interval::new(HIT_EPSILON, max_distance);
        self.spheres
            .iter()
            .any(|sphere| sphere.hit_with(ray, interval, self.backend).is_some())
    }

    /// Compute the color seen along `ray`.
    ///
    /// Phong shading with hard shadows at the nearest hit, plus one
    /// reflection bounce per level while `depth < MAX_DEPTH`. The result is
    /// not clamped.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        if depth > MAX_DEPTH {
            return self.background;
        }

        let Some(rec) = self.closest_hit(ray) else {
            return self.background;
        };

        let material = rec.sphere.material();
        let view_dir = normalize(ray.origin() - rec.p);

        let mut color = material.ambient_term();

        for light in &self.lights {
            let to_light = light.position - rec.p;
            let light_distance = to_light.length();
            let light_dir = normalize(to_light);

            if self.occluded(&Ray::new(rec.p, light_dir), light_distance) {
                continue;
            }

            let reflect_dir = reflect(-light_dir, rec.normal);
            color += material.diffuse_term(rec.normal.dot(light_dir), light.intensity);
            color += material.specular_term(view_dir.dot(reflect_dir), light.color, light.intensity);
        }

        if material.is_reflective() && depth < MAX_DEPTH {
            let reflected_ray = Ray::new(rec.p, reflect(-view_dir, rec.normal));
            let reflected = self.trace(&reflected_ray, depth + 1);
            color = material.blend_reflection(color, reflected);
        }

        color
    }
}
