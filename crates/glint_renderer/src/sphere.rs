//! Sphere primitive for ray tracing.

use crate::fixed::{intersect_fixed, FixedSphereQuery, IntersectionBackend};
use crate::Material;
use glint_math::{normalize, Interval, Ray, Vec3};

/// A sphere primitive owning its own copy of a material.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// A non-positive (or NaN) radius is accepted but never intersects.
    pub fn new(center: Vec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// True if the radius is positive. Other spheres are never hit.
    pub fn is_valid(&self) -> bool {
        self.radius > 0.0
    }

    /// Intersect with the analytic solver.
    ///
    /// The ray direction is unit length, so `a = 1` and the half-b form
    /// reduces to `b_half^2 - c`. Returns the nearer root strictly inside
    /// `ray_t`, else the farther one, else `None`.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        if !self.is_valid() {
            return None;
        }

        let oc = ray.origin() - self.center;
        let b_half = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b_half * b_half - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        let root = -b_half - sqrtd;
        if ray_t.surrounds(root) {
            return Some(root);
        }

        let root = -b_half + sqrtd;
        if ray_t.surrounds(root) {
            return Some(root);
        }

        None
    }

    /// Intersect using the selected backend.
    pub fn hit_with(&self, ray: &Ray, ray_t: Interval, backend: IntersectionBackend) -> Option<f64> {
        match backend {
            IntersectionBackend::Analytic => self.hit(ray, ray_t),
            IntersectionBackend::FixedPoint => {
                if !self.is_valid() {
                    return None;
                }
                let query = FixedSphereQuery::encode(ray, self.center, self.radius)?;
                let t = intersect_fixed(&query)?.to_f64();
                ray_t.surrounds(t).then_some(t)
            }
        }
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        normalize(point - self.center)
    }
}
