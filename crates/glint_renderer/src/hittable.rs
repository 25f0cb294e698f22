//! Closest-hit record.

use crate::Sphere;
use glint_math::{Ray, Vec3};

/// Record of the nearest ray-sphere intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection
    pub p: Vec3,
    /// Outward surface normal at the intersection
    pub normal: Vec3,
    /// Index of the sphere in the scene
    pub index: usize,
    /// The sphere that was hit
    pub sphere: &'a Sphere,
}

impl<'a> HitRecord<'a> {
    /// Build a record for `sphere` hit by `ray` at `t`.
    ///
    /// The normal always points out of the sphere, even when the ray
    /// starts inside it.
    pub fn new(ray: &Ray, t: f64, index: usize, sphere: &'a Sphere) -> Self {
        let p = ray.at(t);
        Self {
            t,
            p,
            normal: sphere.normal_at(p),
            index,
            sphere,
        }
    }
}
