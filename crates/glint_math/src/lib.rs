//! Glint math - vector, ray and interval types for the ray tracer.
//!
//! Vectors are double precision. `Vec3` is an alias of `glam::DVec3`, so the
//! usual arithmetic, `dot`, `cross`, `length` and `length_squared` come from
//! glam; this crate adds the two operations whose edge cases the renderer
//! depends on: [`normalize`] and [`reflect`].

pub use glam::{dvec3, DVec3};

/// 3-component double precision vector.
pub type Vec3 = DVec3;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// Normalize a vector.
///
/// A zero-length vector normalizes to the zero vector instead of NaN.
/// Callers that need a direction must treat zero as "no direction".
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = v.length();
    if len > 0.0 {
        v / len
    } else {
        Vec3::ZERO
    }
}

/// Reflect `v` about the normal `n`: `v - 2 (v . n) n`.
///
/// `n` is expected to be unit length; the length of `v` is then preserved.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
