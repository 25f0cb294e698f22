//! Q16.16 fixed-point ray-sphere intersection.
//!
//! Alternate intersection backend mirroring a hardware datapath: every
//! input is an `i32` holding `value * 65536`, and the result is a hit flag
//! plus a distance in the same encoding. Intermediates are widened to
//! `i128` so products of two full-range inputs cannot overflow.
//!
//! Results agree with the analytic `f64` solver to within 0.01 absolute or
//! 1% relative, whichever is larger, for coordinates below about 100.
//! Inputs that cannot be encoded are reported as misses.

use glint_math::{Interval, Ray, Vec3};

/// Number of fractional bits.
pub const FRAC_BITS: u32 = 16;

/// Scale between real values and their raw encoding (2^16).
pub const SCALE: f64 = (1u32 << FRAC_BITS) as f64;

/// Real values representable without overflowing the `i32` encoding.
const REPRESENTABLE: Interval = Interval::new(i32::MIN as f64 / SCALE, i32::MAX as f64 / SCALE);

/// Which solver `Sphere::hit_with` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntersectionBackend {
    /// Double-precision analytic solver.
    #[default]
    Analytic,
    /// Q16.16 fixed-point solver ([`intersect_fixed`]).
    FixedPoint,
}

/// A Q16.16 fixed-point number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(1 << FRAC_BITS);

    /// Self-intersection bias, 0.001 truncated to the encoding.
    pub const EPSILON: Fixed = Fixed((0.001 * SCALE) as i32);

    /// Wrap a raw encoded value.
    pub const fn from_raw(raw: i32) -> Self {
        Fixed(raw)
    }

    /// Encode a real value, truncating toward zero.
    ///
    /// Returns `None` for NaN, infinities and out-of-range values.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || !REPRESENTABLE.contains(value) {
            return None;
        }
        Some(Fixed((value * SCALE) as i32))
    }

    /// The raw encoded value.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Decode to a real value.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE
    }

    fn wide(self) -> i128 {
        self.0 as i128
    }

    fn from_wide(raw: i128) -> Option<Self> {
        i32::try_from(raw).ok().map(Fixed)
    }
}

/// A fixed-point 3-vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedVec3 {
    pub x: Fixed,
    pub y: Fixed,
    pub z: Fixed,
}

impl FixedVec3 {
    /// Encode a vector, failing if any component is not representable.
    pub fn from_vec3(v: Vec3) -> Option<Self> {
        Some(Self {
            x: Fixed::from_f64(v.x)?,
            y: Fixed::from_f64(v.y)?,
            z: Fixed::from_f64(v.z)?,
        })
    }

    fn wide(self) -> [i128; 3] {
        [self.x.wide(), self.y.wide(), self.z.wide()]
    }
}

/// Inputs of one fixed-point intersection test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSphereQuery {
    pub origin: FixedVec3,
    pub direction: FixedVec3,
    pub center: FixedVec3,
    pub radius_squared: Fixed,
}

impl FixedSphereQuery {
    /// Encode a ray and a sphere.
    ///
    /// Returns `None` if any value falls outside the Q16.16 range.
    pub fn encode(ray: &Ray, center: Vec3, radius: f64) -> Option<Self> {
        Some(Self {
            origin: FixedVec3::from_vec3(ray.origin())?,
            direction: FixedVec3::from_vec3(ray.direction())?,
            center: FixedVec3::from_vec3(center)?,
            radius_squared: Fixed::from_f64(radius * radius)?,
        })
    }
}

/// Dot product of two Q16.16 vectors, result in Q32.32.
fn dot_wide(a: [i128; 3], b: [i128; 3]) -> i128 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Intersect a ray with a sphere in fixed point.
///
/// Solves `a t^2 + 2 b t + c = 0` with `a = d.d`, `b = (o - c).d` and
/// `c = |o - c|^2 - r^2`, so the direction does not need to be unit
/// length. Returns the smaller root above [`Fixed::EPSILON`], else the
/// larger one, else `None`.
pub fn intersect_fixed(query: &FixedSphereQuery) -> Option<Fixed> {
    if query.radius_squared <= Fixed::ZERO {
        return None;
    }

    let o = query.origin.wide();
    let c = query.center.wide();
    let d = query.direction.wide();
    let oc = [o[0] - c[0], o[1] - c[1], o[2] - c[2]];

    // Q16.16
    let a = dot_wide(d, d) >> FRAC_BITS;
    if a <= 0 {
        return None;
    }
    let b_half = dot_wide(oc, d) >> FRAC_BITS;
    let c_term = (dot_wide(oc, oc) >> FRAC_BITS) - query.radius_squared.wide();

    // Q32.32
    let discriminant = b_half * b_half - a * c_term;
    if discriminant < 0 {
        return None;
    }

    // sqrt of a Q32.32 value is Q16.16
    let sqrt_disc = (discriminant as u128).isqrt() as i128;

    let t1 = ((-b_half - sqrt_disc) << FRAC_BITS) / a;
    if t1 > Fixed::EPSILON.wide() {
        return Fixed::from_wide(t1);
    }

    let t2 = ((-b_half + sqrt_disc) << FRAC_BITS) / a;
    if t2 > Fixed::EPSILON.wide() {
        return Fixed::from_wide(t2);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const TOLERANCE: f64 = 0.01;

    fn assert_close(analytic: f64, fixed: f64) {
        let bound = TOLERANCE.max(analytic.abs() * 0.01);
        assert!(
            (analytic - fixed).abs() < bound,
            "analytic {} vs fixed {}",
            analytic,
            fixed
        );
    }

    fn query(origin: [f64; 3], direction: [f64; 3], center: [f64; 3], radius: f64) -> FixedSphereQuery {
        let ray = Ray::new(Vec3::from_array(origin), Vec3::from_array(direction));
        FixedSphereQuery::encode(&ray, Vec3::from_array(center), radius).expect("representable")
    }

    #[test]
    fn test_fixed_encoding() {
        assert_eq!(Fixed::from_f64(1.0), Some(Fixed::ONE));
        assert_eq!(Fixed::from_f64(-2.5).map(Fixed::raw), Some(-163_840));
        assert_eq!(Fixed::from_raw(98_304).to_f64(), 1.5);
        assert_eq!(Fixed::EPSILON.raw(), 65);
        assert_eq!(Fixed::from_f64(f64::NAN), None);
        assert_eq!(Fixed::from_f64(40_000.0), None);
    }

    #[test]
    fn test_fixed_basic_hit() {
        let t = intersect_fixed(&query([0.0, 0.0, 5.0], [0.0, 0.0, -1.0], [0.0; 3], 1.0));
        let t = t.expect("should hit").to_f64();
        assert!((t - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_fixed_miss() {
        let t = intersect_fixed(&query([5.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0; 3], 1.0));
        assert!(t.is_none());
    }

    #[test]
    fn test_fixed_tangent() {
        let t = intersect_fixed(&query([0.0, 1.0, 5.0], [0.0, 0.0, -1.0], [0.0; 3], 1.0));
        let t = t.expect("tangent ray should hit").to_f64();
        assert!((t - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_fixed_inside_sphere() {
        let t = intersect_fixed(&query([0.0; 3], [1.0, 0.0, 0.0], [0.0; 3], 2.0));
        let t = t.expect("should hit exit point").to_f64();
        assert!((t - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_fixed_unnormalized_direction() {
        // Raw query with a direction of length 2: distances are in units of d.
        let mut q = query([0.0, 0.0, 5.0], [0.0, 0.0, -1.0], [0.0; 3], 1.0);
        q.direction.z = Fixed::from_raw(-2 * Fixed::ONE.raw());
        let t = intersect_fixed(&q).expect("should hit").to_f64();
        assert!((t - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_fixed_non_positive_radius() {
        let mut q = query([0.0, 0.0, 5.0], [0.0, 0.0, -1.0], [0.0; 3], 1.0);
        q.radius_squared = Fixed::ZERO;
        assert!(intersect_fixed(&q).is_none());
    }

    #[test]
    fn test_fixed_matches_analytic() {
        let cases = [
            ([0.0, 0.0, 5.0], [0.0, 0.0, -1.0], [0.0, 0.0, 0.0], 1.0),
            ([2.0, 0.0, 3.0], [0.0, 0.0, -1.0], [0.0, 0.0, 0.0], 1.0),
            ([0.0, 2.0, 5.0], [0.0, -1.0, 0.0], [0.0, 0.0, 0.0], 1.5),
            ([-3.0, -3.0, 5.0], [1.0, 1.0, -1.0], [0.0, 0.0, 0.0], 2.0),
        ];

        for (origin, direction, center, radius) in cases {
            let ray = Ray::new(Vec3::from_array(origin), Vec3::from_array(direction));
            let sphere = Sphere::new(Vec3::from_array(center), radius, Material::default());
            let analytic = sphere.hit(&ray, Interval::new(0.001, f64::INFINITY));
            let fixed = intersect_fixed(&query(origin, direction, center, radius)).map(Fixed::to_f64);

            assert_eq!(analytic.is_some(), fixed.is_some(), "hit flag mismatch for {:?}", origin);
            if let (Some(a), Some(f)) = (analytic, fixed) {
                assert_close(a, f);
            }
        }
    }

    #[test]
    fn test_fixed_matches_analytic_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let center = Vec3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            let radius = rng.gen_range(0.5..3.0);
            let origin = Vec3::new(
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
            );
            // Aim inside the sphere so hits are not grazing.
            let aim = center
                + Vec3::new(
                    rng.gen_range(-0.5..0.5),
                    rng.gen_range(-0.5..0.5),
                    rng.gen_range(-0.5..0.5),
                ) * radius;
            let ray = Ray::new(origin, aim - origin);
            let sphere = Sphere::new(center, radius, Material::default());

            let analytic = sphere.hit(&ray, Interval::new(0.001, f64::INFINITY));
            let fixed = FixedSphereQuery::encode(&ray, center, radius)
                .and_then(|q| intersect_fixed(&q))
                .map(Fixed::to_f64);

            let (Some(a), Some(f)) = (analytic, fixed) else {
                panic!("expected both solvers to hit: {:?} vs {:?}", analytic, fixed);
            };
            assert_close(a, f);
        }
    }

    #[test]
    fn test_fixed_long_ray_within_relative_bound() {
        // Roughly 26 units to the hit; rounding exceeds 0.01 absolute here
        let ray = Ray::new(Vec3::new(-18.0, 17.0, 12.0), Vec3::new(17.5, -14.0, -11.0));
        let center = Vec3::new(0.0, 2.0, 0.5);
        let sphere = Sphere::new(center, 1.3, Material::default());

        let a = sphere.hit(&ray, Interval::new(0.001, f64::INFINITY)).expect("analytic hit");
        let q = FixedSphereQuery::encode(&ray, center, 1.3).expect("representable");
        let f = intersect_fixed(&q).expect("fixed hit").to_f64();
        assert!(a > 20.0);
        assert_close(a, f);
    }
}
