//! 2D geometry primitives shared by the packing strategies.
//!
//! All functions here are pure over valid numeric input; the only source of
//! nondeterminism is an explicitly injected [`Rng`], so tests can substitute
//! a seeded generator and assert exact outcomes.

use rand::Rng;
use std::f64::consts::TAU;

/// 2D point in the container coordinate frame (container center at origin).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D displacement vector.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Euclidean distance between two points.
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns a uniformly random unit vector.
pub fn random_unit<R: Rng>(rng: &mut R) -> Vector2 {
    let angle = rng.gen_range(0.0..TAU);
    Vector2::new(angle.cos(), angle.sin())
}

/// Normalizes `v` to unit length, falling back to a uniformly random
/// direction when `v` is too short to normalize (coincident points).
pub fn unit_or_random<R: Rng>(v: Vector2, rng: &mut R) -> Vector2 {
    v.try_normalize(1e-12).unwrap_or_else(|| random_unit(rng))
}

/// Returns the point on the circle of the given `center` and `radius` at
/// `angle` radians (measured counter-clockwise from the positive x-axis).
pub fn point_at_angle(center: &Point2, radius: f64, angle: f64) -> Point2 {
    *center + Vector2::new(angle.cos(), angle.sin()) * radius
}

/// Returns a random point within the disk of the given `radius` centered at
/// the origin.
///
/// The radial distance is sampled uniformly, so draws are biased toward the
/// center; that is the intended seeding distribution for relaxation.
pub fn random_in_disk<R: Rng>(radius: f64, rng: &mut R) -> Point2 {
    if radius <= 0.0 {
        return Point2::origin();
    }
    let r = rng.gen_range(0.0..=radius);
    let theta = rng.gen_range(0.0..TAU);
    Point2::new(r * theta.cos(), r * theta.sin())
}
