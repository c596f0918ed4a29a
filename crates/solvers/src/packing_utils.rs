//! Shared utilities for the packing strategies.
//!
//! This module consolidates the pieces both solvers (and their callers)
//! need: the overlap predicate, the implied-container computation, quantity
//! expansion, and the layout recentering pass.

use crate::circle::CircleGeometry;
use circlepack_core::geometry::{distance, Point2};

/// Tolerance used by the discrete overlap predicate.
///
/// This is fixed and independent of the relaxation tolerance: two circles
/// whose gap is within this value are considered tangent, not overlapping.
pub const OVERLAP_EPSILON: f64 = 1e-6;

/// A circle that has already been committed to a position.
#[derive(Debug, Clone, Copy)]
pub struct PlacedCircle {
    /// Center position.
    pub position: Point2,
    /// Radius.
    pub radius: f64,
}

/// Returns true iff a circle of the given `radius` centered at `candidate`
/// overlaps none of the `placed` circles.
///
/// Pure predicate: containment in the trial container is not checked here;
/// the caller folds the candidate's distance from the origin into the
/// implied container radius instead.
pub fn is_valid(candidate: &Point2, radius: f64, placed: &[PlacedCircle]) -> bool {
    placed.iter().all(|p| {
        distance(candidate, &p.position) >= radius + p.radius - OVERLAP_EPSILON
    })
}

/// Container radius that would be required if a circle of `radius` were
/// committed at `candidate`, given the container radius so far.
pub fn implied_radius(candidate: &Point2, radius: f64, current_container: f64) -> f64 {
    current_container.max(candidate.coords.norm() + radius)
}

/// Instance information mapping expanded instances to source geometries.
///
/// When a geometry has quantity > 1 it expands into multiple instances; this
/// records which geometry each expanded radius-list index belongs to.
#[derive(Debug, Clone)]
pub struct InstanceInfo {
    /// Index into the geometries array.
    pub geometry_idx: usize,
    /// Instance number within this geometry's quantity.
    pub instance_num: usize,
}

/// Builds the instance mapping from geometries.
pub fn build_instances(geometries: &[CircleGeometry]) -> Vec<InstanceInfo> {
    let mut instances = Vec::new();
    for (geometry_idx, geom) in geometries.iter().enumerate() {
        for instance_num in 0..geom.quantity() {
            instances.push(InstanceInfo {
                geometry_idx,
                instance_num,
            });
        }
    }
    instances
}

/// Expands geometries into a flat radius list, one entry per instance.
///
/// Expansion order (geometry order, then instance order) defines the
/// radius-list index used throughout the solvers.
pub fn expand_radii(geometries: &[CircleGeometry]) -> Vec<f64> {
    geometries
        .iter()
        .flat_map(|g| std::iter::repeat(g.radius()).take(g.quantity()))
        .collect()
}

/// Translates a finished layout so the origin becomes the optimal container
/// center, and returns the resulting container radius.
///
/// The enclosing radius as a function of the center,
/// `f(c) = max_i(|p_i - c| + r_i)`, is convex; a compass search with a
/// halving step converges to its minimizer. Translation preserves all
/// pairwise distances, so a valid layout stays valid.
pub fn recenter(positions: &mut [Point2], radii: &[f64]) -> f64 {
    let enclosing = |c: &Point2| -> f64 {
        positions
            .iter()
            .zip(radii)
            .map(|(p, &r)| distance(p, c) + r)
            .fold(0.0_f64, f64::max)
    };

    let mut center = Point2::origin();
    let mut best = enclosing(&center);
    let mut step = best / 2.0;

    while step > 1e-9 {
        let mut improved = false;
        for dx in [-step, 0.0, step] {
            for dy in [-step, 0.0, step] {
                let candidate = Point2::new(center.x + dx, center.y + dy);
                let value = enclosing(&candidate);
                if value < best {
                    best = value;
                    center = candidate;
                    improved = true;
                }
            }
        }
        if !improved {
            step *= 0.5;
        }
    }

    let shift = center.coords;
    for p in positions.iter_mut() {
        *p -= shift;
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_is_valid_tangent_and_overlapping() {
        let placed = vec![PlacedCircle {
            position: Point2::origin(),
            radius: 3.0,
        }];

        // Exactly tangent: allowed.
        assert!(is_valid(&Point2::new(6.0, 0.0), 3.0, &placed));
        // Slightly inside the tolerance band: still allowed.
        assert!(is_valid(&Point2::new(6.0 - 1e-7, 0.0), 3.0, &placed));
        // Clearly overlapping: rejected.
        assert!(!is_valid(&Point2::new(5.0, 0.0), 3.0, &placed));
        // Empty placed set: anything goes.
        assert!(is_valid(&Point2::new(0.0, 0.0), 3.0, &[]));
    }

    #[test]
    fn test_implied_radius() {
        let candidate = Point2::new(3.0, 4.0);
        assert_relative_eq!(implied_radius(&candidate, 2.0, 1.0), 7.0, epsilon = 1e-12);
        assert_relative_eq!(implied_radius(&candidate, 2.0, 10.0), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_build_instances_and_expand() {
        let geometries = vec![
            CircleGeometry::new("A", 6.0).with_quantity(2),
            CircleGeometry::new("B", 2.0),
        ];

        let instances = build_instances(&geometries);
        assert_eq!(instances.len(), 3);
        assert_eq!(instances[0].geometry_idx, 0);
        assert_eq!(instances[0].instance_num, 0);
        assert_eq!(instances[1].geometry_idx, 0);
        assert_eq!(instances[1].instance_num, 1);
        assert_eq!(instances[2].geometry_idx, 1);
        assert_eq!(instances[2].instance_num, 0);

        assert_eq!(expand_radii(&geometries), vec![3.0, 3.0, 1.0]);
    }

    #[test]
    fn test_recenter_single_circle_is_exact() {
        let mut positions = vec![Point2::origin()];
        let radius = recenter(&mut positions, &[5.0]);

        assert_eq!(positions[0], Point2::origin());
        assert_relative_eq!(radius, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_recenter_tangent_pair() {
        // Layout produced with the first circle pinned at the origin: the
        // optimal center is the midpoint.
        let mut positions = vec![Point2::origin(), Point2::new(6.0, 0.0)];
        let radius = recenter(&mut positions, &[3.0, 3.0]);

        assert_relative_eq!(radius, 6.0, epsilon = 1e-6);
        assert_relative_eq!(positions[0].x, -3.0, epsilon = 1e-6);
        assert_relative_eq!(positions[1].x, 3.0, epsilon = 1e-6);
        // Pairwise distances are preserved exactly.
        assert_relative_eq!(
            distance(&positions[0], &positions[1]),
            6.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_recenter_never_grows_the_container() {
        let mut positions = vec![
            Point2::origin(),
            Point2::new(6.0, 0.0),
            Point2::new(4.663, 3.776),
        ];
        let radii = [4.0, 2.0, 2.0];
        let before = positions
            .iter()
            .zip(&radii)
            .map(|(p, &r)| p.coords.norm() + r)
            .fold(0.0_f64, f64::max);

        let after = recenter(&mut positions, &radii);
        assert!(after <= before + 1e-12);
    }
}
