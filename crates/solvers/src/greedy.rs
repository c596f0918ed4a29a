//! Greedy angular placement.
//!
//! Circles are committed largest-first. Each new circle scans tangent
//! candidate positions around every already-placed circle (placed circles
//! in placement order, angles ascending from 0°) and keeps the first
//! candidate that strictly minimizes the implied container radius. The
//! winner is polished with the local refiner before being committed.
//!
//! The strategy is fully deterministic and always succeeds: when no scanned
//! candidate is valid, the circle is parked at `(container + r, 0)`, which
//! lies outside every placed circle by construction.

use crate::packing_utils::{implied_radius, is_valid, recenter, PlacedCircle};
use crate::refine::refine;
use circlepack_core::geometry::{point_at_angle, Point2};

/// Greedy angular placement packer.
#[derive(Debug, Clone)]
pub struct GreedyAngularPacker {
    angle_step_degrees: u32,
}

impl GreedyAngularPacker {
    /// Creates a new packer with the given angular scan step.
    pub fn new(angle_step_degrees: u32) -> Self {
        Self {
            angle_step_degrees: angle_step_degrees.clamp(1, 359),
        }
    }

    /// Packs the circles, returning the container radius and one position
    /// per radius, aligned by input index.
    ///
    /// The finished layout is recentered on the optimal container center, so
    /// the returned radius is the enclosing radius of the translated layout.
    pub fn pack(&self, radii: &[f64]) -> (f64, Vec<Point2>) {
        let n = radii.len();
        let mut positions = vec![Point2::origin(); n];
        if n == 0 {
            return (0.0, positions);
        }

        // Largest first; the stable sort keeps input order between equal
        // radii, which pins the scan order and makes results reproducible.
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            radii[b]
                .partial_cmp(&radii[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let first = order[0];
        positions[first] = Point2::origin();
        let mut container = radii[first];
        let mut placed = vec![PlacedCircle {
            position: positions[first],
            radius: radii[first],
        }];

        for &idx in &order[1..] {
            let r = radii[idx];
            let mut best: Option<(Point2, f64)> = None;

            for anchor in &placed {
                for angle_deg in (0..360_u32).step_by(self.angle_step_degrees as usize) {
                    let angle = f64::from(angle_deg).to_radians();
                    let candidate = point_at_angle(&anchor.position, anchor.radius + r, angle);
                    if !is_valid(&candidate, r, &placed) {
                        continue;
                    }
                    let implied = implied_radius(&candidate, r, container);
                    if best.as_ref().map_or(true, |&(_, b)| implied < b) {
                        best = Some((candidate, implied));
                    }
                }
            }

            let candidate = match best {
                Some((position, _)) => position,
                None => {
                    // Parked outside the current container along the
                    // positive x-axis; valid by construction.
                    log::warn!(
                        "no tangent candidate for circle of radius {}; using fallback placement",
                        r
                    );
                    Point2::new(container + r, 0.0)
                }
            };

            let (position, implied) = refine(&candidate, r, &placed, container);
            positions[idx] = position;
            container = container.max(implied);
            placed.push(PlacedCircle { position, radius: r });
        }

        let container = recenter(&mut positions, radii);
        (container, positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use circlepack_core::geometry::distance;

    #[test]
    fn test_single_circle_at_origin() {
        let packer = GreedyAngularPacker::new(1);
        let (container, positions) = packer.pack(&[5.0]);

        assert_eq!(container, 5.0);
        assert_eq!(positions, vec![Point2::origin()]);
    }

    #[test]
    fn test_two_equal_circles_are_tangent_through_center() {
        let packer = GreedyAngularPacker::new(1);
        let (container, positions) = packer.pack(&[3.0, 3.0]);

        // Optimal: both circles tangent at the container center, one on each
        // side.
        assert_relative_eq!(container, 6.0, epsilon = 1e-3);
        assert_relative_eq!(distance(&positions[0], &positions[1]), 6.0, epsilon = 1e-9);
        assert_relative_eq!(
            positions[0].coords.norm(),
            positions[1].coords.norm(),
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_largest_first_preserves_index_alignment() {
        let packer = GreedyAngularPacker::new(1);
        let radii = [1.0, 3.0, 2.0];
        let (container, positions) = packer.pack(&radii);

        assert_eq!(positions.len(), 3);
        // Every position belongs to its input index: validate the layout
        // with the input radii.
        for i in 0..3 {
            for j in (i + 1)..3 {
                assert!(
                    distance(&positions[i], &positions[j]) >= radii[i] + radii[j] - 1e-6
                );
            }
            assert!(positions[i].coords.norm() + radii[i] <= container + 1e-6);
        }
    }

    #[test]
    fn test_deterministic() {
        let packer = GreedyAngularPacker::new(1);
        let radii = [2.5, 1.0, 1.0, 0.5, 2.0];

        let (container_a, positions_a) = packer.pack(&radii);
        let (container_b, positions_b) = packer.pack(&radii);

        assert_eq!(container_a, container_b);
        assert_eq!(positions_a, positions_b);
    }

    #[test]
    fn test_coarse_angle_step_still_valid() {
        let packer = GreedyAngularPacker::new(45);
        let radii = [2.0, 1.0, 1.0, 1.0];
        let (container, positions) = packer.pack(&radii);

        for i in 0..radii.len() {
            for j in (i + 1)..radii.len() {
                assert!(
                    distance(&positions[i], &positions[j]) >= radii[i] + radii[j] - 1e-6
                );
            }
            assert!(positions[i].coords.norm() + radii[i] <= container + 1e-6);
        }
    }

    #[test]
    fn test_empty_input_yields_empty_layout() {
        let packer = GreedyAngularPacker::new(1);
        let (container, positions) = packer.pack(&[]);
        assert_eq!(container, 0.0);
        assert!(positions.is_empty());
    }
}
