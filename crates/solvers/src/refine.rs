//! Local refinement of accepted candidate positions.

use crate::packing_utils::{implied_radius, is_valid, PlacedCircle};
use circlepack_core::geometry::Point2;

/// Step size below which refinement stops.
const MIN_STEP: f64 = 1e-6;

/// Polishes a candidate position with a shrinking-step local search.
///
/// Starting from a step of 5% of the circle radius, the 3×3 grid around the
/// current best position is scanned; a neighbor is accepted when it is valid
/// against every placed circle and strictly reduces the implied container
/// radius. The step is halved after any improvement-free pass.
///
/// `current_container` is the container radius before this circle is
/// committed; the returned radius is the implied container of the refined
/// position, never below `current_container`.
pub fn refine(
    candidate: &Point2,
    radius: f64,
    placed: &[PlacedCircle],
    current_container: f64,
) -> (Point2, f64) {
    let mut best_position = *candidate;
    let mut best_container = implied_radius(candidate, radius, current_container);
    let mut step = radius * 0.05;

    while step > MIN_STEP {
        let mut improved = false;
        for dx in [-step, 0.0, step] {
            for dy in [-step, 0.0, step] {
                let neighbor = Point2::new(best_position.x + dx, best_position.y + dy);
                if !is_valid(&neighbor, radius, placed) {
                    continue;
                }
                let implied = implied_radius(&neighbor, radius, current_container);
                if implied < best_container {
                    best_container = implied;
                    best_position = neighbor;
                    improved = true;
                }
            }
        }
        if !improved {
            step *= 0.5;
        }
    }

    (best_position, best_container)
}
