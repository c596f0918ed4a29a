//! Force-relaxation packing and the binary-search driver.
//!
//! A trial container radius is tested by seeding every circle at a random
//! point inside the container and iterating two constraint passes until the
//! layout stabilizes:
//!
//! - **Pairwise de-overlap**: overlapping circles are pushed apart
//!   symmetrically along their connecting direction
//! - **Boundary containment**: circles protruding past the container are
//!   pulled radially inward
//!
//! The driver bisects on the container radius, keeping the smallest trial
//! the relaxation could stabilize.
//!
//! Relaxation is a physical constraint solver, not a feasibility proof: a
//! tight iteration budget can make it reject a radius that a larger budget
//! would accept, and tolerance slack can let it accept a radius marginally
//! above the true optimum.

use circlepack_core::geometry::{random_in_disk, unit_or_random, Point2};
use circlepack_core::solver::Config;
use circlepack_core::{Error, Result};
use rand::Rng;

/// Relaxation-based feasibility tester for a fixed trial radius.
#[derive(Debug, Clone)]
pub struct RelaxationPacker {
    max_iterations: u32,
    tolerance: f64,
}

impl RelaxationPacker {
    /// Creates a new relaxation packer with the given round budget and
    /// convergence tolerance.
    pub fn new(max_iterations: u32, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }

    /// Attempts to relax the circles into a stable layout inside a container
    /// of `trial_radius`.
    ///
    /// Returns the positions (aligned to `radii` by index) when a round's
    /// largest displacement falls below the tolerance, or `None` when the
    /// round budget is exhausted first. A trial smaller than any single
    /// radius is rejected immediately.
    pub fn relax<R: Rng>(
        &self,
        trial_radius: f64,
        radii: &[f64],
        rng: &mut R,
    ) -> Option<Vec<Point2>> {
        if radii.iter().any(|&r| r > trial_radius) {
            return None;
        }

        let n = radii.len();
        let mut positions: Vec<Point2> = radii
            .iter()
            .map(|&r| random_in_disk(trial_radius - r, rng))
            .collect();

        for round in 0..self.max_iterations {
            let mut max_disp = 0.0_f64;

            // Pairwise de-overlap: every unordered pair, symmetric push.
            for i in 0..n {
                for j in (i + 1)..n {
                    let delta = positions[j] - positions[i];
                    let dist = delta.norm();
                    let desired = radii[i] + radii[j];
                    if dist < desired {
                        let dir = unit_or_random(delta, rng);
                        let shift = (desired - dist) / 2.0;
                        positions[i] -= dir * shift;
                        positions[j] += dir * shift;
                        max_disp = max_disp.max(shift);
                    }
                }
            }

            // Boundary containment: pull protruding circles radially inward.
            for (position, &radius) in positions.iter_mut().zip(radii) {
                let offset = position.coords;
                let dist_center = offset.norm();
                let excess = dist_center + radius - trial_radius;
                if excess > 0.0 {
                    let dir = unit_or_random(offset, rng);
                    *position -= dir * excess;
                    max_disp = max_disp.max(excess);
                }
            }

            if max_disp < self.tolerance {
                log::debug!(
                    "relaxation stabilized after {} rounds at trial radius {:.6}",
                    round + 1,
                    trial_radius
                );
                return Some(positions);
            }
        }

        None
    }
}

/// Outcome of a successful binary search.
#[derive(Debug, Clone)]
pub struct BinarySearchOutcome {
    /// Smallest trial radius that relaxed successfully.
    pub container_radius: f64,
    /// Positions for that trial, aligned to the radius list by index.
    pub positions: Vec<Point2>,
    /// Number of trials that relaxed successfully.
    pub feasible_trials: u32,
}

/// Bisects on the container radius, relaxing each trial.
///
/// The bracket starts at `[max(radii), 2 * sum(radii)]`: the largest circle
/// alone needs at least its own radius, and twice the radius sum always
/// over-provisions area. Every successful trial tightens the upper bound,
/// every failed trial the lower bound; the loop runs a fixed
/// `search_iterations` count with no early exit.
///
/// A single circle is solved directly: its minimal container is the circle
/// itself, which bisection can only approach from above.
pub fn run_binary_search<R: Rng>(
    radii: &[f64],
    config: &Config,
    rng: &mut R,
) -> Result<BinarySearchOutcome> {
    if radii.len() == 1 {
        return Ok(BinarySearchOutcome {
            container_radius: radii[0],
            positions: vec![Point2::origin()],
            feasible_trials: 0,
        });
    }

    let mut lower = radii.iter().fold(0.0_f64, |acc, &r| acc.max(r));
    let mut upper = 2.0 * radii.iter().sum::<f64>();

    let packer = RelaxationPacker::new(config.max_iterations, config.tolerance);
    let mut best: Option<(f64, Vec<Point2>)> = None;
    let mut feasible_trials = 0_u32;

    for _ in 0..config.search_iterations {
        let mid = (lower + upper) / 2.0;
        match packer.relax(mid, radii, rng) {
            Some(positions) => {
                feasible_trials += 1;
                best = Some((mid, positions));
                upper = mid;
            }
            None => {
                log::debug!("trial radius {:.6} failed to stabilize", mid);
                lower = mid;
            }
        }
    }

    best.map(|(container_radius, positions)| BinarySearchOutcome {
        container_radius,
        positions,
        feasible_trials,
    })
    .ok_or(Error::Infeasible {
        trials: config.search_iterations as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlepack_core::geometry::distance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_layout_ok(positions: &[Point2], radii: &[f64], container: f64, slack: f64) {
        for i in 0..radii.len() {
            for j in (i + 1)..radii.len() {
                let dist = distance(&positions[i], &positions[j]);
                assert!(
                    dist >= radii[i] + radii[j] - slack,
                    "circles {} and {} overlap: dist {} < {}",
                    i,
                    j,
                    dist,
                    radii[i] + radii[j]
                );
            }
        }
        for (i, p) in positions.iter().enumerate() {
            assert!(
                p.coords.norm() + radii[i] <= container + slack,
                "circle {} outside container",
                i
            );
        }
    }

    #[test]
    fn test_relax_rejects_oversized_circle() {
        let packer = RelaxationPacker::new(100, 1e-5);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(packer.relax(4.0, &[5.0], &mut rng).is_none());
    }

    #[test]
    fn test_relax_single_circle_converges_immediately() {
        let packer = RelaxationPacker::new(100, 1e-5);
        let mut rng = StdRng::seed_from_u64(1);
        // One circle seeded inside the container has nothing to resolve.
        let positions = packer.relax(6.0, &[5.0], &mut rng).unwrap();
        assert_eq!(positions.len(), 1);
        assert!(positions[0].coords.norm() <= 1.0 + 1e-9);
    }

    #[test]
    fn test_relax_pair_in_roomy_container() {
        let packer = RelaxationPacker::new(5000, 1e-5);
        let mut rng = StdRng::seed_from_u64(42);
        let radii = [3.0, 3.0];
        let positions = packer.relax(10.0, &radii, &mut rng).unwrap();
        assert_layout_ok(&positions, &radii, 10.0, 1e-3);
    }

    #[test]
    fn test_binary_search_single_circle_is_exact() {
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = run_binary_search(&[5.0], &Config::default(), &mut rng).unwrap();
        assert_eq!(outcome.container_radius, 5.0);
        assert_eq!(outcome.positions, vec![Point2::origin()]);
    }

    #[test]
    fn test_binary_search_pair() {
        let mut rng = StdRng::seed_from_u64(42);
        let radii = [3.0, 3.0];
        let outcome = run_binary_search(&radii, &Config::default(), &mut rng).unwrap();

        // Two radius-3 circles geometrically require at least a radius-6
        // container; the bracket never exceeds 12.
        assert!(outcome.container_radius >= 3.0);
        assert!(outcome.container_radius <= 12.0);
        assert!(outcome.feasible_trials > 0);
        assert_layout_ok(&outcome.positions, &radii, outcome.container_radius, 1e-3);
    }

    #[test]
    fn test_binary_search_monotone_in_search_iterations() {
        let radii = [2.0, 2.0, 2.0, 2.0, 1.0];

        let coarse_config = Config::default().with_search_iterations(5);
        let fine_config = Config::default().with_search_iterations(30);

        let mut coarse_rng = StdRng::seed_from_u64(7);
        let mut fine_rng = StdRng::seed_from_u64(7);

        let coarse = run_binary_search(&radii, &coarse_config, &mut coarse_rng).unwrap();
        let fine = run_binary_search(&radii, &fine_config, &mut fine_rng).unwrap();

        // With the same seed the first five trials are identical, and extra
        // iterations can only tighten the bracket.
        assert!(fine.container_radius <= coarse.container_radius + 1e-12);
    }

    #[test]
    fn test_binary_search_index_alignment() {
        let mut rng = StdRng::seed_from_u64(9);
        let radii = [1.0, 3.0, 2.0];
        let outcome = run_binary_search(&radii, &Config::default(), &mut rng).unwrap();
        assert_eq!(outcome.positions.len(), radii.len());
        assert_layout_ok(&outcome.positions, &radii, outcome.container_radius, 1e-3);
    }
}
