//! Circle packing solver.

use crate::circle::CircleGeometry;
use crate::greedy::GreedyAngularPacker;
use crate::packing_utils::expand_radii;
use crate::relaxation::run_binary_search;
use circlepack_core::geometry::Point2;
use circlepack_core::solver::{Config, Solver, Strategy};
use circlepack_core::{Error, PackResult, Placement, Result};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Strategy-dispatching circle packer.
pub struct CirclePacker {
    config: Config,
}

impl CirclePacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Packs a flat radius list.
    ///
    /// Positions in the result are aligned to `radii` by index, independent
    /// of the placement order used internally.
    pub fn solve_radii(&self, radii: &[f64]) -> Result<PackResult> {
        self.config.validate()?;
        validate_radii(radii)?;

        let start = Instant::now();
        match self.config.strategy {
            Strategy::BinarySearch => self.binary_search(radii, start),
            Strategy::GreedyAngular => self.greedy(radii, start),
        }
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn binary_search(&self, radii: &[f64], start: Instant) -> Result<PackResult> {
        let mut rng = self.rng();
        let outcome = run_binary_search(radii, &self.config, &mut rng)?;

        let mut result = build_result(outcome.container_radius, &outcome.positions, radii)
            .with_strategy("BinarySearch")
            .with_feasible_trials(outcome.feasible_trials);
        result.computation_time_ms = start.elapsed().as_millis() as u64;
        Ok(result)
    }

    fn greedy(&self, radii: &[f64], start: Instant) -> Result<PackResult> {
        let packer = GreedyAngularPacker::new(self.config.angle_step_degrees);
        let (container_radius, positions) = packer.pack(radii);

        let mut result =
            build_result(container_radius, &positions, radii).with_strategy("GreedyAngular");
        result.computation_time_ms = start.elapsed().as_millis() as u64;
        Ok(result)
    }
}

impl Solver for CirclePacker {
    type Geometry = CircleGeometry;

    fn solve(&self, geometries: &[Self::Geometry]) -> Result<PackResult> {
        for geom in geometries {
            geom.validate()?;
        }
        let radii = expand_radii(geometries);
        self.solve_radii(&radii)
    }
}

/// Packs `radii` with the binary-search strategy and the standard budgets
/// (30 bisection steps, 5000 relaxation rounds, tolerance 1e-5).
pub fn binary_search_pack(radii: &[f64]) -> Result<PackResult> {
    CirclePacker::new(Config::default().with_strategy(Strategy::BinarySearch)).solve_radii(radii)
}

/// Packs `radii` with the greedy angular strategy at a 1° scan step.
pub fn greedy_pack(radii: &[f64]) -> Result<PackResult> {
    CirclePacker::new(Config::default().with_strategy(Strategy::GreedyAngular)).solve_radii(radii)
}

fn validate_radii(radii: &[f64]) -> Result<()> {
    if radii.is_empty() {
        return Err(Error::InvalidGeometry(
            "at least one radius is required".to_string(),
        ));
    }
    for (i, &r) in radii.iter().enumerate() {
        if !r.is_finite() || r <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "radius at index {} must be positive (got {})",
                i, r
            )));
        }
    }
    Ok(())
}

fn build_result(container_radius: f64, positions: &[Point2], radii: &[f64]) -> PackResult {
    let mut result = PackResult::new();
    result.container_radius = container_radius;
    result.placements = positions
        .iter()
        .zip(radii)
        .enumerate()
        .map(|(index, (&position, &radius))| Placement::new(index, position, radius))
        .collect();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(
            greedy_pack(&[]),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(matches!(
            binary_search_pack(&[]),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_rejects_nonpositive_radius() {
        assert!(greedy_pack(&[1.0, 0.0]).is_err());
        assert!(greedy_pack(&[1.0, -2.0]).is_err());
        assert!(greedy_pack(&[1.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = Config::default();
        config.tolerance = -1.0;
        let packer = CirclePacker::new(config);
        assert!(matches!(
            packer.solve_radii(&[1.0]),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_greedy_result_metadata() {
        let result = greedy_pack(&[5.0]).unwrap();
        assert_eq!(result.strategy.as_deref(), Some("GreedyAngular"));
        assert_eq!(result.container_radius, 5.0);
        assert_eq!(result.positions(), vec![(0.0, 0.0)]);
        assert!(result.feasible_trials.is_none());
    }

    #[test]
    fn test_binary_search_result_metadata() {
        let result = binary_search_pack(&[5.0]).unwrap();
        assert_eq!(result.strategy.as_deref(), Some("BinarySearch"));
        assert_eq!(result.container_radius, 5.0);
        assert_eq!(result.positions(), vec![(0.0, 0.0)]);
    }

    #[test]
    fn test_solver_expands_quantities() {
        let geometries = vec![
            CircleGeometry::new("A", 6.0),
            CircleGeometry::new("B", 2.0).with_quantity(3),
        ];

        let packer = CirclePacker::default_config();
        let result = packer.solve(&geometries).unwrap();

        assert_eq!(result.circle_count(), 4);
        assert_eq!(result.placements[0].radius, 3.0);
        for placement in &result.placements[1..] {
            assert_eq!(placement.radius, 1.0);
        }
        assert!(result.is_valid_layout(1e-6));
    }

    #[test]
    fn test_solver_rejects_invalid_geometry() {
        let geometries = vec![CircleGeometry::new("A", -6.0)];
        let packer = CirclePacker::default_config();
        assert!(packer.solve(&geometries).is_err());
    }
}
