//! Solver trait and configuration.

use crate::error::{Error, Result};
use crate::result::PackResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Packing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Greedy angular placement with local refinement (deterministic,
    /// always succeeds).
    #[default]
    GreedyAngular,
    /// Binary search over trial radii with force relaxation (stochastic,
    /// may report infeasibility under tight budgets).
    BinarySearch,
}

/// Common configuration for the packing solvers.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Packing strategy.
    pub strategy: Strategy,

    /// Number of bisection steps for the binary-search strategy.
    pub search_iterations: u32,

    /// Maximum relaxation rounds per trial radius.
    pub max_iterations: u32,

    /// Convergence tolerance for relaxation: a round whose largest
    /// displacement falls below this value is considered stable.
    pub tolerance: f64,

    /// Angular scan step in degrees for the greedy strategy.
    pub angle_step_degrees: u32,

    /// Seed for the relaxation RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            search_iterations: 30,
            max_iterations: 5000,
            tolerance: 1e-5,
            angle_step_degrees: 1,
            seed: None,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the packing strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the number of bisection steps.
    pub fn with_search_iterations(mut self, iterations: u32) -> Self {
        self.search_iterations = iterations.max(1);
        self
    }

    /// Sets the maximum relaxation rounds per trial radius.
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = iterations.max(1);
        self
    }

    /// Sets the relaxation convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(1e-12);
        self
    }

    /// Sets the angular scan step in degrees.
    pub fn with_angle_step(mut self, degrees: u32) -> Self {
        self.angle_step_degrees = degrees.clamp(1, 359);
        self
    }

    /// Sets the RNG seed for reproducible relaxation runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration before any computation begins.
    pub fn validate(&self) -> Result<()> {
        if self.search_iterations == 0 {
            return Err(Error::ConfigError(
                "search_iterations must be at least 1".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(Error::ConfigError(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::ConfigError(format!(
                "tolerance must be a positive finite number (got {})",
                self.tolerance
            )));
        }
        if !(1..=359).contains(&self.angle_step_degrees) {
            return Err(Error::ConfigError(format!(
                "angle_step_degrees must be between 1 and 359 (got {})",
                self.angle_step_degrees
            )));
        }
        Ok(())
    }
}

/// Trait for circle-packing solvers.
pub trait Solver {
    /// The geometry type this solver handles.
    type Geometry;

    /// Packs the given geometries into a minimal enclosing container.
    fn solve(&self, geometries: &[Self::Geometry]) -> Result<PackResult>;
}
