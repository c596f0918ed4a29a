//! Packing result representation.

use crate::geometry::distance;
use crate::placement::Placement;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a packing solve operation.
///
/// Placements are ordered by input index: `placements[k]` corresponds to the
/// k-th radius handed to the solver.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// Radius of the enclosing container, centered at the origin.
    pub container_radius: f64,

    /// One placement per input circle, aligned by input index.
    pub placements: Vec<Placement>,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Number of trial radii that relaxed successfully (binary-search
    /// strategy only).
    pub feasible_trials: Option<u32>,

    /// Strategy used for solving.
    pub strategy: Option<String>,
}

impl PackResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self {
            container_radius: 0.0,
            placements: Vec::new(),
            computation_time_ms: 0,
            feasible_trials: None,
            strategy: None,
        }
    }

    /// Sets the strategy name.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Sets the feasible-trial count.
    pub fn with_feasible_trials(mut self, trials: u32) -> Self {
        self.feasible_trials = Some(trials);
        self
    }

    /// Returns the number of placed circles.
    pub fn circle_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the container diameter (2 × radius).
    pub fn container_diameter(&self) -> f64 {
        2.0 * self.container_radius
    }

    /// Area density of the layout: total circle area over container area.
    pub fn density(&self) -> f64 {
        if self.container_radius <= 0.0 {
            return 0.0;
        }
        let circle_area: f64 = self.placements.iter().map(|p| p.radius * p.radius).sum();
        circle_area / (self.container_radius * self.container_radius)
    }

    /// Largest pairwise overlap in the layout, in length units.
    ///
    /// Zero means no pair of circles overlaps at all.
    pub fn max_pair_overlap(&self) -> f64 {
        let mut worst = 0.0_f64;
        for (i, a) in self.placements.iter().enumerate() {
            for b in &self.placements[i + 1..] {
                let gap = a.radius + b.radius - distance(&a.position, &b.position);
                worst = worst.max(gap);
            }
        }
        worst
    }

    /// Largest protrusion of any circle beyond the container boundary, in
    /// length units. Zero means every circle lies fully inside.
    pub fn max_boundary_excess(&self) -> f64 {
        self.placements
            .iter()
            .map(|p| p.distance_from_center() + p.radius - self.container_radius)
            .fold(0.0_f64, f64::max)
    }

    /// Returns true if the layout satisfies the non-overlap and containment
    /// invariants within `tolerance`.
    pub fn is_valid_layout(&self, tolerance: f64) -> bool {
        self.max_pair_overlap() <= tolerance && self.max_boundary_excess() <= tolerance
    }

    /// Positions as (x, y) pairs, in input-index order.
    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.placements.iter().map(|p| (p.x(), p.y())).collect()
    }
}

impl Default for PackResult {
    fn default() -> Self {
        Self::new()
    }
}
