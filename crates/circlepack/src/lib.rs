//! # CirclePack
//!
//! Minimal enclosing-circle packing for multisets of circles.
//!
//! Given a list of circle radii, CirclePack computes a small container
//! radius and a position for every circle so that no two circles overlap
//! and every circle lies fully inside the container. Two strategies are
//! provided:
//!
//! - **Greedy angular placement** (deterministic, always succeeds):
//!   largest-first tangent scanning with local refinement
//! - **Binary search + relaxation** (stochastic): bisects on the container
//!   radius, testing each trial with an iterative force relaxation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use circlepack::{greedy_pack, Config, CirclePacker, Strategy};
//!
//! // Pack three circles with the deterministic strategy.
//! let result = greedy_pack(&[3.0, 2.0, 2.0])?;
//! println!("container radius: {}", result.container_radius);
//! for p in &result.placements {
//!     println!("circle {} at ({:.3}, {:.3})", p.index, p.x(), p.y());
//! }
//!
//! // Or configure the binary-search strategy explicitly.
//! let packer = CirclePacker::new(
//!     Config::default()
//!         .with_strategy(Strategy::BinarySearch)
//!         .with_seed(42),
//! );
//! let result = packer.solve_radii(&[3.0, 2.0, 2.0])?;
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for results and configuration

/// Core types and geometry primitives.
pub use circlepack_core as core;

/// Packing algorithms.
pub use circlepack_solvers as solvers;

// Re-export commonly used types at root level
pub use circlepack_core::{Config, Error, PackResult, Placement, Result, Solver, Strategy};
pub use circlepack_solvers::{
    binary_search_pack, greedy_pack, CircleGeometry, CirclePacker, GreedyAngularPacker,
    RelaxationPacker,
};
