//! # CirclePack Solvers
//!
//! Packing algorithms for the CirclePack engine.
//!
//! Two independent strategies are provided:
//!
//! - [`relaxation`]: binary search over trial container radii, testing each
//!   trial with an iterative force relaxation (pairwise repulsion plus
//!   boundary pull-in)
//! - [`greedy`]: deterministic largest-first placement that scans tangent
//!   positions around already-placed circles and polishes each pick with a
//!   shrinking local search
//!
//! [`packer::CirclePacker`] dispatches between them based on the configured
//! [`Strategy`](circlepack_core::Strategy).

pub mod circle;
pub mod greedy;
pub mod packer;
pub mod packing_utils;
pub mod refine;
pub mod relaxation;

// Re-exports
pub use circle::{CircleGeometry, GeometryId};
pub use greedy::GreedyAngularPacker;
pub use packer::{binary_search_pack, greedy_pack, CirclePacker};
pub use relaxation::RelaxationPacker;
pub use circlepack_core::{Config, Error, PackResult, Placement, Result, Solver, Strategy};
