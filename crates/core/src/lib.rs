//! # CirclePack Core
//!
//! Core types and abstractions for the CirclePack circle-packing engine.
//!
//! This crate provides the foundational pieces shared by every packing
//! strategy:
//!
//! - **Geometry primitives**: 2D points/vectors, distances, angular point
//!   generation, random directions
//! - **Placement and result types**: `Placement`, `PackResult`
//! - **Solver abstractions**: `Solver` trait, `Config`, `Strategy`
//! - **Error types**: `Error`, `Result`
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Point2, Vector2};
pub use placement::Placement;
pub use result::PackResult;
pub use solver::{Config, Solver, Strategy};
