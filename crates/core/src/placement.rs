//! Placement representation for positioned circles.

use crate::geometry::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The position of one circle instance within the container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Index into the input radius list this placement belongs to.
    ///
    /// The index is stable: it refers to the caller's ordering regardless of
    /// any internal reordering used during placement.
    pub index: usize,

    /// Center position in the container frame (container center at origin).
    pub position: Point2,

    /// Radius of the placed circle.
    pub radius: f64,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(index: usize, position: Point2, radius: f64) -> Self {
        Self {
            index,
            position,
            radius,
        }
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Returns the circle diameter (2 × radius).
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Returns the distance from the container center to this circle's
    /// center.
    pub fn distance_from_center(&self) -> f64 {
        self.position.coords.norm()
    }
}
