//! Circle geometry type.

use circlepack_core::{Error, Result};
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier for a geometry entry.
pub type GeometryId = String;

/// A circle to be packed, described by its diameter.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CircleGeometry {
    /// Unique identifier.
    id: GeometryId,

    /// Circle diameter.
    diameter: f64,

    /// Number of copies to place.
    quantity: usize,
}

impl CircleGeometry {
    /// Creates a new circle geometry with the given ID and diameter.
    pub fn new(id: impl Into<GeometryId>, diameter: f64) -> Self {
        Self {
            id: id.into(),
            diameter,
            quantity: 1,
        }
    }

    /// Creates a circle geometry from a radius.
    pub fn from_radius(id: impl Into<GeometryId>, radius: f64) -> Self {
        Self::new(id, 2.0 * radius)
    }

    /// Sets the quantity to place.
    pub fn with_quantity(mut self, n: usize) -> Self {
        self.quantity = n;
        self
    }

    /// Returns the identifier.
    pub fn id(&self) -> &GeometryId {
        &self.id
    }

    /// Returns the diameter.
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Returns the radius.
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Returns the quantity to place.
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Returns the area of one circle instance.
    pub fn measure(&self) -> f64 {
        let r = self.radius();
        PI * r * r
    }

    /// Validates the geometry.
    pub fn validate(&self) -> Result<()> {
        if !self.diameter.is_finite() || self.diameter <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "Diameter for '{}' must be positive (got {})",
                self.id, self.diameter
            )));
        }

        if self.quantity == 0 {
            return Err(Error::InvalidGeometry(format!(
                "Quantity for '{}' must be at least 1",
                self.id
            )));
        }

        Ok(())
    }
}
