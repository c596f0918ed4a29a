//! Dataset types for quantity/diameter tables.

use circlepack_solvers::CircleGeometry;
use serde::{Deserialize, Serialize};

/// Information about a loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Dataset name (file stem or the name field of a JSON dataset).
    pub name: String,
    /// Number of item rows.
    pub item_types: usize,
    /// Total circles after quantity expansion.
    pub total_circles: usize,
    /// Largest diameter in the dataset.
    pub max_diameter: f64,
    /// Smallest diameter in the dataset.
    pub min_diameter: f64,
}

/// A parsed dataset of circles to pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset name.
    pub name: String,
    /// Item rows.
    pub items: Vec<Item>,
}

/// One row of the dataset: a number of identical circles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Row label.
    pub id: String,
    /// Number of circles of this diameter.
    pub quantity: usize,
    /// Circle diameter.
    pub diameter: f64,
}

impl Dataset {
    /// Returns dataset information.
    pub fn info(&self) -> DatasetInfo {
        let total_circles: usize = self.items.iter().map(|i| i.quantity).sum();
        let max_diameter = self
            .items
            .iter()
            .map(|i| i.diameter)
            .fold(0.0_f64, f64::max);
        let min_diameter = self
            .items
            .iter()
            .map(|i| i.diameter)
            .fold(f64::INFINITY, f64::min);

        DatasetInfo {
            name: self.name.clone(),
            item_types: self.items.len(),
            total_circles,
            max_diameter,
            min_diameter: if min_diameter.is_finite() {
                min_diameter
            } else {
                0.0
            },
        }
    }

    /// Converts the dataset to solver geometries, one per row.
    pub fn to_geometries(&self) -> Vec<CircleGeometry> {
        self.items
            .iter()
            .map(|item| {
                CircleGeometry::new(item.id.clone(), item.diameter).with_quantity(item.quantity)
            })
            .collect()
    }

    /// Labels for each expanded circle instance, in expansion order.
    pub fn instance_labels(&self) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|item| std::iter::repeat(item.id.clone()).take(item.quantity))
            .collect()
    }
}
