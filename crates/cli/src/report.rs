//! Result reporting.

use circlepack_core::PackResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Presentation view of a packing result.
///
/// Pure read of the solver output: no new geometry is computed here beyond
/// per-circle diameters (2 × radius).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackReport {
    /// Dataset name.
    pub dataset: String,
    /// Strategy that produced the result.
    pub strategy: String,
    /// Container radius.
    pub container_radius: f64,
    /// Container diameter.
    pub container_diameter: f64,
    /// Area density of the layout.
    pub density: f64,
    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
    /// Whether the layout satisfies the non-overlap and containment
    /// invariants within 1e-6.
    pub layout_valid: bool,
    /// One row per circle, in input-index order.
    pub circles: Vec<CircleRow>,
}

/// One circle of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleRow {
    /// Input index.
    pub index: usize,
    /// Label of the source row.
    pub id: String,
    /// Circle diameter.
    pub diameter: f64,
    /// Center x coordinate.
    pub x: f64,
    /// Center y coordinate.
    pub y: f64,
}

impl PackReport {
    /// Builds a report from a solver result.
    ///
    /// `labels` carries one label per expanded circle instance (see
    /// [`Dataset::instance_labels`](crate::dataset::Dataset::instance_labels));
    /// missing labels fall back to the circle index.
    pub fn new(dataset: impl Into<String>, labels: &[String], result: &PackResult) -> Self {
        let circles = result
            .placements
            .iter()
            .map(|p| CircleRow {
                index: p.index,
                id: labels
                    .get(p.index)
                    .cloned()
                    .unwrap_or_else(|| p.index.to_string()),
                diameter: p.diameter(),
                x: p.x(),
                y: p.y(),
            })
            .collect();

        Self {
            dataset: dataset.into(),
            strategy: result.strategy.clone().unwrap_or_else(|| "unknown".to_string()),
            container_radius: result.container_radius,
            container_diameter: result.container_diameter(),
            density: result.density(),
            computation_time_ms: result.computation_time_ms,
            layout_valid: result.is_valid_layout(1e-6),
            circles,
        }
    }

    /// Prints a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("Dataset:            {}", self.dataset);
        println!("Strategy:           {}", self.strategy);
        println!("Circles:            {}", self.circles.len());
        println!("Container radius:   {:.3}", self.container_radius);
        println!("Container diameter: {:.3}", self.container_diameter);
        println!("Density:            {:.1}%", self.density * 100.0);
        println!("Time:               {}ms", self.computation_time_ms);
        println!(
            "Layout check:       {}",
            if self.layout_valid { "OK" } else { "VIOLATED" }
        );
        println!();
        println!("{:<6} {:<12} {:>10} {:>12} {:>12}", "index", "id", "φ", "x", "y");
        for row in &self.circles {
            println!(
                "{:<6} {:<12} {:>10.3} {:>12.3} {:>12.3}",
                row.index, row.id, row.diameter, row.x, row.y
            );
        }
    }

    /// Serializes the report to a pretty JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Saves the report as JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Renders the per-circle table as semicolon-separated values.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("index;id;diameter;x;y\n");
        for row in &self.circles {
            out.push_str(&format!(
                "{};{};{};{};{}\n",
                row.index, row.id, row.diameter, row.x, row.y
            ));
        }
        out
    }

    /// Saves the per-circle table as CSV.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        fs::write(path, self.to_csv())?;
        Ok(())
    }
}
