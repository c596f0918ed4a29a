//! Table loading and reporting for the CirclePack CLI
//!
//! This crate provides:
//! - Dataset types for quantity/diameter tables
//! - CSV and JSON loaders with per-row error reporting
//! - Result reporting (terminal summary, JSON, CSV)

pub mod dataset;
pub mod loader;
pub mod report;

pub use dataset::{Dataset, DatasetInfo, Item};
pub use loader::{LoadError, LoadedDataset, RowIssue, TableParser};
pub use report::PackReport;
