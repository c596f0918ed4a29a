//! Table parsers for quantity/diameter input files.

use crate::dataset::{Dataset, Item};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported file format: {0} (expected .csv or .json)")]
    UnsupportedFormat(String),

    #[error("No valid rows in input ({skipped} rows skipped)")]
    NoValidRows {
        /// Number of rows that were skipped as malformed.
        skipped: usize,
    },
}

/// A row that could not be parsed and was skipped.
#[derive(Debug, Clone)]
pub struct RowIssue {
    /// 1-based line (CSV) or item index (JSON) of the offending row.
    pub line: usize,
    /// Human-readable reason.
    pub reason: String,
}

/// A dataset together with the rows that were skipped while loading it.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    /// The surviving rows.
    pub dataset: Dataset,
    /// Malformed rows, in input order.
    pub issues: Vec<RowIssue>,
}

/// Parser for quantity/diameter tables.
///
/// CSV input is semicolon-separated with a quantity column followed by a
/// diameter column and an optional label column. The first line is treated
/// as a header when it does not parse as a data row. JSON input is a
/// [`Dataset`] document.
#[derive(Debug)]
pub struct TableParser {
    delimiter: char,
}

impl Default for TableParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TableParser {
    /// Creates a new parser with the default `;` delimiter.
    pub fn new() -> Self {
        Self { delimiter: ';' }
    }

    /// Sets the CSV field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Loads a dataset from a file, dispatching on the extension.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<LoadedDataset, LoadError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset".to_string());

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let content = fs::read_to_string(path)?;
        match extension.as_str() {
            "csv" => self.parse_csv(&name, &content),
            "json" => self.parse_json(&content),
            other => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Parses a semicolon-separated quantity/diameter table.
    ///
    /// Malformed rows are skipped and reported; the load fails only when no
    /// valid row remains.
    pub fn parse_csv(&self, name: &str, content: &str) -> Result<LoadedDataset, LoadError> {
        let mut items = Vec::new();
        let mut issues = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match self.parse_csv_row(trimmed, line_no) {
                Ok(item) => items.push(item),
                Err(reason) => {
                    // The first line is commonly a header; skip it quietly.
                    if line_no == 1 {
                        continue;
                    }
                    log::warn!("skipping row {}: {}", line_no, reason);
                    issues.push(RowIssue {
                        line: line_no,
                        reason,
                    });
                }
            }
        }

        if items.is_empty() {
            return Err(LoadError::NoValidRows {
                skipped: issues.len(),
            });
        }

        Ok(LoadedDataset {
            dataset: Dataset {
                name: name.to_string(),
                items,
            },
            issues,
        })
    }

    /// Parses a JSON dataset document, skipping invalid items.
    pub fn parse_json(&self, content: &str) -> Result<LoadedDataset, LoadError> {
        let raw: Dataset = serde_json::from_str(content)?;

        let mut items = Vec::new();
        let mut issues = Vec::new();
        for (idx, item) in raw.items.into_iter().enumerate() {
            match validate_item(&item) {
                Ok(()) => items.push(item),
                Err(reason) => {
                    log::warn!("skipping item {}: {}", idx, reason);
                    issues.push(RowIssue {
                        line: idx + 1,
                        reason,
                    });
                }
            }
        }

        if items.is_empty() {
            return Err(LoadError::NoValidRows {
                skipped: issues.len(),
            });
        }

        Ok(LoadedDataset {
            dataset: Dataset {
                name: raw.name,
                items,
            },
            issues,
        })
    }

    fn parse_csv_row(&self, row: &str, line_no: usize) -> Result<Item, String> {
        let fields: Vec<&str> = row.split(self.delimiter).map(str::trim).collect();
        if fields.len() < 2 {
            return Err(format!(
                "expected at least 2 fields separated by '{}', got {}",
                self.delimiter,
                fields.len()
            ));
        }

        let quantity: usize = fields[0]
            .parse()
            .map_err(|_| format!("quantity '{}' is not a whole number", fields[0]))?;
        let diameter: f64 = fields[1]
            .parse()
            .map_err(|_| format!("diameter '{}' is not a number", fields[1]))?;

        let item = Item {
            id: fields
                .get(2)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .unwrap_or_else(|| format!("row{}", line_no)),
            quantity,
            diameter,
        };
        validate_item(&item)?;
        Ok(item)
    }
}

fn validate_item(item: &Item) -> Result<(), String> {
    if item.quantity == 0 {
        return Err(format!("quantity for '{}' must be at least 1", item.id));
    }
    if !item.diameter.is_finite() || item.diameter <= 0.0 {
        return Err(format!(
            "diameter for '{}' must be positive (got {})",
            item.id, item.diameter
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_csv_with_header() {
        let csv = "quantity;diameter\n3;4.5\n1;10;big\n";
        let loaded = TableParser::new().parse_csv("wires", csv).unwrap();

        assert_eq!(loaded.dataset.name, "wires");
        assert_eq!(loaded.dataset.items.len(), 2);
        assert!(loaded.issues.is_empty());

        assert_eq!(loaded.dataset.items[0].quantity, 3);
        assert_relative_eq!(loaded.dataset.items[0].diameter, 4.5);
        assert_eq!(loaded.dataset.items[0].id, "row2");
        assert_eq!(loaded.dataset.items[1].id, "big");
    }

    #[test]
    fn test_parse_csv_without_header() {
        let csv = "2;3.0\n1;5.0\n";
        let loaded = TableParser::new().parse_csv("t", csv).unwrap();
        assert_eq!(loaded.dataset.items.len(), 2);
    }

    #[test]
    fn test_parse_csv_skips_bad_rows() {
        let csv = "quantity;diameter\n2;3.0\nnot;numbers\n0;4.0\n1;-2.0\n1;5.0\n";
        let loaded = TableParser::new().parse_csv("t", csv).unwrap();

        assert_eq!(loaded.dataset.items.len(), 2);
        assert_eq!(loaded.issues.len(), 3);
        assert_eq!(loaded.issues[0].line, 3);
        assert_eq!(loaded.issues[1].line, 4);
        assert_eq!(loaded.issues[2].line, 5);
    }

    #[test]
    fn test_parse_csv_no_valid_rows() {
        let csv = "quantity;diameter\nbad;row\n";
        let err = TableParser::new().parse_csv("t", csv).unwrap_err();
        assert!(matches!(err, LoadError::NoValidRows { skipped: 1 }));
    }

    #[test]
    fn test_parse_csv_custom_delimiter() {
        let csv = "2,3.0\n";
        let loaded = TableParser::new()
            .with_delimiter(',')
            .parse_csv("t", csv)
            .unwrap();
        assert_eq!(loaded.dataset.items[0].quantity, 2);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "name": "bundle",
            "items": [
                { "id": "M4", "quantity": 3, "diameter": 4.0 },
                { "id": "M6", "quantity": 1, "diameter": 6.0 }
            ]
        }"#;

        let loaded = TableParser::new().parse_json(json).unwrap();
        assert_eq!(loaded.dataset.name, "bundle");
        assert_eq!(loaded.dataset.items.len(), 2);
        assert_eq!(loaded.dataset.info().total_circles, 4);
    }

    #[test]
    fn test_parse_json_skips_invalid_items() {
        let json = r#"{
            "name": "bundle",
            "items": [
                { "id": "ok", "quantity": 1, "diameter": 2.0 },
                { "id": "bad", "quantity": 0, "diameter": 2.0 }
            ]
        }"#;

        let loaded = TableParser::new().parse_json(json).unwrap();
        assert_eq!(loaded.dataset.items.len(), 1);
        assert_eq!(loaded.issues.len(), 1);
    }

    #[test]
    fn test_parse_json_malformed_document() {
        let err = TableParser::new().parse_json("not json").unwrap_err();
        assert!(matches!(err, LoadError::JsonError(_)));
    }
}
