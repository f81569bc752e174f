//! Configuration for the reformatting pipeline.
//!
//! [`FormatConfig`] describes the tabular shape expected from a scanned
//! document: the ordered column names, which column holds free-text
//! descriptions, and which columns should receive numeric repair. Configs
//! can be created programmatically or loaded from TOML/JSON files, and
//! `discover()` walks parent directories for a `scantab.toml`.

use crate::{Result, ScantabError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Expected output shape for a reformatted document.
///
/// Column names are comma-separated in the external representation; the
/// position of a name in `format` is its column index. Names referenced by
/// `description_column_name` or `number_column_names` that do not appear in
/// `format` resolve to nothing and are silently skipped.
///
/// # Example
///
/// ```rust
/// use scantab::FormatConfig;
///
/// let config = FormatConfig {
///     format: "pid,owner,area,value".to_string(),
///     description_column_name: "owner".to_string(),
///     number_column_names: "area,value".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(config.column_count(), 4);
/// assert_eq!(config.description_index(), Some(1));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Comma-separated list of column names; defines both the column count
    /// and each column's identity/position.
    pub format: String,

    /// Name of the free-text description column.
    #[serde(default)]
    pub description_column_name: String,

    /// Name of the identifier column. Declared for config-file
    /// compatibility; the reformatting algorithm does not consult it.
    #[serde(default)]
    pub id_column_name: String,

    /// Comma-separated list of column names to numerically repair.
    #[serde(default)]
    pub number_column_names: String,

    /// Suffix appended to the description field of every valid line.
    #[serde(default)]
    pub append_to_description: Option<String>,

    /// Skip all processing and return the raw OCR text unchanged.
    #[serde(default)]
    pub raw: bool,
}

impl FormatConfig {
    /// Ordered column names parsed from `format`.
    pub fn columns(&self) -> Vec<&str> {
        self.format.split(',').collect()
    }

    /// Number of columns the reformatter will target.
    pub fn column_count(&self) -> usize {
        self.columns().len()
    }

    /// Position of the description column in `format`, if present.
    ///
    /// Index 0 is a valid position: a description column in first place is
    /// found like any other.
    pub fn description_index(&self) -> Option<usize> {
        self.columns()
            .iter()
            .position(|name| *name == self.description_column_name)
    }

    /// Column indexes to numerically repair, in the order listed by
    /// `number_column_names`. Names absent from `format` are dropped.
    pub fn number_column_indexes(&self) -> Vec<usize> {
        let columns = self.columns();
        self.number_column_names
            .split(',')
            .filter_map(|name| columns.iter().position(|col| *col == name))
            .collect()
    }

    /// Check that the config describes at least one column.
    ///
    /// # Errors
    ///
    /// Returns `ScantabError::Validation` if `format` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.format.is_empty() {
            return Err(ScantabError::validation(
                "format must name at least one column (comma-separated)",
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ScantabError::Validation` if the file cannot be read or is
    /// not valid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ScantabError::validation(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            ScantabError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e))
        })
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ScantabError::Validation` if the file cannot be read or is
    /// not valid JSON.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ScantabError::validation(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ScantabError::validation(format!("Invalid JSON in {}: {}", path.as_ref().display(), e))
        })
    }

    /// Discover a configuration file in parent directories.
    ///
    /// Searches for `scantab.toml` in the current directory and each parent.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file exists up to the filesystem root
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(ScantabError::Io)?;

        loop {
            let candidate = current.join("scantab.toml");
            if candidate.exists() {
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_config() -> FormatConfig {
        FormatConfig {
            format: "pid,owner,area,value".to_string(),
            description_column_name: "owner".to_string(),
            id_column_name: "pid".to_string(),
            number_column_names: "area,value".to_string(),
            append_to_description: None,
            raw: false,
        }
    }

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert!(config.format.is_empty());
        assert!(!config.raw);
        assert!(config.append_to_description.is_none());
    }

    #[test]
    fn test_columns_and_count() {
        let config = sample_config();
        assert_eq!(config.columns(), vec!["pid", "owner", "area", "value"]);
        assert_eq!(config.column_count(), 4);
    }

    #[test]
    fn test_description_index_found() {
        let config = sample_config();
        assert_eq!(config.description_index(), Some(1));
    }

    #[test]
    fn test_description_index_first_column() {
        let mut config = sample_config();
        config.description_column_name = "pid".to_string();
        assert_eq!(config.description_index(), Some(0));
    }

    #[test]
    fn test_description_index_missing() {
        let mut config = sample_config();
        config.description_column_name = "notes".to_string();
        assert_eq!(config.description_index(), None);

        config.description_column_name = String::new();
        assert_eq!(config.description_index(), None);
    }

    #[test]
    fn test_number_column_indexes() {
        let config = sample_config();
        assert_eq!(config.number_column_indexes(), vec![2, 3]);
    }

    #[test]
    fn test_number_column_indexes_unknown_names_dropped() {
        let mut config = sample_config();
        config.number_column_names = "area,acreage,value".to_string();
        assert_eq!(config.number_column_indexes(), vec![2, 3]);

        config.number_column_names = String::new();
        assert!(config.number_column_indexes().is_empty());
    }

    #[test]
    fn test_number_column_names_matched_verbatim() {
        let mut config = sample_config();
        // Stray whitespace means no match; the entry is skipped, not trimmed.
        config.number_column_names = " area, value".to_string();
        assert!(config.number_column_indexes().is_empty());
    }

    #[test]
    fn test_validate() {
        assert!(sample_config().validate().is_ok());

        let config = FormatConfig::default();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ScantabError::Validation { .. }));
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scantab.toml");
        fs::write(
            &path,
            r#"
format = "pid,description,value"
description_column_name = "description"
number_column_names = "value"
append_to_description = "page7"
"#,
        )
        .unwrap();

        let config = FormatConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.column_count(), 3);
        assert_eq!(config.description_index(), Some(1));
        assert_eq!(config.number_column_indexes(), vec![2]);
        assert_eq!(config.append_to_description.as_deref(), Some("page7"));
        assert!(!config.raw);
    }

    #[test]
    fn test_from_toml_file_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scantab.toml");
        fs::write(&path, "format = [not toml").unwrap();

        let err = FormatConfig::from_toml_file(&path).unwrap_err();
        assert!(matches!(err, ScantabError::Validation { .. }));
    }

    #[test]
    fn test_from_toml_file_missing() {
        let err = FormatConfig::from_toml_file("/nonexistent/scantab.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scantab.json");
        fs::write(
            &path,
            r#"{"format": "a,b", "number_column_names": "b", "raw": true}"#,
        )
        .unwrap();

        let config = FormatConfig::from_json_file(&path).unwrap();
        assert_eq!(config.column_count(), 2);
        assert!(config.raw);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = sample_config();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.format, config.format);
        assert_eq!(parsed.number_column_names, config.number_column_names);
    }
}
