//! Configuration for invex
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for an invex instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Source Configuration
    // -------------------------------------------------------------------------
    /// Path to the delimited data file to load
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Schema Configuration
    // -------------------------------------------------------------------------
    /// Header name of the unique-id column (matched case-insensitively)
    pub id_column: String,

    /// Header name of the display-name column (matched case-insensitively)
    pub name_column: String,

    /// Header name of the category-list column (matched case-insensitively)
    pub category_column: String,

    // -------------------------------------------------------------------------
    // Parsing Configuration
    // -------------------------------------------------------------------------
    /// Separator between category labels inside the category field
    pub category_separator: char,

    /// Placeholder substituted for empty or missing category segments
    pub sentinel_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("amazon_dataset.csv"),
            id_column: "uniq_id".to_string(),
            name_column: "product_name".to_string(),
            category_column: "category".to_string(),
            category_separator: '|',
            sentinel_label: "NA".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the unique-id column header name
    pub fn id_column(mut self, name: impl Into<String>) -> Self {
        self.config.id_column = name.into();
        self
    }

    /// Set the display-name column header name
    pub fn name_column(mut self, name: impl Into<String>) -> Self {
        self.config.name_column = name.into();
        self
    }

    /// Set the category-list column header name
    pub fn category_column(mut self, name: impl Into<String>) -> Self {
        self.config.category_column = name.into();
        self
    }

    /// Set the separator between category labels
    pub fn category_separator(mut self, sep: char) -> Self {
        self.config.category_separator = sep;
        self
    }

    /// Set the placeholder for empty category segments
    pub fn sentinel_label(mut self, label: impl Into<String>) -> Self {
        self.config.sentinel_label = label.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
