//! Sales Data API
//!
//! Configuration types and builders for loading sales history.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use sales_spi::{Result, SalesError, SalesRecord, SalesSeries, SalesSource};

/// Default date column header.
pub const DEFAULT_DATE_COLUMN: &str = "date";
/// Default sales column header.
pub const DEFAULT_SALES_COLUMN: &str = "sales";
/// Default `chrono` date format.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// How to read a sales file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Header of the date column (matched case-insensitively)
    pub date_column: String,
    /// Header of the sales column (matched case-insensitively)
    pub sales_column: String,
    /// `chrono` format string for the date column
    pub date_format: String,
    /// Drop days with zero sales (store closed)
    pub drop_zero_sales: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            date_column: DEFAULT_DATE_COLUMN.to_string(),
            sales_column: DEFAULT_SALES_COLUMN.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            drop_zero_sales: false,
        }
    }
}

impl LoadConfig {
    /// Create a configuration with custom column headers.
    pub fn new(date_column: &str, sales_column: &str) -> Self {
        Self {
            date_column: date_column.to_string(),
            sales_column: sales_column.to_string(),
            ..Self::default()
        }
    }

    /// Start a builder from defaults.
    pub fn builder() -> LoadConfigBuilder {
        LoadConfigBuilder::new()
    }
}

/// Builder for LoadConfig.
#[derive(Debug, Default)]
pub struct LoadConfigBuilder {
    date_column: Option<String>,
    sales_column: Option<String>,
    date_format: Option<String>,
    drop_zero_sales: bool,
}

impl LoadConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date column header.
    pub fn date_column(mut self, name: &str) -> Self {
        self.date_column = Some(name.to_string());
        self
    }

    /// Set the sales column header.
    pub fn sales_column(mut self, name: &str) -> Self {
        self.sales_column = Some(name.to_string());
        self
    }

    /// Set the date format.
    pub fn date_format(mut self, format: &str) -> Self {
        self.date_format = Some(format.to_string());
        self
    }

    /// Drop zero-sales days while loading.
    pub fn drop_zero_sales(mut self, drop: bool) -> Self {
        self.drop_zero_sales = drop;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<LoadConfig> {
        let config = LoadConfig {
            date_column: self
                .date_column
                .unwrap_or_else(|| DEFAULT_DATE_COLUMN.to_string()),
            sales_column: self
                .sales_column
                .unwrap_or_else(|| DEFAULT_SALES_COLUMN.to_string()),
            date_format: self
                .date_format
                .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
            drop_zero_sales: self.drop_zero_sales,
        };

        if config.date_column.trim().is_empty() {
            return Err(SalesError::MissingColumn("<empty date column>".to_string()));
        }
        if config.sales_column.trim().is_empty() {
            return Err(SalesError::MissingColumn("<empty sales column>".to_string()));
        }

        Ok(config)
    }
}
