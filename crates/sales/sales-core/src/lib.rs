//! Sales Data Core
//!
//! File-backed sales sources and load-time cleaning.

mod csv_source;
mod json_source;
mod parse;

use std::path::Path;

use sales_api::LoadConfig;
use sales_spi::{Result, SalesSeries, SalesSource};

pub use csv_source::{read_csv, CsvSalesSource};
pub use json_source::{read_json, JsonSalesSource};
pub use parse::drop_closed_days;

/// Pick a source for `path` by extension: `.json` reads JSON, anything else CSV.
pub fn open_source(path: &Path, config: LoadConfig) -> Box<dyn SalesSource> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "json" => Box::new(JsonSalesSource::with_config(path, config)),
        _ => Box::new(CsvSalesSource::with_config(path, config)),
    }
}

/// Load a sales file, auto-detecting its format.
pub fn load_sales(path: &Path, config: LoadConfig) -> Result<SalesSeries> {
    open_source(path, config).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_open_source_by_extension() {
        let json = open_source(&PathBuf::from("history.JSON"), LoadConfig::default());
        assert_eq!(json.name(), "json");

        let csv = open_source(&PathBuf::from("history.csv"), LoadConfig::default());
        assert_eq!(csv.name(), "csv");

        let unknown = open_source(&PathBuf::from("history"), LoadConfig::default());
        assert_eq!(unknown.name(), "csv");
    }
}
