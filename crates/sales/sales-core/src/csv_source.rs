//! CSV sales source.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use sales_api::LoadConfig;
use sales_spi::{Result, SalesError, SalesRecord, SalesSeries, SalesSource};

use crate::parse::{finish, parse_date, parse_sales};

/// Reads `date,sales` rows from a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvSalesSource {
    path: PathBuf,
    config: LoadConfig,
}

impl CsvSalesSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, LoadConfig::default())
    }

    pub fn with_config(path: impl Into<PathBuf>, config: LoadConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SalesSource for CsvSalesSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self) -> Result<SalesSeries> {
        let file = File::open(&self.path).map_err(|e| {
            SalesError::ReadError(format!("{}: {}", self.path.display(), e))
        })?;
        let series = read_csv(BufReader::new(file), &self.config)?;
        tracing::info!(
            path = %self.path.display(),
            records = series.len(),
            "loaded sales history"
        );
        Ok(series)
    }
}

/// Parse CSV sales rows from any reader.
pub fn read_csv<R: Read>(reader: R, config: &LoadConfig) -> Result<SalesSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| SalesError::CsvError(e.to_string()))?
        .clone();

    let date_idx = find_column(&headers, &config.date_column)?;
    let sales_idx = find_column(&headers, &config.sales_column)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| SalesError::CsvError(e.to_string()))?;
        let date = parse_date(row.get(date_idx).unwrap_or_default(), &config.date_format)?;
        let sales = parse_sales(row.get(sales_idx).unwrap_or_default())?;
        records.push(SalesRecord::new(date, sales));
    }

    finish(records, config)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| SalesError::MissingColumn(name.to_string()))
}
