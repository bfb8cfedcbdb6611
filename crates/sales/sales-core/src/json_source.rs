//! JSON sales source.
//!
//! Accepts either a bare array of `{date, sales}` objects or an object whose
//! `records` (or `data`) key holds such an array.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use sales_api::LoadConfig;
use sales_spi::{Result, SalesError, SalesRecord, SalesSeries, SalesSource};
use serde_json::Value;

use crate::parse::{finish, parse_date, parse_sales};

/// Reads `{date, sales}` objects from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonSalesSource {
    path: PathBuf,
    config: LoadConfig,
}

impl JsonSalesSource {
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

impl SalesSource for JsonSalesSource {
    fn name(&self) -> &str {
        "json"
    }

    fn load(&self) -> Result<SalesSeries> {
        let file = File::open(&self.path).map_err(|e| {
            SalesError::ReadError(format!("{}: {}", self.path.display(), e))
        })?;
        let series = read_json(BufReader::new(file), &self.config)?;
        tracing::info!(
            path = %self.path.display(),
            records = series.len(),
            "loaded sales history"
        );
        Ok(series)
    }
}

/// Parse JSON sales objects from any reader.
pub fn read_json<R: Read>(reader: R, config: &LoadConfig) -> Result<SalesSeries> {
    let json: Value =
        serde_json::from_reader(reader).map_err(|e| SalesError::JsonError(e.to_string()))?;

    let rows = match &json {
        Value::Array(rows) => rows,
        Value::Object(obj) => ["records", "data"]
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_array))
            .ok_or_else(|| SalesError::JsonError("expected an array of records".to_string()))?,
        _ => {
            return Err(SalesError::JsonError(
                "expected an array of records".to_string(),
            ))
        }
    };

    let records = rows
        .iter()
        .map(|row| read_row(row, config))
        .collect::<Result<Vec<_>>>()?;

    finish(records, config)
}

fn read_row(row: &Value, config: &LoadConfig) -> Result<SalesRecord> {
    let date = field(row, &config.date_column)?
        .as_str()
        .ok_or_else(|| SalesError::InvalidDate {
            value: row.to_string(),
            format: config.date_format.clone(),
        })?;
    let date = parse_date(date, &config.date_format)?;

    let sales = match field(row, &config.sales_column)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| SalesError::InvalidSales(n.to_string()))?,
        Value::String(s) => parse_sales(s)?,
        other => return Err(SalesError::InvalidSales(other.to_string())),
    };

    Ok(SalesRecord::new(date, sales))
}

fn field<'a>(row: &'a Value, name: &str) -> Result<&'a Value> {
    row.as_object()
        .and_then(|obj| {
            obj.iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
        .ok_or_else(|| SalesError::MissingColumn(name.to_string()))
}
