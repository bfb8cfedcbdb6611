//! JSON and CSV output.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use retail::anomaly::AnomalyRecord;
use retail::forecasting::{ForecastBand, ForecastResult};
use serde::Serialize;

pub fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Pretty JSON to `path`, or stdout when no path is given.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            serde_json::to_writer_pretty(file, value).context("failed to write JSON")?;
            tracing::info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, value).context("failed to write JSON")?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

/// JSON body of `demand forecast`: the points plus their display band.
#[derive(Serialize)]
pub struct ForecastOutput<'a> {
    pub forecast: &'a ForecastResult,
    pub band: &'a ForecastBand,
}

#[derive(Serialize)]
struct ForecastRow {
    date: String,
    predicted_sales: f64,
    lower: f64,
    upper: f64,
}

#[derive(Serialize)]
struct AnomalyRow {
    date: String,
    sales: f64,
    rolling_7: f64,
    deviation_ratio: f64,
    direction: &'static str,
}

pub fn write_forecast_csv(band: &ForecastBand, path: &Path) -> Result<()> {
    let rows = band.points.iter().map(|p| ForecastRow {
        date: p.date.format("%Y-%m-%d").to_string(),
        predicted_sales: p.forecast,
        lower: p.lower,
        upper: p.upper,
    });
    write_csv(rows, path)
}

pub fn write_anomalies_csv(records: &[AnomalyRecord], path: &Path) -> Result<()> {
    let rows = records.iter().map(|r| AnomalyRow {
        date: r.date.format("%Y-%m-%d").to_string(),
        sales: r.sales,
        rolling_7: r.rolling_7,
        deviation_ratio: r.deviation_ratio,
        direction: match r.direction() {
            retail::anomaly::AnomalyDirection::Spike => "spike",
            retail::anomaly::AnomalyDirection::Drop => "drop",
        },
    });
    write_csv(rows, path)
}

fn write_csv<R: Serialize>(rows: impl Iterator<Item = R>, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for row in rows {
        writer.serialize(row).context("failed to write CSV row")?;
    }
    writer.flush()?;
    tracing::info!(path = %path.display(), "output written");
    Ok(())
}
