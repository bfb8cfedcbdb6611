//! # demand
//!
//! Command-line front end for the retail demand core.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use retail::anomaly::{AnomalyDetector, RollingDeviationDetector};
use retail::forecasting::{forecast_band, train_linear_model, ForecastEngine, ModelSlot};
use retail::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod export;

const DEFAULT_FILTER: &str = "demand=info,forecast_core=info";
const VERBOSE_FILTER: &str =
    "demand=debug,retail=debug,sales_core=debug,forecast_core=debug,anomaly_core=debug,stock_core=debug";

#[derive(Parser)]
#[command(name = "demand")]
#[command(about = "Retail demand forecasting, anomaly detection and stock advice", long_about = None)]
struct Cli {
    /// JSON configuration file; flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit the linear demand model on a sales history and save it
    Train {
        /// Sales history (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the model artifact
        #[arg(long)]
        model_out: Option<PathBuf>,

        /// L2 penalty on the feature coefficients
        #[arg(long)]
        ridge: Option<f64>,
    },

    /// Forecast demand for the days after the history
    Forecast {
        #[arg(short, long)]
        input: PathBuf,

        /// Trained model artifact
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Days to forecast
        #[arg(long)]
        horizon: Option<usize>,

        /// Output file (.json or .csv); stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List days that deviate from their trailing average
    Anomalies {
        #[arg(short, long)]
        input: PathBuf,

        /// Relative deviation that flags a day
        #[arg(short, long)]
        threshold: Option<f64>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Recommend a reorder quantity
    Stock {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        model: Option<PathBuf>,

        #[command(flatten)]
        stock: StockArgs,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Forecast, anomalies and stock advice in one JSON document
    Report {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        model: Option<PathBuf>,

        #[command(flatten)]
        stock: StockArgs,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct StockArgs {
    /// Units on hand
    #[arg(long)]
    current_stock: Option<u64>,

    /// Days until a new order arrives
    #[arg(long)]
    lead_time: Option<usize>,

    /// Safety margin in percent (0-50)
    #[arg(long)]
    safety_pct: Option<f64>,
}

impl StockArgs {
    fn params(&self, config: &RetailConfig) -> Result<StockParams> {
        config
            .stock
            .with_overrides(self.current_stock, self.lead_time, self.safety_pct)
            .context("invalid stock parameters")
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> Result<RetailConfig> {
    match path {
        Some(path) => RetailConfig::from_json_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display())),
        None => Ok(RetailConfig::default()),
    }
}

fn load_history(input: &Path, config: &RetailConfig) -> Result<SalesSeries> {
    let series = load_sales(input, config.load.clone())
        .with_context(|| format!("failed to load sales history {}", input.display()))?;
    tracing::info!(
        records = series.len(),
        first = ?series.first().map(|r| r.date),
        last = ?series.last().map(|r| r.date),
        "loaded sales history"
    );
    Ok(series)
}

fn model_slot(model: Option<PathBuf>, config: &RetailConfig) -> ModelSlot {
    match model {
        Some(path) => ModelSlot::new(path),
        None => ModelSlot::from_config(&config.model),
    }
}

fn run_train(
    input: PathBuf,
    model_out: Option<PathBuf>,
    ridge: Option<f64>,
    config: &RetailConfig,
) -> Result<()> {
    let series = load_history(&input, config)?;

    let mut training = config.training.clone();
    if let Some(ridge) = ridge {
        training.ridge = ridge;
    }

    let model = train_linear_model(&series, &training).context("training failed")?;
    let path = model_out.unwrap_or_else(|| config.model.path.clone());
    model
        .save(&path)
        .with_context(|| format!("failed to save model to {}", path.display()))?;

    if let Some(summary) = &model.summary {
        tracing::info!(
            samples = summary.samples,
            r_squared = summary.r_squared,
            path = %path.display(),
            "model saved"
        );
    }
    export::write_json(&model, None)
}

fn run_forecast(
    input: PathBuf,
    model: Option<PathBuf>,
    horizon: Option<usize>,
    output: Option<PathBuf>,
    config: &RetailConfig,
) -> Result<()> {
    let series = load_history(&input, config)?;
    let slot = model_slot(model, config);
    let model = slot.get().context("model unavailable")?;

    let mut forecast_config = config.forecast.clone();
    if let Some(horizon) = horizon {
        forecast_config.horizon = horizon;
    }
    let engine = ForecastEngine::new(forecast_config.clone())?;
    let result = engine
        .forecast(&series, model.as_ref())
        .context("forecast failed")?;
    let band = forecast_band(&result, forecast_config.band_pct);

    match output.as_deref() {
        Some(path) if export::is_csv(path) => export::write_forecast_csv(&band, path),
        path => export::write_json(
            &export::ForecastOutput {
                forecast: &result,
                band: &band,
            },
            path,
        ),
    }
}

fn run_anomalies(
    input: PathBuf,
    threshold: Option<f64>,
    output: Option<PathBuf>,
    config: &RetailConfig,
) -> Result<()> {
    let series = load_history(&input, config)?;

    let mut anomaly_config = config.anomaly.clone();
    if let Some(threshold) = threshold {
        anomaly_config.threshold = threshold;
    }
    let detector = RollingDeviationDetector::from_config(anomaly_config)?;
    let report = AnomalyReport::new(detector.detect(&series));

    tracing::info!(
        total = report.total_anomalies,
        affected_days = report.affected_days,
        "anomaly scan finished"
    );

    match output.as_deref() {
        Some(path) if export::is_csv(path) => export::write_anomalies_csv(&report.records, path),
        path => export::write_json(&report, path),
    }
}

fn run_stock(
    input: PathBuf,
    model: Option<PathBuf>,
    stock: StockArgs,
    output: Option<PathBuf>,
    config: &RetailConfig,
) -> Result<()> {
    json_only(output.as_deref())?;
    let params = stock.params(config)?;
    let series = load_history(&input, config)?;
    let slot = model_slot(model, config);
    let model = slot.get().context("model unavailable")?;

    let engine = ForecastEngine::new(config.forecast.clone())?;
    let result = engine
        .forecast(&series, model.as_ref())
        .context("forecast failed")?;
    let advice = retail::recommend_stock(&result, &params);

    match advice.status() {
        StockStatus::Reorder => tracing::info!(
            units = advice.recommended_reorder,
            "stock low, reorder recommended"
        ),
        StockStatus::Sufficient => tracing::info!("stock is sufficient"),
    }

    export::write_json(&advice, output.as_deref())
}

fn run_report(
    input: PathBuf,
    model: Option<PathBuf>,
    stock: StockArgs,
    output: Option<PathBuf>,
    config: &RetailConfig,
) -> Result<()> {
    json_only(output.as_deref())?;
    let params = stock.params(config)?;
    let series = load_history(&input, config)?;
    let slot = model_slot(model, config);
    let model = slot.get().context("model unavailable")?;

    let report = DashboardReport::build_with(&series, model.as_ref(), &params, config)
        .context("failed to build report")?;

    export::write_json(&report, output.as_deref())
}

fn json_only(output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) if export::is_csv(path) => {
            bail!("CSV output is available for forecast and anomalies only")
        }
        _ => Ok(()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Train {
            input,
            model_out,
            ridge,
        } => run_train(input, model_out, ridge, &config),

        Commands::Forecast {
            input,
            model,
            horizon,
            output,
        } => run_forecast(input, model, horizon, output, &config),

        Commands::Anomalies {
            input,
            threshold,
            output,
        } => run_anomalies(input, threshold, output, &config),

        Commands::Stock {
            input,
            model,
            stock,
            output,
        } => run_stock(input, model, stock, output, &config),

        Commands::Report {
            input,
            model,
            stock,
            output,
        } => run_report(input, model, stock, output, &config),
    }
}
