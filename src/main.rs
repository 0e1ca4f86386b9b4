use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::Config;
use core_types::MonthKey;
use forecast_features::{aggregate_monthly, base_ordinal, build_feature_frame};
use forecaster::{predict, train, ModelBundle, TrainerParams};
use polars::prelude::*;
use reporting::{ReportEngine, ReportFilter};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Vantage sales analytics application.
fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = load_optional_config(&cli.config)?;

    match cli.command {
        Commands::BuildFeatures(args) => handle_build_features(args, config.as_ref()),
        Commands::Train(args) => handle_train(args, config.as_ref()),
        Commands::Predict(args) => handle_predict(args, config.as_ref()),
        Commands::Report(args) => handle_report(args, config.as_ref()),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Sales analytics and monthly forecasting for an e-commerce transaction ledger.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the monthly feature dataset from the ledger and save it as Parquet.
    BuildFeatures(BuildFeaturesArgs),
    /// Train the sales forecaster and persist the model bundle.
    Train(TrainArgs),
    /// Predict total sales for a target calendar month.
    Predict(PredictArgs),
    /// Compute aggregate sales metrics over a filtered slice of the ledger.
    Report(ReportArgs),
}

#[derive(Parser)]
struct BuildFeaturesArgs {
    /// The raw transaction ledger (CSV). Falls back to the configured path.
    #[arg(long)]
    ledger: Option<PathBuf>,

    /// The output file path for the Parquet dataset.
    #[arg(long, short)]
    output: PathBuf,
}

#[derive(Parser)]
struct TrainArgs {
    /// The raw transaction ledger (CSV). Falls back to the configured path.
    #[arg(long)]
    ledger: Option<PathBuf>,

    /// The output file path for the model bundle. Falls back to the configured path.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct PredictArgs {
    /// The model bundle to load. Falls back to the configured path.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Target year (e.g., 2012).
    #[arg(long)]
    year: i32,

    /// Target month number (1-12).
    #[arg(long)]
    month: u32,
}

#[derive(Parser)]
struct ReportArgs {
    /// The raw transaction ledger (CSV). Falls back to the configured path.
    #[arg(long)]
    ledger: Option<PathBuf>,

    /// Inclusive start of the invoice-date range (format: YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Inclusive end of the invoice-date range (format: YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Keep only these countries (repeatable).
    #[arg(long = "country")]
    countries: Vec<String>,

    /// Keep only these product descriptions (repeatable).
    #[arg(long = "product")]
    products: Vec<String>,

    /// How many best-selling products to show.
    #[arg(long)]
    top: Option<usize>,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

/// A missing config file is fine as long as every needed path is given on
/// the command line; a config file that exists but fails to parse or
/// validate is an error the user must see, not a silent fallback.
fn load_optional_config(path: &str) -> Result<Option<Config>> {
    if !std::path::Path::new(path).exists() {
        tracing::debug!(path, "no configuration file; relying on command-line paths");
        return Ok(None);
    }

    let config = configuration::load_config_from(path)
        .with_context(|| format!("configuration file {path} is invalid"))?;
    Ok(Some(config))
}

fn resolve_ledger_path(arg: Option<PathBuf>, config: Option<&Config>) -> Result<PathBuf> {
    arg.or_else(|| config.map(|c| c.data.ledger_path.clone()))
        .context("no --ledger given and no config.toml to fall back to")
}

fn resolve_model_path(arg: Option<PathBuf>, config: Option<&Config>) -> Result<PathBuf> {
    arg.or_else(|| config.map(|c| c.data.model_path.clone()))
        .context("no model path given and no config.toml to fall back to")
}

/// The handler for the `build-features` command.
fn handle_build_features(args: BuildFeaturesArgs, config: Option<&Config>) -> Result<()> {
    println!("--- Building Monthly Feature Dataset ---");

    let ledger_path = resolve_ledger_path(args.ledger, config)?;
    let transactions = ledger::load_transactions(&ledger_path)
        .with_context(|| format!("failed to load ledger from {ledger_path:?}"))?;
    println!("Loaded {} transactions.", transactions.len());

    let records = aggregate_monthly(&transactions);
    let base = base_ordinal(&records)
        .context("ledger contains no aggregable months; nothing to build")?;
    let mut df = build_feature_frame(&records, base)?;
    println!(
        "Aggregated {} months (base month: {}).",
        records.len(),
        MonthKey::from_ordinal(base)
    );

    let mut output_file = std::fs::File::create(&args.output)
        .with_context(|| format!("failed to create output file at {:?}", &args.output))?;
    ParquetWriter::new(&mut output_file).finish(&mut df)?;

    println!("--- Feature Dataset Saved to {:?} ---", args.output);
    Ok(())
}

/// The handler for the `train` command.
fn handle_train(args: TrainArgs, config: Option<&Config>) -> Result<()> {
    println!("--- Training Sales Forecaster ---");

    let ledger_path = resolve_ledger_path(args.ledger, config)?;
    let model_path = resolve_model_path(args.output, config)?;
    let params = config
        .map(|c| TrainerParams {
            n_trees: c.forecast.n_trees,
            seed: c.forecast.seed,
        })
        .unwrap_or_default();

    let transactions = ledger::load_transactions(&ledger_path)
        .with_context(|| format!("failed to load ledger from {ledger_path:?}"))?;
    println!("Loaded {} transactions.", transactions.len());

    let records = aggregate_monthly(&transactions);
    println!("Aggregated {} months.", records.len());

    let bundle = train(&records, &params).context("training failed")?;
    bundle
        .save(&model_path)
        .with_context(|| format!("failed to persist model bundle at {model_path:?}"))?;

    println!(
        "--- Model Bundle Saved to {:?} (base month: {}) ---",
        model_path,
        MonthKey::from_ordinal(bundle.base_month_ordinal)
    );
    Ok(())
}

/// The handler for the `predict` command.
fn handle_predict(args: PredictArgs, config: Option<&Config>) -> Result<()> {
    let model_path = resolve_model_path(args.model, config)?;
    let target = MonthKey::new(args.year, args.month)?;

    let bundle = ModelBundle::load(&model_path)
        .with_context(|| format!("failed to load model bundle from {model_path:?}"))?;
    let forecast = predict(&bundle, target)?;

    println!("Predicted sales for {target}: {forecast:.2}");
    Ok(())
}

/// The handler for the `report` command.
fn handle_report(args: ReportArgs, config: Option<&Config>) -> Result<()> {
    let ledger_path = resolve_ledger_path(args.ledger, config)?;
    let top_products = args
        .top
        .or_else(|| config.map(|c| c.reporting.top_products))
        .unwrap_or(10);

    let filter = ReportFilter {
        from: args.from,
        to: args.to,
        countries: (!args.countries.is_empty()).then(|| args.countries.into_iter().collect()),
        products: (!args.products.is_empty()).then(|| args.products.into_iter().collect()),
    };

    let transactions = ledger::load_transactions(&ledger_path)
        .with_context(|| format!("failed to load ledger from {ledger_path:?}"))?;
    let report = ReportEngine::new().calculate(&transactions, &filter, top_products)?;

    let mut summary = Table::new();
    summary.set_header(vec!["Metric", "Value"]);
    summary.add_row(vec!["Total Sales".to_string(), format!("{:.2}", report.total_sales)]);
    summary.add_row(vec!["Total Orders".to_string(), report.total_orders.to_string()]);
    summary.add_row(vec!["Unique Customers".to_string(), report.unique_customers.to_string()]);
    summary.add_row(vec![
        "Average Order Value".to_string(),
        report
            .average_order_value
            .map(|v| format!("{v:.2}"))
            .unwrap_or_else(|| "n/a".to_string()),
    ]);
    summary.add_row(vec!["Line Items".to_string(), report.line_items.to_string()]);
    println!("{summary}");

    if !report.top_products.is_empty() {
        let mut products = Table::new();
        products.set_header(vec!["Top Product", "Sales"]);
        for (product, sales) in &report.top_products {
            products.add_row(vec![product.clone(), format!("{sales:.2}")]);
        }
        println!("{products}");
    }

    if !report.sales_by_country.is_empty() {
        let mut countries = Table::new();
        countries.set_header(vec!["Country", "Sales"]);
        for (country, sales) in &report.sales_by_country {
            countries.add_row(vec![country.clone(), format!("{sales:.2}")]);
        }
        println!("{countries}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn absent_config_file_falls_through_to_flags() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = load_optional_config(path.to_str().unwrap()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn malformed_config_file_is_surfaced_not_swallowed() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "[data]\nledger_path = 42\n").unwrap();

        let result = load_optional_config(path.to_str().unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn resolution_still_prefers_explicit_flags() {
        let path = resolve_ledger_path(Some(PathBuf::from("explicit.csv")), None).unwrap();
        assert_eq!(path, PathBuf::from("explicit.csv"));

        assert!(resolve_ledger_path(None, None).is_err());
    }
}
