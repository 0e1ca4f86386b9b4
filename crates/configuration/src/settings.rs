use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataPaths,
    pub forecast: ForecastSettings,
    pub reporting: ReportingSettings,
}

/// Locations of the two files the pipeline shares: the raw ledger it reads
/// and the model bundle it writes/reads.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    /// The raw transaction ledger (CSV export).
    pub ledger_path: PathBuf,
    /// Where the trained model bundle lives.
    pub model_path: PathBuf,
}

/// Parameters for the baseline sales forecaster.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSettings {
    /// Number of trees in the random forest. 200 is the model of record.
    pub n_trees: usize,
    /// Fixed RNG seed so retraining on identical input reproduces the bundle.
    pub seed: u64,
}

/// Defaults for the sales report.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingSettings {
    /// How many best-selling products the report keeps.
    pub top_products: usize,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.forecast.n_trees == 0 {
            return Err(ConfigError::ValidationError(
                "forecast.n_trees must be at least 1".to_string(),
            ));
        }
        if self.reporting.top_products == 0 {
            return Err(ConfigError::ValidationError(
                "reporting.top_products must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
