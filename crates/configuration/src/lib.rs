use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DataPaths, ForecastSettings, ReportingSettings};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the configuration file,
/// deserializes it into our strongly-typed `Config` struct, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from("config.toml")
}

/// Same as `load_config`, but from an explicit file path. The CLI uses this
/// so tests and ad hoc runs can point at a different file.
pub fn load_config_from(path: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(path))
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(
        path,
        ledger_path = %config.data.ledger_path.display(),
        model_path = %config.data.model_path.display(),
        n_trees = config.forecast.n_trees,
        seed = config.forecast.seed,
        "loaded configuration"
    );
    Ok(config)
}
