use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Not enough data to train: {0}")]
    InsufficientData(String),

    #[error("Feature schema mismatch: bundle was trained on {stored:?}, consumer builds {built:?}")]
    SchemaMismatch {
        stored: Vec<String>,
        built: Vec<String>,
    },

    #[error("Model bundle not found at {0}")]
    MissingData(PathBuf),

    #[error("Failed to (de)serialize model bundle: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Error in the feature frame: {0}")]
    Frame(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
