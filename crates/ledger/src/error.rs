use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Required input file is missing: {0}")]
    MissingData(PathBuf),

    #[error("Ledger is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Failed to parse ledger line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("I/O error while reading ledger: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error while reading ledger: {0}")]
    Csv(#[from] csv::Error),
}
