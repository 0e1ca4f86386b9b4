//! # Vantage Forecaster
//!
//! The monthly sales forecasting model: training, persistence, and
//! prediction.
//!
//! ## Architectural Principles
//!
//! - **Two independent operations:** `trainer::train` (fit and return a
//!   bundle) and `predictor::predict` (load-side, single-shot scoring) share
//!   no state. Nothing trains implicitly on load.
//! - **The bundle is the contract:** a `ModelBundle` carries the fitted
//!   regressor together with the exact feature schema and base month ordinal
//!   needed to reproduce its input encoding. Consumers verify the schema
//!   before scoring and never mutate the bundle; retraining overwrites it
//!   wholesale.
//!
//! ## Public API
//!
//! - `ModelBundle`: the persisted (model, feature schema, base ordinal) unit.
//! - `train` / `TrainerParams`: fit the baseline regressor.
//! - `predict`: point forecast for a target calendar month.
//! - `ForecastError`: the specific error types this crate can return.

pub mod bundle;
pub mod error;
pub mod predictor;
pub mod trainer;

pub use bundle::{ModelBundle, SalesModel};
pub use error::ForecastError;
pub use predictor::predict;
pub use trainer::{train, TrainerParams};
