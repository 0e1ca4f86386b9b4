//! # Vantage Forecast Features
//!
//! The feature builder for the monthly sales forecaster. It turns the raw
//! transaction ledger into a monthly aggregate and derives the three model
//! features from it:
//!
//! - `t` — months elapsed since the base month (the earliest month observed
//!   in the training data),
//! - `sin_12` / `cos_12` — the seasonal encoding of the month number over a
//!   full yearly cycle.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** pure computation over `core-types`; no I/O.
//! - **One encoder:** `feature_row` is the single place a feature vector is
//!   assembled. Trainer and consumer both call it, so the two encodings
//!   cannot drift apart.

pub mod frame;
pub mod monthly;

pub use frame::{build_feature_frame, feature_row, seasonal_pair};
pub use monthly::{aggregate_monthly, base_ordinal};

/// The ordered feature schema the model is trained on. Persisted inside the
/// model bundle and checked by the consumer before every prediction.
pub const MODEL_FEATURES: [&str; 3] = ["t", "sin_12", "cos_12"];

/// Name of the target column in the training frame.
pub const TARGET_COLUMN: &str = "sales";
