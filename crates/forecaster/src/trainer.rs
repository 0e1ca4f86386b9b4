use crate::bundle::ModelBundle;
use crate::error::ForecastError;
use core_types::MonthlyRecord;
use forecast_features::{base_ordinal, build_feature_frame, TARGET_COLUMN};
use ndarray::Array2;
use polars::prelude::*;
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Training parameters for the baseline forecaster.
///
/// The defaults are the model of record: 200 trees and a fixed seed so two
/// trainings on identical input produce identical bundles. Everything else
/// stays at the library defaults; a random forest was chosen for robustness
/// to the tiny sample (one row per month) and insensitivity to feature
/// scaling, not for speed.
#[derive(Debug, Clone)]
pub struct TrainerParams {
    pub n_trees: usize,
    pub seed: u64,
}

impl Default for TrainerParams {
    fn default() -> Self {
        Self {
            n_trees: 200,
            seed: 42,
        }
    }
}

/// Fits the regressor on the monthly aggregate and returns the bundle.
///
/// Deliberately a minimal baseline: no train/test split, no cross-validation,
/// no hyperparameter search. Fewer than one distinct month is an
/// `InsufficientData` error, never a degenerate bundle.
pub fn train(
    records: &[MonthlyRecord],
    params: &TrainerParams,
) -> Result<ModelBundle, ForecastError> {
    let base_month_ordinal = base_ordinal(records).ok_or_else(|| {
        ForecastError::InsufficientData("ledger contains no aggregable months".to_string())
    })?;

    let df = build_feature_frame(records, base_month_ordinal)
        .map_err(|e| ForecastError::Frame(e.to_string()))?;

    // Split the frame into the feature matrix and the target, the feature
    // names coming straight from the frame so the persisted schema is
    // exactly what the model saw.
    let x_df = df
        .drop(TARGET_COLUMN)
        .map_err(|e| ForecastError::Frame(e.to_string()))?;
    let feature_names: Vec<String> = x_df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let x_ndarray: Array2<f64> = x_df
        .to_ndarray::<Float64Type>(IndexOrder::C)
        .map_err(|e| ForecastError::Frame(e.to_string()))?;
    let y: Vec<f64> = df
        .column(TARGET_COLUMN)
        .map_err(|e| ForecastError::Frame(e.to_string()))?
        .f64()
        .map_err(|e| ForecastError::Frame(e.to_string()))?
        .into_no_null_iter()
        .collect();

    let values = x_ndarray
        .as_slice()
        .ok_or_else(|| ForecastError::Frame("feature matrix is not contiguous".to_string()))?
        .to_vec();
    let x_matrix = DenseMatrix::new(x_ndarray.nrows(), x_ndarray.ncols(), values, false)
        .map_err(|e| ForecastError::Model(e.to_string()))?;

    let forest_params = RandomForestRegressorParameters::default()
        .with_n_trees(params.n_trees)
        .with_seed(params.seed);

    tracing::info!(
        months = records.len(),
        n_trees = params.n_trees,
        seed = params.seed,
        base_month_ordinal,
        "fitting sales forecaster"
    );
    let model = RandomForestRegressor::fit(&x_matrix, &y, forest_params)
        .map_err(|e| ForecastError::Model(e.to_string()))?;

    Ok(ModelBundle {
        model,
        feature_names,
        base_month_ordinal,
    })
}
