use crate::bundle::ModelBundle;
use crate::error::ForecastError;
use core_types::MonthKey;
use forecast_features::{feature_row, MODEL_FEATURES};
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Produces the point forecast for a target calendar month.
///
/// The target's month ordinal minus the bundle's stored base ordinal gives
/// `t`; it may be negative (before the training window) or large (far past
/// it). The model extrapolates with no bound and no confidence interval —
/// forecast quality degrades outside the training window by design.
///
/// Before scoring, the bundle's persisted feature schema is checked against
/// the schema this consumer would build; any drift (a retrained bundle with
/// different feature order or count) aborts with `SchemaMismatch` instead of
/// silently producing a wrong prediction.
pub fn predict(bundle: &ModelBundle, target: MonthKey) -> Result<f64, ForecastError> {
    let built: Vec<String> = MODEL_FEATURES.iter().map(|s| s.to_string()).collect();
    if bundle.feature_names != built {
        return Err(ForecastError::SchemaMismatch {
            stored: bundle.feature_names.clone(),
            built,
        });
    }

    let row = feature_row(target, bundle.base_month_ordinal);
    let x = DenseMatrix::new(1, row.len(), row.to_vec(), false)
        .map_err(|e| ForecastError::Model(e.to_string()))?;

    let predictions = bundle
        .model
        .predict(&x)
        .map_err(|e| ForecastError::Model(e.to_string()))?;

    predictions
        .first()
        .copied()
        .ok_or_else(|| ForecastError::Model("model returned no prediction".to_string()))
}
