use crate::error::ForecastError;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::path::Path;
use tempfile::NamedTempFile;

/// The concrete regressor type persisted in the bundle.
pub type SalesModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// The persisted unit combining the fitted model with the exact feature
/// schema and time origin needed to reproduce its input encoding at
/// prediction time.
///
/// Created once by the trainer, read-only thereafter. There is no versioning
/// or update path: retraining replaces the file wholesale.
#[derive(Serialize, Deserialize)]
pub struct ModelBundle {
    pub model: SalesModel,
    /// The ordered feature names the model was trained on.
    pub feature_names: Vec<String>,
    /// The minimum month ordinal observed at training time; the zero point
    /// of the `t` feature. Predictions made against any other origin are
    /// silently wrong, which is why it travels with the model.
    pub base_month_ordinal: i64,
}

impl ModelBundle {
    /// Writes the bundle atomically: bincode into a temp file in the
    /// destination directory, then rename over the target. An interrupted
    /// write leaves the previous bundle (or nothing) in place, never a torn
    /// file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ForecastError> {
        let path = path.as_ref();
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = match dir {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new_in(".")?,
        };

        bincode::serialize_into(tmp.as_file_mut(), self)?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(path).map_err(|e| ForecastError::Io(e.error))?;

        tracing::info!(path = %path.display(), "persisted model bundle");
        Ok(())
    }

    /// Loads a previously persisted bundle.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ForecastError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ForecastError::MissingData(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let bundle: ModelBundle = bincode::deserialize_from(file)?;

        tracing::debug!(
            path = %path.display(),
            features = ?bundle.feature_names,
            base_month_ordinal = bundle.base_month_ordinal,
            "loaded model bundle"
        );
        Ok(bundle)
    }
}
