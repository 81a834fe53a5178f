use ndarray::{Array1, Array2};

use crate::error::ModelError;

/// A small trait abstraction for the regression models compared by the
/// benchmarking routine. It centralizes the fit/predict contract in the
/// `models` module so backend wrappers can live next to model code.
pub trait Regressor {
    /// Fit the model on training features (rows are samples) and target.
    /// Shape or backend failures propagate unchanged.
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError>;

    /// Predict the target for each row of `x`. Requires a prior `fit`.
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError>;

    /// Per-feature importance scores, one non-negative value per input
    /// feature column. Only tree/ensemble wrappers provide these; other
    /// variants surface a descriptive missing-capability error.
    fn feature_importances(&self) -> Result<Array1<f64>, ModelError> {
        Err(ModelError::ImportancesUnavailable(self.name().to_string()))
    }

    /// Human readable name for the model
    fn name(&self) -> &str {
        "regressor"
    }
}
