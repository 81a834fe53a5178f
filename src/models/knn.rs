use ndarray::{Array1, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::metrics::distance::euclidian::Euclidian;
use smartcore::neighbors::knn_regressor::{KNNRegressor, KNNRegressorParameters};

use crate::error::ModelError;
use crate::models::{to_dense_matrix, Regressor};
use crate::preprocessing::{fit_scaler, transform_all, Scaler};

/// Standardize-then-KNN pipeline: a per-column mean/std scaler fitted on the
/// training features, feeding a k-nearest-neighbors regressor. The scaler is
/// reused at predict time so test features see the training statistics.
pub struct KnnRegressor {
    k: usize,
    scaler: Option<Scaler>,
    model: Option<KNNRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>, Euclidian<f64>>>,
}

impl KnnRegressor {
    pub fn new(k: usize) -> Self {
        KnnRegressor {
            k,
            scaler: None,
            model: None,
        }
    }
}

impl Regressor for KnnRegressor {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
        let scaler = fit_scaler(x)?;
        let scaled = transform_all(x, &scaler)?;
        let model = KNNRegressor::fit(
            &to_dense_matrix(&scaled),
            &y.to_vec(),
            KNNRegressorParameters::default().with_k(self.k),
        )?;
        self.scaler = Some(scaler);
        self.model = Some(model);
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        let scaler = self
            .scaler
            .as_ref()
            .ok_or(ModelError::NotFitted("K-Nearest Neighbors"))?;
        let model = self
            .model
            .as_ref()
            .ok_or(ModelError::NotFitted("K-Nearest Neighbors"))?;
        let scaled = transform_all(x, scaler)?;
        let preds = model.predict(&to_dense_matrix(&scaled))?;
        Ok(Array1::from_vec(preds))
    }

    fn name(&self) -> &str {
        "K-Nearest Neighbors"
    }
}
