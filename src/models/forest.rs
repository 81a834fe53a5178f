use ndarray::{Array1, Array2};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::ModelError;
use crate::importance::permutation_importance;
use crate::models::{to_dense_matrix, Regressor};

/// Random forest regressor (smartcore backend).
///
/// Feature importances are computed at fit time by permutation on the
/// training set, since the backend exposes no native importance attribute.
pub struct ForestRegressor {
    n_trees: u16,
    model: Option<RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>>,
    importances: Option<Array1<f64>>,
}

impl ForestRegressor {
    pub fn new(n_trees: u16) -> Self {
        ForestRegressor {
            n_trees,
            model: None,
            importances: None,
        }
    }
}

impl Regressor for ForestRegressor {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
        let params = RandomForestRegressorParameters::default().with_n_trees(self.n_trees.into());
        let model = RandomForestRegressor::fit(&to_dense_matrix(x), &y.to_vec(), params)?;
        self.model = Some(model);
        let importances = permutation_importance(|m| self.predict(m), x, y)?;
        self.importances = Some(importances);
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        let model = self
            .model
            .as_ref()
            .ok_or(ModelError::NotFitted("Random Forest"))?;
        let preds = model.predict(&to_dense_matrix(x))?;
        Ok(Array1::from_vec(preds))
    }

    fn feature_importances(&self) -> Result<Array1<f64>, ModelError> {
        self.importances
            .clone()
            .ok_or(ModelError::NotFitted("Random Forest"))
    }

    fn name(&self) -> &str {
        "Random Forest"
    }
}
