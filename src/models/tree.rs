use ndarray::{Array1, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_regressor::{
    DecisionTreeRegressor, DecisionTreeRegressorParameters,
};

use crate::error::ModelError;
use crate::importance::permutation_importance;
use crate::models::{to_dense_matrix, Regressor};

/// Single decision tree regressor (smartcore backend).
///
/// Feature importances are computed at fit time by permutation on the
/// training set, since the backend exposes no native importance attribute.
pub struct TreeRegressor {
    max_depth: Option<u16>,
    model: Option<DecisionTreeRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>>,
    importances: Option<Array1<f64>>,
}

impl TreeRegressor {
    pub fn new(max_depth: Option<u16>) -> Self {
        TreeRegressor {
            max_depth,
            model: None,
            importances: None,
        }
    }
}

impl Regressor for TreeRegressor {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
        let mut params = DecisionTreeRegressorParameters::default();
        if let Some(depth) = self.max_depth {
            params = params.with_max_depth(depth);
        }
        let model = DecisionTreeRegressor::fit(&to_dense_matrix(x), &y.to_vec(), params)?;
        self.model = Some(model);
        let importances = permutation_importance(|m| self.predict(m), x, y)?;
        self.importances = Some(importances);
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        let model = self
            .model
            .as_ref()
            .ok_or(ModelError::NotFitted("Decision Tree"))?;
        let preds = model.predict(&to_dense_matrix(x))?;
        Ok(Array1::from_vec(preds))
    }

    fn feature_importances(&self) -> Result<Array1<f64>, ModelError> {
        self.importances
            .clone()
            .ok_or(ModelError::NotFitted("Decision Tree"))
    }

    fn name(&self) -> &str {
        "Decision Tree"
    }
}
