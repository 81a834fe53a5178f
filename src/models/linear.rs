use ndarray::{Array1, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{LinearRegression, LinearRegressionParameters};

use crate::error::ModelError;
use crate::models::{to_dense_matrix, Regressor};

/// Ordinary least squares linear regression (smartcore backend).
pub struct LinearRegressor {
    model: Option<LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>>,
}

impl LinearRegressor {
    pub fn new() -> Self {
        LinearRegressor { model: None }
    }
}

impl Default for LinearRegressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Regressor for LinearRegressor {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
        let model = LinearRegression::fit(
            &to_dense_matrix(x),
            &y.to_vec(),
            LinearRegressionParameters::default(),
        )?;
        self.model = Some(model);
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        let model = self
            .model
            .as_ref()
            .ok_or(ModelError::NotFitted("Linear Regression"))?;
        let preds = model.predict(&to_dense_matrix(x))?;
        Ok(Array1::from_vec(preds))
    }

    fn name(&self) -> &str {
        "Linear Regression"
    }
}
