use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;
use ndarray::{Array1, Array2};

use crate::error::ModelError;
use crate::importance::permutation_importance;
use crate::models::Regressor;

/// Gradient Boosting Decision Tree (GBDT) regressor, trained with squared
/// error loss. The backend works in f32, so features and targets are cast on
/// the way in and predictions cast back on the way out.
pub struct GbdtRegressor {
    max_depth: u32,
    num_boost_round: usize,
    shrinkage: f32,
    model: Option<GBDT>,
    importances: Option<Array1<f64>>,
}

impl GbdtRegressor {
    pub fn new(max_depth: u32, num_boost_round: usize, shrinkage: f32) -> Self {
        GbdtRegressor {
            max_depth,
            num_boost_round,
            shrinkage,
            model: None,
            importances: None,
        }
    }
}

fn row_features(row: ndarray::ArrayView1<f64>) -> Vec<f32> {
    row.iter().map(|v| *v as f32).collect()
}

impl Regressor for GbdtRegressor {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
        if x.nrows() != y.len() {
            return Err(ModelError::LengthMismatch {
                what: "training features and training target",
                left: x.nrows(),
                right: y.len(),
            });
        }
        if x.nrows() == 0 {
            return Err(ModelError::EmptyInput("gbdt fit"));
        }

        let mut config = Config::new();
        config.set_feature_size(x.ncols());
        config.set_max_depth(self.max_depth);
        config.set_iterations(self.num_boost_round);
        config.set_shrinkage(self.shrinkage);
        config.set_loss("SquaredError");
        config.set_debug(false);
        config.set_training_optimization_level(2);

        let mut model = GBDT::new(&config);

        let mut train: DataVec = x
            .rows()
            .into_iter()
            .zip(y.iter())
            .map(|(row, &target)| Data::new_training_data(row_features(row), 1.0, target as f32, None))
            .collect();

        model.fit(&mut train);
        self.model = Some(model);

        let importances = permutation_importance(|m| self.predict(m), x, y)?;
        self.importances = Some(importances);
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        let model = self
            .model
            .as_ref()
            .ok_or(ModelError::NotFitted("Gradient Boosting"))?;
        let test: DataVec = x
            .rows()
            .into_iter()
            .map(|row| Data::new_test_data(row_features(row), None))
            .collect();
        let preds = model.predict(&test);
        Ok(Array1::from_vec(preds.into_iter().map(f64::from).collect()))
    }

    fn feature_importances(&self) -> Result<Array1<f64>, ModelError> {
        self.importances
            .clone()
            .ok_or(ModelError::NotFitted("Gradient Boosting"))
    }

    fn name(&self) -> &str {
        "Gradient Boosting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gbdt_fits_a_linear_signal() {
        // target tracks the first feature; second feature is noise
        let x = Array2::from_shape_vec(
            (10, 2),
            vec![
                0.0, 0.3, 1.0, -0.1, 2.0, 0.2, 3.0, 0.4, 4.0, -0.3, 5.0, 0.1, 6.0, -0.2, 7.0, 0.0,
                8.0, 0.3, 9.0, -0.1,
            ],
        )
        .unwrap();
        let y = x.column(0).mapv(|v| 2.0 * v + 1.0);

        let mut model = GbdtRegressor::new(3, 30, 0.3);
        model.fit(&x, &y).unwrap();

        let preds = model.predict(&x).unwrap();
        assert_eq!(preds.len(), x.nrows());
        assert!(preds.iter().all(|p| p.is_finite()));

        let imps = model.feature_importances().unwrap();
        assert_eq!(imps.len(), 2);
        assert!(imps.iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn predict_before_fit_errors() {
        let model = GbdtRegressor::new(3, 10, 0.1);
        let x = Array2::<f64>::zeros((2, 2));
        assert!(matches!(
            model.predict(&x),
            Err(ModelError::NotFitted(_))
        ));
    }
}
