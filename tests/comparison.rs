//! Integration tests for the multi-model comparison routine.

use ndarray::{Array1, Array2};

use regbench::comparison::{fit_model, Candidate, ModelComparator};
use regbench::data_handling::TrainTestSplit;
use regbench::error::ModelError;
use regbench::models::factory::default_candidates;
use regbench::models::Regressor;

/// Test double: predicts a fixed value for every row, ignores training.
struct ConstantRegressor {
    value: f64,
}

impl Regressor for ConstantRegressor {
    fn fit(&mut self, _x: &Array2<f64>, _y: &Array1<f64>) -> Result<(), ModelError> {
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        Ok(Array1::from_elem(x.nrows(), self.value))
    }

    fn name(&self) -> &str {
        "Mock"
    }
}

struct FailingRegressor;

impl Regressor for FailingRegressor {
    fn fit(&mut self, _x: &Array2<f64>, _y: &Array1<f64>) -> Result<(), ModelError> {
        Err(ModelError::Backend("induced failure".to_string()))
    }

    fn predict(&self, _x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        Err(ModelError::Backend("induced failure".to_string()))
    }
}

fn tiny_split() -> TrainTestSplit {
    TrainTestSplit::new(
        Array2::zeros((3, 1)),
        Array2::zeros((3, 1)),
        Array1::from_vec(vec![4.0, 5.0, 6.0]),
        Array1::from_vec(vec![4.0, 5.0, 6.0]),
    )
    .unwrap()
}

#[test]
fn constant_mock_scores_match_hand_computation() {
    // predictions = [5,5,5] vs y_test = [4,5,6]:
    // RMSE = sqrt(2/3), R-Squared = 1 - 2/2 = 0
    let comparator = ModelComparator::new(vec![Candidate {
        label: "Mock".to_string(),
        model: Box::new(ConstantRegressor { value: 5.0 }),
    }]);
    let comparison = comparator.run(&tiny_split()).unwrap();

    assert_eq!(comparison.models.len(), 1);
    let rows = comparison.table.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "Mock");
    assert!((rows[0].rmse - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    assert!(rows[0].r_squared.abs() < 1e-12);
}

#[test]
fn table_rows_follow_input_order() {
    let labels = ["C", "A", "B"];
    let candidates: Vec<Candidate> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| Candidate {
            label: label.to_string(),
            model: Box::new(ConstantRegressor { value: i as f64 }),
        })
        .collect();

    let comparison = ModelComparator::new(candidates).run(&tiny_split()).unwrap();

    let got: Vec<&str> = comparison
        .table
        .rows()
        .iter()
        .map(|r| r.label.as_str())
        .collect();
    assert_eq!(got, labels);
    let fitted: Vec<&str> = comparison.models.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(fitted, labels);
}

#[test]
fn empty_candidate_list_yields_empty_table() {
    let comparison = ModelComparator::new(Vec::new()).run(&tiny_split()).unwrap();
    assert!(comparison.models.is_empty());
    assert!(comparison.table.is_empty());
}

#[test]
fn parallel_lists_of_unequal_length_fail_fast() {
    let models: Vec<Box<dyn Regressor>> = vec![
        Box::new(ConstantRegressor { value: 1.0 }),
        Box::new(ConstantRegressor { value: 2.0 }),
    ];
    let labels = vec!["only one".to_string()];

    let err = ModelComparator::from_parts(models, labels)
        .err()
        .expect("mismatched lists must be rejected");
    assert!(matches!(err, ModelError::LengthMismatch { .. }));
    assert!(err.to_string().contains("equal length"));
}

#[test]
fn one_failing_fit_aborts_the_whole_comparison() {
    let candidates = vec![
        Candidate {
            label: "ok".to_string(),
            model: Box::new(ConstantRegressor { value: 5.0 }),
        },
        Candidate {
            label: "broken".to_string(),
            model: Box::new(FailingRegressor),
        },
    ];
    let result = ModelComparator::new(candidates).run(&tiny_split());
    assert!(matches!(result, Err(ModelError::Backend(_))));
}

#[test]
fn fit_model_delegates_and_mutates_in_place() {
    let mut model = ConstantRegressor { value: 7.0 };
    let split = tiny_split();
    fit_model(&mut model, &split.x_train, &split.y_train).unwrap();
    let preds = model.predict(&split.x_test).unwrap();
    assert_eq!(preds, Array1::from_elem(3, 7.0));
}

#[test]
fn default_candidates_are_the_fixed_five_in_order() {
    let candidates = default_candidates();
    let labels: Vec<&str> = candidates.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Linear Regression",
            "K-Nearest Neighbors",
            "Decision Tree",
            "Random Forest",
            "Gradient Boosting"
        ]
    );
    for candidate in &candidates {
        assert_eq!(candidate.model.name(), candidate.label);
    }
}

#[test]
fn default_set_fits_and_scores_a_synthetic_problem() {
    // deterministic ramp over 4 features; y depends on the first two
    let n = 60;
    let values: Vec<f64> = (0..n * 4)
        .map(|i| ((i * 37) % 101) as f64 / 101.0)
        .collect();
    let x = Array2::from_shape_vec((n, 4), values).unwrap();
    let y: Array1<f64> = x
        .rows()
        .into_iter()
        .map(|row| 2.0 * row[0] - row[1])
        .collect();

    let split = TrainTestSplit::new(
        x.slice(ndarray::s![..45, ..]).to_owned(),
        x.slice(ndarray::s![45.., ..]).to_owned(),
        y.slice(ndarray::s![..45]).to_owned(),
        y.slice(ndarray::s![45..]).to_owned(),
    )
    .unwrap();

    let comparison = ModelComparator::with_defaults().run(&split).unwrap();
    assert_eq!(comparison.table.len(), 5);
    for row in comparison.table.rows() {
        assert!(row.rmse >= 0.0, "RMSE must be non-negative: {:?}", row);
        assert!(row.r_squared <= 1.0, "R-Squared must be <= 1: {:?}", row);
    }
}
