//! Integration tests for feature importance pairing, selection and the
//! tree/ensemble importance capability.

use ndarray::{Array1, Array2};

use regbench::error::ModelError;
use regbench::importance::FeatureImportances;
use regbench::models::linear::LinearRegressor;
use regbench::models::tree::TreeRegressor;
use regbench::models::Regressor;

fn ramp_dataset() -> (Array2<f64>, Array1<f64>) {
    // column 0 carries the signal, column 1 is uncorrelated noise
    let x = Array2::from_shape_vec(
        (20, 2),
        (0..20)
            .flat_map(|i| [i as f64, ((i * 13) % 7) as f64])
            .collect(),
    )
    .unwrap();
    let y = x.column(0).mapv(|v| 3.0 * v);
    (x, y)
}

#[test]
fn tree_importance_ranks_informative_feature_first() {
    let (x, y) = ramp_dataset();
    let mut model = TreeRegressor::new(None);
    model.fit(&x, &y).unwrap();

    let importances = model.feature_importances().unwrap();
    assert_eq!(importances.len(), 2);
    assert!(importances.iter().all(|v| *v >= 0.0));
    assert!(
        importances[0] > importances[1],
        "signal column should outrank noise: {:?}",
        importances
    );
}

#[test]
fn linear_model_has_no_importances() {
    let (x, y) = ramp_dataset();
    let mut model = LinearRegressor::new();
    model.fit(&x, &y).unwrap();

    let err = model.feature_importances().unwrap_err();
    assert!(matches!(err, ModelError::ImportancesUnavailable(_)));
    assert!(err.to_string().contains("Linear Regression"));

    // pairing with names surfaces the same capability error
    let names = vec!["a".to_string(), "b".to_string()];
    assert!(FeatureImportances::from_model(&model, &names).is_err());
}

#[test]
fn pairing_with_wrong_name_count_fails_fast() {
    let (x, y) = ramp_dataset();
    let mut model = TreeRegressor::new(None);
    model.fit(&x, &y).unwrap();

    let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let err = FeatureImportances::from_model(&model, &names).unwrap_err();
    assert!(matches!(err, ModelError::LengthMismatch { .. }));
}

#[test]
fn importances_before_fit_report_not_fitted() {
    let model = TreeRegressor::new(None);
    assert!(matches!(
        model.feature_importances(),
        Err(ModelError::NotFitted(_))
    ));
}

#[test]
fn top_selection_matches_paired_values() {
    let fi = FeatureImportances::new(
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
        vec![0.1, 0.5, 0.3],
    )
    .unwrap();

    assert_eq!(
        fi.top(20),
        vec![
            ("a".to_string(), 0.1),
            ("c".to_string(), 0.3),
            ("b".to_string(), 0.5)
        ]
    );
    assert_eq!(fi.top(1), vec![("b".to_string(), 0.5)]);
}
