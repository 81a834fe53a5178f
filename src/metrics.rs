//! Regression scoring metrics used by the comparator.
//!
//! RMSE is the square root of the mean squared error (non-negative, lower is
//! better). R-Squared is the coefficient of determination (at most 1; negative
//! when the model is worse than predicting the mean).
use ndarray::Array1;

use crate::error::ModelError;

fn check_aligned(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Result<(), ModelError> {
    if y_true.len() != y_pred.len() {
        return Err(ModelError::LengthMismatch {
            what: "true target and predictions",
            left: y_true.len(),
            right: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(ModelError::EmptyInput("metric computation"));
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Result<f64, ModelError> {
    check_aligned(y_true, y_pred)?;
    let n = y_true.len() as f64;
    let sum: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    Ok(sum / n)
}

pub fn root_mean_squared_error(
    y_true: &Array1<f64>,
    y_pred: &Array1<f64>,
) -> Result<f64, ModelError> {
    Ok(mean_squared_error(y_true, y_pred)?.sqrt())
}

/// Coefficient of determination: 1 - SS_res / SS_tot.
///
/// A constant true target (SS_tot = 0) scores 0.0.
pub fn r_squared(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Result<f64, ModelError> {
    check_aligned(y_true, y_pred)?;
    let mean: f64 = y_true.iter().sum::<f64>() / y_true.len() as f64;
    let ss_tot: f64 = y_true.iter().map(|t| (t - mean).powi(2)).sum();
    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();

    if ss_tot == 0.0 {
        return Ok(0.0);
    }
    Ok(1.0 - ss_res / ss_tot)
}
