//! Small preprocessing utilities shared by the model wrappers.
//!
//! Provides a simple Scaler for per-column mean/std standardization. The
//! standardize-then-KNN pipeline fits the scaler on the training features and
//! reuses it to transform test features at predict time.

use ndarray::Array2;

use crate::error::ModelError;

/// Simple standard scaler (per-column mean/std).
#[derive(Clone, Debug)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl Scaler {
    /// Minimum stddev to avoid division by zero when transforming.
    const MIN_STD: f64 = 1e-9;
}

/// Fit a `Scaler` from an `Array2<f64>` where rows are samples and
/// columns are features.
pub fn fit_scaler(x: &Array2<f64>) -> Result<Scaler, ModelError> {
    let (nrows, ncols) = x.dim();
    if nrows == 0 || ncols == 0 {
        return Err(ModelError::EmptyInput("fit_scaler"));
    }

    let nrows_f = nrows as f64;
    let mut mean = vec![0.0f64; ncols];
    for row in x.rows() {
        for (c, v) in row.iter().enumerate() {
            mean[c] += v;
        }
    }
    for v in mean.iter_mut() {
        *v /= nrows_f;
    }

    let mut std = vec![0.0f64; ncols];
    for row in x.rows() {
        for (c, v) in row.iter().enumerate() {
            let d = v - mean[c];
            std[c] += d * d;
        }
    }
    for v in std.iter_mut() {
        *v = (*v / nrows_f).sqrt().max(Scaler::MIN_STD);
    }

    Ok(Scaler { mean, std })
}

/// Transform all rows using the provided `Scaler` and return a new matrix.
pub fn transform_all(x: &Array2<f64>, sc: &Scaler) -> Result<Array2<f64>, ModelError> {
    if sc.mean.len() != sc.std.len() {
        return Err(ModelError::LengthMismatch {
            what: "scaler means and scaler stds",
            left: sc.mean.len(),
            right: sc.std.len(),
        });
    }
    if x.ncols() != sc.mean.len() {
        return Err(ModelError::LengthMismatch {
            what: "scaler columns and input columns",
            left: sc.mean.len(),
            right: x.ncols(),
        });
    }
    let mut out = x.to_owned();
    for mut row in out.rows_mut() {
        for (c, v) in row.iter_mut().enumerate() {
            *v = (*v - sc.mean[c]) / sc.std[c];
        }
    }
    Ok(out)
}
