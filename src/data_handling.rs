//! Dataset containers for the comparison workflow.
//!
//! This module defines `TrainTestSplit`, the validated train/test container
//! consumed by the comparator, and a small shuffled-split helper for callers
//! that start from a single feature matrix and target vector.
use ndarray::{Array1, Array2, Axis};
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::error::ModelError;

/// A train/test split of features and target.
///
/// Construction validates the alignment invariants once, so downstream code
/// can rely on them: train features and train target have equal row counts,
/// likewise for the test side, and both sides share one feature schema.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<f64>,
    pub y_test: Array1<f64>,
}

impl TrainTestSplit {
    pub fn new(
        x_train: Array2<f64>,
        x_test: Array2<f64>,
        y_train: Array1<f64>,
        y_test: Array1<f64>,
    ) -> Result<Self, ModelError> {
        if x_train.nrows() != y_train.len() {
            return Err(ModelError::LengthMismatch {
                what: "training features and training target",
                left: x_train.nrows(),
                right: y_train.len(),
            });
        }
        if x_test.nrows() != y_test.len() {
            return Err(ModelError::LengthMismatch {
                what: "test features and test target",
                left: x_test.nrows(),
                right: y_test.len(),
            });
        }
        if x_train.ncols() != x_test.ncols() {
            return Err(ModelError::LengthMismatch {
                what: "train and test feature columns",
                left: x_train.ncols(),
                right: x_test.ncols(),
            });
        }
        Ok(TrainTestSplit {
            x_train,
            x_test,
            y_train,
            y_test,
        })
    }

    pub fn n_features(&self) -> usize {
        self.x_train.ncols()
    }
}

/// Shuffle rows and split into train/test, with `test_fraction` of the rows
/// (at least one) held out for testing.
pub fn train_test_split(
    x: &Array2<f64>,
    y: &Array1<f64>,
    test_fraction: f64,
) -> Result<TrainTestSplit, ModelError> {
    if x.nrows() != y.len() {
        return Err(ModelError::LengthMismatch {
            what: "features and target",
            left: x.nrows(),
            right: y.len(),
        });
    }
    let n = x.nrows();
    if n < 2 {
        return Err(ModelError::EmptyInput("train_test_split"));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(&mut thread_rng());

    let n_test = ((n as f64) * test_fraction).round().clamp(1.0, (n - 1) as f64) as usize;
    let (test_idx, train_idx) = indices.split_at(n_test);

    let take_rows = |idx: &[usize]| x.select(Axis(0), idx);
    let take_y = |idx: &[usize]| idx.iter().map(|&i| y[i]).collect::<Array1<f64>>();

    TrainTestSplit::new(
        take_rows(train_idx),
        take_rows(test_idx),
        take_y(train_idx),
        take_y(test_idx),
    )
}
