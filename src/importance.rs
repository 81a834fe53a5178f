//! Feature importance pairing and selection.
//!
//! `FeatureImportances` is an explicit paired structure of feature names and
//! scores, validated for equal length at construction so downstream selection
//! and plotting can never silently misalign labels. `permutation_importance`
//! scores features for backends that expose no native importance attribute.
use std::cmp::Ordering;

use ndarray::{Array1, Array2};
use rand::seq::SliceRandom;
use rand::thread_rng;
use rayon::prelude::*;

use crate::error::ModelError;
use crate::metrics::mean_squared_error;
use crate::models::Regressor;

/// Feature names paired positionally with importance scores.
///
/// Invariant: `names[i]` labels `scores[i]`, and both sequences have the same
/// length. Construction fails fast on mismatch.
#[derive(Debug, Clone)]
pub struct FeatureImportances {
    names: Vec<String>,
    scores: Vec<f64>,
}

impl FeatureImportances {
    pub fn new(names: Vec<String>, scores: Vec<f64>) -> Result<Self, ModelError> {
        if names.len() != scores.len() {
            return Err(ModelError::LengthMismatch {
                what: "feature names and importance scores",
                left: names.len(),
                right: scores.len(),
            });
        }
        Ok(FeatureImportances { names, scores })
    }

    /// Pair a fitted model's importances with caller-supplied feature names.
    ///
    /// Surfaces the model's missing-capability error unchanged for variants
    /// that expose no importances (e.g. the linear model).
    pub fn from_model(model: &dyn Regressor, names: &[String]) -> Result<Self, ModelError> {
        let scores = model.feature_importances()?;
        Self::new(names.to_vec(), scores.to_vec())
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Select the `k` highest-scoring features, returned in ascending score
    /// order. Uses a stable sort, so ties at the cutoff keep their original
    /// positional order. Fewer than `k` features yields all of them.
    pub fn top(&self, k: usize) -> Vec<(String, f64)> {
        let mut idx: Vec<usize> = (0..self.scores.len()).collect();
        idx.sort_by(|&i, &j| {
            self.scores[i]
                .partial_cmp(&self.scores[j])
                .unwrap_or(Ordering::Equal)
        });
        let start = idx.len().saturating_sub(k);
        idx[start..]
            .iter()
            .map(|&i| (self.names[i].clone(), self.scores[i]))
            .collect()
    }
}

/// Single-pass permutation importance: the increase in training MSE when one
/// feature column is shuffled, clamped at zero per column.
///
/// `predict` is the fitted model's prediction function; it is invoked once on
/// the intact matrix and once per permuted column (columns run in parallel).
pub fn permutation_importance<F>(
    predict: F,
    x: &Array2<f64>,
    y: &Array1<f64>,
) -> Result<Array1<f64>, ModelError>
where
    F: Fn(&Array2<f64>) -> Result<Array1<f64>, ModelError> + Sync,
{
    if x.nrows() != y.len() {
        return Err(ModelError::LengthMismatch {
            what: "features and target",
            left: x.nrows(),
            right: y.len(),
        });
    }
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(ModelError::EmptyInput("permutation_importance"));
    }

    let baseline = mean_squared_error(y, &predict(x)?)?;

    let scores: Vec<f64> = (0..x.ncols())
        .into_par_iter()
        .map(|c| {
            let mut permuted = x.to_owned();
            let mut col: Vec<f64> = x.column(c).to_vec();
            col.shuffle(&mut thread_rng());
            for (r, v) in col.into_iter().enumerate() {
                permuted[(r, c)] = v;
            }
            let mse = mean_squared_error(y, &predict(&permuted)?)?;
            Ok((mse - baseline).max(0.0))
        })
        .collect::<Result<Vec<f64>, ModelError>>()?;

    Ok(Array1::from_vec(scores))
}
