//! Multi-model comparison: fit each candidate on the training set, score each
//! on the held-out set, and assemble a table of RMSE and R-Squared per model.
//!
//! Scoring is pure with respect to presentation: `ModelComparator::run`
//! returns a structured `Comparison`; rendering (the `Display` text table, the
//! HTML report) is left to caller-chosen sinks. The only side effect is one
//! `log` progress notice per fitted estimator.
use std::fmt;

use ndarray::{Array1, Array2};
use serde::Serialize;

use crate::data_handling::TrainTestSplit;
use crate::error::ModelError;
use crate::metrics::{r_squared, root_mean_squared_error};
use crate::models::factory::default_candidates;
use crate::models::Regressor;

/// Fit a model on training features/target. Pure delegation: no validation,
/// any backend failure propagates unchanged.
pub fn fit_model(
    model: &mut dyn Regressor,
    x_train: &Array2<f64>,
    y_train: &Array1<f64>,
) -> Result<(), ModelError> {
    model.fit(x_train, y_train)
}

/// A labelled estimator. The pairing is explicit, so a candidate's label
/// always describes its model.
pub struct Candidate {
    pub label: String,
    pub model: Box<dyn Regressor>,
}

/// One scored model in a comparison table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonRow {
    pub label: String,
    pub rmse: f64,
    pub r_squared: f64,
}

/// Comparison table, one row per candidate in input order (never re-sorted by
/// score). `Display` renders an aligned text table.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ComparisonResult {
    rows: Vec<ComparisonRow>,
}

impl ComparisonResult {
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<25} {:>12} {:>12}", "Model", "RMSE", "R-Squared")?;
        writeln!(f, "{}", "-".repeat(51))?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<25} {:>12.4} {:>12.4}",
                row.label, row.rmse, row.r_squared
            )?;
        }
        Ok(())
    }
}

/// Fitted models plus their comparison table, in candidate order.
pub struct Comparison {
    pub models: Vec<Candidate>,
    pub table: ComparisonResult,
}

/// Owns an ordered list of candidate models and runs the comparison.
pub struct ModelComparator {
    candidates: Vec<Candidate>,
}

impl ModelComparator {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        ModelComparator { candidates }
    }

    /// The fixed default set of five candidates (fresh instances per call).
    pub fn with_defaults() -> Self {
        Self::new(default_candidates())
    }

    /// Build from parallel model/label lists, failing fast on length mismatch
    /// rather than silently truncating either list.
    pub fn from_parts(
        models: Vec<Box<dyn Regressor>>,
        labels: Vec<String>,
    ) -> Result<Self, ModelError> {
        if models.len() != labels.len() {
            return Err(ModelError::LengthMismatch {
                what: "estimator list and label list",
                left: models.len(),
                right: labels.len(),
            });
        }
        let candidates = models
            .into_iter()
            .zip(labels)
            .map(|(model, label)| Candidate { label, model })
            .collect();
        Ok(Self::new(candidates))
    }

    /// Fit every candidate on the training set in order, then score each on
    /// the held-out set. Any fit or predict failure aborts the whole run; an
    /// empty candidate list yields an empty table.
    pub fn run(self, split: &TrainTestSplit) -> Result<Comparison, ModelError> {
        let mut fitted = Vec::with_capacity(self.candidates.len());
        for mut candidate in self.candidates {
            fit_model(candidate.model.as_mut(), &split.x_train, &split.y_train)?;
            log::info!("{} model fit", candidate.label);
            fitted.push(candidate);
        }

        let mut rows = Vec::with_capacity(fitted.len());
        for candidate in &fitted {
            let predictions = candidate.model.predict(&split.x_test)?;
            rows.push(ComparisonRow {
                label: candidate.label.clone(),
                rmse: root_mean_squared_error(&split.y_test, &predictions)?,
                r_squared: r_squared(&split.y_test, &predictions)?,
            });
        }

        Ok(Comparison {
            models: fitted,
            table: ComparisonResult { rows },
        })
    }
}
