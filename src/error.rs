use std::error::Error;
use std::fmt;

/// Custom error type for model fitting, scoring and importance pairing failures
#[derive(Debug)]
pub enum ModelError {
    /// Two parallel sequences that must be aligned have different lengths.
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },
    /// An operation that needs at least one sample received none.
    EmptyInput(&'static str),
    /// `predict` or `feature_importances` was called before `fit`.
    NotFitted(&'static str),
    /// The model variant does not expose feature importances.
    ImportancesUnavailable(String),
    /// Failure propagated unmodified from an underlying model backend.
    Backend(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::LengthMismatch { what, left, right } => {
                write!(f, "{} must have equal length (got {} and {})", what, left, right)
            }
            ModelError::EmptyInput(what) => write!(f, "{} requires at least one sample", what),
            ModelError::NotFitted(name) => write!(f, "{} model has not been fitted", name),
            ModelError::ImportancesUnavailable(name) => {
                write!(f, "{} model does not expose feature importances", name)
            }
            ModelError::Backend(msg) => write!(f, "model backend error: {}", msg),
        }
    }
}

impl Error for ModelError {}

impl From<smartcore::error::Failed> for ModelError {
    fn from(e: smartcore::error::Failed) -> Self {
        ModelError::Backend(e.to_string())
    }
}
