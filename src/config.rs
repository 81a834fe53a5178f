use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported regression model variants and their hyper-parameters.
///
/// The five variants mirror the default comparison set: an unregularized
/// linear model, a standardize-then-KNN pipeline, a single decision tree, a
/// random forest, and a gradient-boosted tree ensemble.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum RegressorType {
    Linear,
    Knn {
        k: usize,
    },
    DecisionTree {
        max_depth: Option<u16>,
    },
    RandomForest {
        n_trees: u16,
    },
    Gbdt {
        max_depth: u32,
        num_boost_round: usize,
        shrinkage: f32,
    },
}

impl Default for RegressorType {
    fn default() -> Self {
        RegressorType::Gbdt {
            max_depth: 6,
            num_boost_round: 50,
            shrinkage: 0.1,
        }
    }
}

impl FromStr for RegressorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(RegressorType::Linear),
            "knn" => Ok(RegressorType::Knn { k: 5 }),
            "decision_tree" => Ok(RegressorType::DecisionTree { max_depth: None }),
            "random_forest" => Ok(RegressorType::RandomForest { n_trees: 100 }),
            "gbdt" => Ok(RegressorType::Gbdt {
                max_depth: 6,
                num_boost_round: 50,
                shrinkage: 0.1,
            }),
            _ => Err(format!(
                "Unknown model type: {}. Expected one of linear, knn, decision_tree, random_forest, gbdt",
                s
            )),
        }
    }
}

impl RegressorType {
    /// Human-readable label used in comparison tables and progress notices.
    pub fn label(&self) -> &'static str {
        match self {
            RegressorType::Linear => "Linear Regression",
            RegressorType::Knn { .. } => "K-Nearest Neighbors",
            RegressorType::DecisionTree { .. } => "Decision Tree",
            RegressorType::RandomForest { .. } => "Random Forest",
            RegressorType::Gbdt { .. } => "Gradient Boosting",
        }
    }
}
