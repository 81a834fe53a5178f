use crate::comparison::Candidate;
use crate::config::RegressorType;
use crate::models::forest::ForestRegressor;
use crate::models::gbdt::GbdtRegressor;
use crate::models::knn::KnnRegressor;
use crate::models::linear::LinearRegressor;
use crate::models::tree::TreeRegressor;
use crate::models::Regressor;

/// Build a boxed regressor from a `RegressorType`.
/// Currently this is a thin factory implemented as a single function.
pub fn build_regressor(config: RegressorType) -> Box<dyn Regressor> {
    match config {
        RegressorType::Linear => Box::new(LinearRegressor::new()),
        RegressorType::Knn { k } => Box::new(KnnRegressor::new(k)),
        RegressorType::DecisionTree { max_depth } => Box::new(TreeRegressor::new(max_depth)),
        RegressorType::RandomForest { n_trees } => Box::new(ForestRegressor::new(n_trees)),
        RegressorType::Gbdt {
            max_depth,
            num_boost_round,
            shrinkage,
        } => Box::new(GbdtRegressor::new(max_depth, num_boost_round, shrinkage)),
    }
}

/// The default comparison set: five fresh estimator instances per call, so
/// repeated comparisons never share fitted state.
pub fn default_candidates() -> Vec<Candidate> {
    let configs = [
        RegressorType::Linear,
        RegressorType::Knn { k: 5 },
        RegressorType::DecisionTree { max_depth: None },
        RegressorType::RandomForest { n_trees: 100 },
        RegressorType::Gbdt {
            max_depth: 6,
            num_boost_round: 50,
            shrinkage: 0.1,
        },
    ];
    configs
        .into_iter()
        .map(|config| Candidate {
            label: config.label().to_string(),
            model: build_regressor(config),
        })
        .collect()
}
