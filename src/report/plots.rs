use plotly::common::Orientation;
use plotly::layout::{Axis, Layout};
use plotly::{Bar, Plot};

use crate::importance::FeatureImportances;

/// How many of the highest-importance features the chart keeps.
pub const TOP_FEATURES: usize = 20;

/// Render feature importances as a horizontal bar chart.
///
/// Keeps the `TOP_FEATURES` highest-scoring features (all of them when fewer
/// exist), ordered ascending so the strongest feature lands on the top bar.
/// `title` defaults to "Feature Importances".
pub fn plot_feature_importances(importances: &FeatureImportances, title: Option<&str>) -> Plot {
    let title = title.unwrap_or("Feature Importances");
    let kept = importances.top(TOP_FEATURES);
    let (names, scores): (Vec<String>, Vec<f64>) = kept.into_iter().unzip();

    let trace = Bar::new(scores, names).orientation(Orientation::Horizontal);

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("Importance"))
        .y_axis(Axis::new().title("Feature"));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}
