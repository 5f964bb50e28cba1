//! View descriptor builder.
//!
//! Reshapes derived views into the parallel-series structure the rendering
//! surface draws from. No filtering or aggregation happens here: every entry of
//! the input view appears in the output, in the same order.

use crate::io::columns;
use crate::routes::payload_scatter::{PayloadOutcomeView, ScatterChartDescriptor};
use crate::routes::success_pie::{PieChartDescriptor, SuccessDistributionView};

pub fn build_pie_descriptor(view: &SuccessDistributionView) -> PieChartDescriptor {
    let (labels, values) = view
        .slices
        .iter()
        .map(|slice| (slice.label.clone(), slice.value))
        .unzip();

    PieChartDescriptor {
        title: view.title.clone(),
        labels,
        values,
    }
}

pub fn build_scatter_descriptor(view: &PayloadOutcomeView) -> ScatterChartDescriptor {
    let n = view.points.len();
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut color = Vec::with_capacity(n);
    let mut hover = Vec::with_capacity(n);

    for point in &view.points {
        x.push(point.payload_mass.value());
        y.push(point.outcome.as_class());
        color.push(point.color_category.clone());
        hover.push(point.hover.clone());
    }

    // Axis and legend labels use the source column names.
    ScatterChartDescriptor {
        title: view.title.clone(),
        x_label: columns::PAYLOAD_MASS.to_string(),
        y_label: columns::CLASS.to_string(),
        color_label: columns::BOOSTER_VERSION_CATEGORY.to_string(),
        hover_labels: vec![
            columns::LAUNCH_SITE.to_string(),
            columns::BOOSTER_VERSION.to_string(),
            columns::FLIGHT_NUMBER.to_string(),
        ],
        x,
        y,
        color,
        hover,
    }
}
