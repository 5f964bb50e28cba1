use serde::{Deserialize, Serialize};

use crate::models::{FlightNumber, Outcome};

// =========================================================
// Payload vs. outcome (scatter) types + route
// =========================================================

/// Extra record details shown when hovering a scatter point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverFields {
    pub site: String,
    pub booster_version: String,
    pub flight_number: FlightNumber,
}

/// A single launch plotted against its payload mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadOutcomePoint {
    pub payload_mass: qtty::Kilograms,
    pub outcome: Outcome,
    pub color_category: String,
    pub hover: HoverFields,
}

/// Payload vs. outcome view, points in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadOutcomeView {
    pub title: String,
    pub points: Vec<PayloadOutcomePoint>,
}

impl PayloadOutcomeView {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Chart-ready scatter descriptor for the rendering surface.
///
/// `x`, `y`, `color` and `hover` are parallel series of equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartDescriptor {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    pub hover_labels: Vec<String>,
    pub x: Vec<f64>,
    /// Outcome class, 1 for success and 0 for failure.
    pub y: Vec<u8>,
    pub color: Vec<String>,
    pub hover: Vec<HoverFields>,
}

/// Route function name constant for the payload scatter
pub const GET_PAYLOAD_SCATTER: &str = "get_payload_scatter";
