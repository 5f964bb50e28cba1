use serde::{Deserialize, Serialize};

use super::payload_scatter::ScatterChartDescriptor;
use super::success_pie::PieChartDescriptor;
use crate::models::SelectionState;

// =========================================================
// Published dashboard views + route
// =========================================================

/// Both chart descriptors, published together after every accepted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardViews {
    /// Selection the descriptors were computed from.
    pub selection: SelectionState,
    pub success_pie: PieChartDescriptor,
    pub payload_scatter: ScatterChartDescriptor,
}

/// Route function name constant for the published views
pub const GET_DASHBOARD_VIEWS: &str = "get_dashboard_views";
