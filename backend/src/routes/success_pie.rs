use serde::{Deserialize, Serialize};

// =========================================================
// Success distribution (pie) types + route
// =========================================================

/// One slice of the outcome distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessSlice {
    pub label: String,
    pub value: u64,
}

/// Outcome distribution derived from the current site selection.
///
/// Every slice shares the view title. Zero-count slices are never present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessDistributionView {
    pub title: String,
    pub slices: Vec<SuccessSlice>,
}

impl SuccessDistributionView {
    /// `(label, value, title)` triples in slice order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64, &str)> + '_ {
        self.slices
            .iter()
            .map(move |s| (s.label.as_str(), s.value, self.title.as_str()))
    }

    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Chart-ready pie descriptor for the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieChartDescriptor {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

/// Route function name constant for the success pie
pub const GET_SUCCESS_PIE: &str = "get_success_pie";
