use serde::{Deserialize, Serialize};

use crate::models::SiteSelection;

// =========================================================
// Control surface types + route
// =========================================================

/// One entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: SiteSelection,
}

/// Launch site selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDropdown {
    pub options: Vec<DropdownOption>,
    pub value: SiteSelection,
    pub placeholder: String,
    pub searchable: bool,
    pub clearable: bool,
}

/// Labelled tick on the payload slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Payload range slider. `value` is the default `[low, high]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSlider {
    pub caption: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub value: [f64; 2],
}

/// Everything the control surface needs to draw the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_dropdown: SiteDropdown,
    pub payload_slider: RangeSlider,
}

/// Route function name constant for the dashboard layout
pub const GET_DASHBOARD_LAYOUT: &str = "get_dashboard_layout";
