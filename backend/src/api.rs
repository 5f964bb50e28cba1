//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types exchanged with the rendering and
//! control surfaces. All types derive Serialize/Deserialize for JSON.

pub use crate::models::FlightNumber;
pub use crate::models::LaunchRecord;
pub use crate::models::Outcome;
pub use crate::models::PayloadRange;
pub use crate::models::SelectionState;
pub use crate::models::SiteSelection;
pub use crate::models::ALL_SITES;
pub use crate::routes::controls::DashboardLayout;
pub use crate::routes::controls::DropdownOption;
pub use crate::routes::controls::RangeSlider;
pub use crate::routes::controls::SiteDropdown;
pub use crate::routes::controls::SliderMark;
pub use crate::routes::dashboard::DashboardViews;
pub use crate::routes::payload_scatter::HoverFields;
pub use crate::routes::payload_scatter::PayloadOutcomePoint;
pub use crate::routes::payload_scatter::PayloadOutcomeView;
pub use crate::routes::payload_scatter::ScatterChartDescriptor;
pub use crate::routes::success_pie::PieChartDescriptor;
pub use crate::routes::success_pie::SuccessDistributionView;
pub use crate::routes::success_pie::SuccessSlice;
pub use crate::services::SelectionEvent;
