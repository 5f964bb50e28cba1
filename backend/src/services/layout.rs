//! Control surface description: page title, site dropdown and payload slider.

use crate::config::ControlsSettings;
use crate::models::{Dataset, SiteSelection};
use crate::routes::controls::{
    DashboardLayout, DropdownOption, RangeSlider, SiteDropdown, SliderMark,
};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const ALL_SITES_LABEL: &str = "All Sites";
pub const SITE_PLACEHOLDER: &str = "Select a Launch Site here";
pub const SLIDER_CAPTION: &str = "Payload range (Kg):";

/// Number of intervals between labelled slider marks.
const MARK_INTERVALS: u32 = 4;

/// Build the layout for `dataset`.
///
/// Dropdown options follow the site catalog (`All Sites` first). The slider
/// spans the configured display range, independent of the data, and defaults
/// to the dataset's full payload span.
pub fn build_dashboard_layout(dataset: &Dataset, controls: &ControlsSettings) -> DashboardLayout {
    let options = dataset
        .site_catalog()
        .entries()
        .into_iter()
        .map(|value| DropdownOption {
            label: match &value {
                SiteSelection::All => ALL_SITES_LABEL.to_string(),
                SiteSelection::Site(site) => site.clone(),
            },
            value,
        })
        .collect();

    let default_range = dataset.default_payload_range();

    DashboardLayout {
        title: DASHBOARD_TITLE.to_string(),
        site_dropdown: SiteDropdown {
            options,
            value: SiteSelection::All,
            placeholder: SITE_PLACEHOLDER.to_string(),
            searchable: true,
            clearable: false,
        },
        payload_slider: RangeSlider {
            caption: SLIDER_CAPTION.to_string(),
            min: controls.slider_min,
            max: controls.slider_max,
            step: controls.slider_step,
            marks: slider_marks(controls.slider_min, controls.slider_max),
            value: [default_range.low.value(), default_range.high.value()],
        },
    }
}

fn slider_marks(min: f64, max: f64) -> Vec<SliderMark> {
    let span = max - min;
    (0..=MARK_INTERVALS)
        .map(|i| {
            let value = min + span * f64::from(i) / f64::from(MARK_INTERVALS);
            SliderMark {
                value,
                label: format_mark(value),
            }
        })
        .collect()
}

fn format_mark(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
