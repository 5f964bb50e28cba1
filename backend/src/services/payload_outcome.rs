//! Payload vs. outcome (scatter chart) filtering.

use crate::models::{Dataset, LaunchRecord, PayloadRange, SiteSelection};
use crate::routes::payload_scatter::{HoverFields, PayloadOutcomePoint, PayloadOutcomeView};

/// Title used when no site filter is applied.
pub const ALL_SITES_SCATTER_TITLE: &str = "Correlation between Payload and Success for All Sites";

/// Title used for a single site.
pub fn site_scatter_title(site: &str) -> String {
    format!("Payload vs. Outcome for {}", site)
}

/// Select the launches inside `payload_range` (inclusive) at the selected site.
///
/// Both predicates are applied as a single conjunction, so filter order has no
/// effect. Points keep dataset order. An inverted range yields an empty view.
pub fn compute_payload_outcome(
    dataset: &Dataset,
    selected_site: &SiteSelection,
    payload_range: &PayloadRange,
) -> PayloadOutcomeView {
    let points = dataset
        .records()
        .iter()
        .filter(|r| payload_range.contains(r.payload_mass) && selected_site.matches(&r.site))
        .map(to_point)
        .collect();

    let title = match selected_site {
        SiteSelection::All => ALL_SITES_SCATTER_TITLE.to_string(),
        SiteSelection::Site(site) => site_scatter_title(site),
    };

    PayloadOutcomeView { title, points }
}

fn to_point(record: &LaunchRecord) -> PayloadOutcomePoint {
    PayloadOutcomePoint {
        payload_mass: record.payload_mass,
        outcome: record.outcome,
        color_category: record.booster_version_category.clone(),
        hover: HoverFields {
            site: record.site.clone(),
            booster_version: record.booster_version.clone(),
            flight_number: record.flight_number,
        },
    }
}
