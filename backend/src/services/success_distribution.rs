//! Outcome distribution (pie chart) aggregation.

use std::collections::HashMap;

use crate::models::{Dataset, Outcome, SiteSelection};
use crate::routes::success_pie::{SuccessDistributionView, SuccessSlice};

/// Title used when no site filter is applied.
pub const ALL_SITES_PIE_TITLE: &str = "Total Successful Launches by Site (All Sites)";

/// Title used for a single site.
pub fn site_pie_title(site: &str) -> String {
    format!("Launch Outcomes for {}", site)
}

/// Compute the outcome distribution for a site selection.
///
/// - [`SiteSelection::All`]: successful launches counted per site, one slice per
///   site with at least one success, in order of first success in the dataset.
/// - A single site: that site's launches split into `Success` and `Failure`
///   slices (in that order), omitting an outcome that never occurs.
///
/// Pure: reads `dataset` only, and returns identical output for identical input.
pub fn compute_success_distribution(
    dataset: &Dataset,
    selected_site: &SiteSelection,
) -> SuccessDistributionView {
    match selected_site {
        SiteSelection::All => successes_by_site(dataset),
        SiteSelection::Site(site) => outcomes_for_site(dataset, site),
    }
}

fn successes_by_site(dataset: &Dataset) -> SuccessDistributionView {
    let mut slices: Vec<SuccessSlice> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in dataset.records().iter().filter(|r| r.is_success()) {
        match index.get(record.site.as_str()) {
            Some(&pos) => slices[pos].value += 1,
            None => {
                index.insert(record.site.as_str(), slices.len());
                slices.push(SuccessSlice {
                    label: record.site.clone(),
                    value: 1,
                });
            }
        }
    }

    SuccessDistributionView {
        title: ALL_SITES_PIE_TITLE.to_string(),
        slices,
    }
}

fn outcomes_for_site(dataset: &Dataset, site: &str) -> SuccessDistributionView {
    let (successes, failures) = dataset
        .records()
        .iter()
        .filter(|r| r.site == site)
        .fold((0u64, 0u64), |(s, f), r| match r.outcome {
            Outcome::Success => (s + 1, f),
            Outcome::Failure => (s, f + 1),
        });

    let slices = [(Outcome::Success, successes), (Outcome::Failure, failures)]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(outcome, count)| SuccessSlice {
            label: outcome.label().to_string(),
            value: count,
        })
        .collect();

    SuccessDistributionView {
        title: site_pie_title(site),
        slices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlightNumber, LaunchRecord};

    fn record(site: &str, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass: qtty::Kilograms::new(1000.0),
            outcome,
            booster_version_category: "FT".to_string(),
            booster_version: "F9 FT".to_string(),
            flight_number: FlightNumber::new(1),
        }
    }

    fn scenario_dataset() -> Dataset {
        Dataset::from_records(vec![
            record("CCAFS", Outcome::Success),
            record("CCAFS", Outcome::Failure),
            record("KSC", Outcome::Success),
            record("KSC", Outcome::Success),
        ])
        .unwrap()
    }

    fn as_pairs(view: &SuccessDistributionView) -> Vec<(&str, u64)> {
        view.slices
            .iter()
            .map(|s| (s.label.as_str(), s.value))
            .collect()
    }

    #[test]
    fn test_all_sites_counts_successes_per_site() {
        let view = compute_success_distribution(&scenario_dataset(), &SiteSelection::All);
        assert_eq!(view.title, ALL_SITES_PIE_TITLE);
        assert_eq!(as_pairs(&view), vec![("CCAFS", 1), ("KSC", 2)]);
    }

    #[test]
    fn test_single_site_splits_outcomes() {
        let view = compute_success_distribution(
            &scenario_dataset(),
            &SiteSelection::Site("CCAFS".to_string()),
        );
        assert_eq!(view.title, "Launch Outcomes for CCAFS");
        assert_eq!(as_pairs(&view), vec![("Success", 1), ("Failure", 1)]);
    }

    #[test]
    fn test_zero_count_outcome_omitted() {
        let view = compute_success_distribution(
            &scenario_dataset(),
            &SiteSelection::Site("KSC".to_string()),
        );
        assert_eq!(as_pairs(&view), vec![("Success", 2)]);
    }

    #[test]
    fn test_site_without_successes_omitted_from_all() {
        let dataset = Dataset::from_records(vec![
            record("VAFB", Outcome::Failure),
            record("KSC", Outcome::Success),
        ])
        .unwrap();
        let view = compute_success_distribution(&dataset, &SiteSelection::All);
        assert_eq!(as_pairs(&view), vec![("KSC", 1)]);
    }

    #[test]
    fn test_no_successes_anywhere() {
        let dataset = Dataset::from_records(vec![
            record("VAFB", Outcome::Failure),
            record("KSC", Outcome::Failure),
        ])
        .unwrap();
        let view = compute_success_distribution(&dataset, &SiteSelection::All);
        assert!(view.is_empty());
        assert_eq!(view.title, ALL_SITES_PIE_TITLE);
    }

    #[test]
    fn test_site_with_no_records() {
        let view = compute_success_distribution(
            &scenario_dataset(),
            &SiteSelection::Site("VAFB".to_string()),
        );
        assert!(view.is_empty());
        assert_eq!(view.title, "Launch Outcomes for VAFB");
    }
}
