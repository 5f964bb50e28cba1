//! Update coordinator: the state machine between the control surface and the
//! rendering surface.
//!
//! The coordinator owns the [`SelectionState`]. Each [`SelectionEvent`] is
//! validated first and only then applied, so a rejected event leaves the state
//! exactly as it was. Every accepted event recomputes both views from the full
//! selection and republishes them to the [`ViewSink`].

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::descriptors::{build_pie_descriptor, build_scatter_descriptor};
use super::payload_outcome::compute_payload_outcome;
use super::publisher::ViewSink;
use super::success_distribution::compute_success_distribution;
use crate::error::InvalidSelectionError;
use crate::models::{Dataset, PayloadRange, SelectionState};
use crate::routes::dashboard::DashboardViews;

/// Discrete input from the control surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SelectionEvent {
    /// A site (or `ALL`) was picked in the dropdown.
    SiteChanged { site: String },
    /// The payload slider was moved.
    RangeChanged { low: f64, high: f64 },
}

/// Compute both chart descriptors for a selection.
pub fn render_views(dataset: &Dataset, selection: &SelectionState) -> DashboardViews {
    let pie = compute_success_distribution(dataset, &selection.site);
    let scatter = compute_payload_outcome(dataset, &selection.site, &selection.payload_range);

    DashboardViews {
        selection: selection.clone(),
        success_pie: build_pie_descriptor(&pie),
        payload_scatter: build_scatter_descriptor(&scatter),
    }
}

pub struct UpdateCoordinator {
    dataset: Arc<Dataset>,
    state: SelectionState,
    sink: Arc<dyn ViewSink>,
}

impl UpdateCoordinator {
    /// Create a coordinator with the startup selection and publish the
    /// initial views.
    pub fn new(dataset: Arc<Dataset>, sink: Arc<dyn ViewSink>) -> Self {
        let state = SelectionState::initial(&dataset);
        let coordinator = Self {
            dataset,
            state,
            sink,
        };
        coordinator.republish();
        coordinator
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Views for the current selection, without publishing.
    pub fn current_views(&self) -> DashboardViews {
        render_views(&self.dataset, &self.state)
    }

    pub fn set_site(&mut self, site: &str) -> Result<DashboardViews, InvalidSelectionError> {
        self.apply(SelectionEvent::SiteChanged {
            site: site.to_string(),
        })
    }

    pub fn set_payload_range(
        &mut self,
        low: f64,
        high: f64,
    ) -> Result<DashboardViews, InvalidSelectionError> {
        self.apply(SelectionEvent::RangeChanged { low, high })
    }

    /// Apply one event and republish both views.
    pub fn apply(&mut self, event: SelectionEvent) -> Result<DashboardViews, InvalidSelectionError> {
        match event {
            SelectionEvent::SiteChanged { site } => {
                let selection = self
                    .dataset
                    .site_catalog()
                    .resolve(&site)
                    .inspect_err(|e| warn!("Rejected site selection: {}", e))?;
                debug!("Site selection changed: {} -> {}", self.state.site, selection);
                self.state.site = selection;
            }
            SelectionEvent::RangeChanged { low, high } => {
                let range = PayloadRange::validated(low, high)
                    .inspect_err(|e| warn!("Rejected payload range: {}", e))?;
                debug!("Payload range changed: [{}, {}]", low, high);
                self.state.payload_range = range;
            }
        }

        Ok(self.republish())
    }

    fn republish(&self) -> DashboardViews {
        let views = self.current_views();
        self.sink.publish(&views);
        views
    }
}
