//! Rendering surface seam.
//!
//! The coordinator pushes every freshly computed [`DashboardViews`] into a
//! [`ViewSink`]. The HTTP layer uses [`LatestViews`], which simply keeps the
//! most recent pair for clients to poll.

use parking_lot::RwLock;

use crate::routes::dashboard::DashboardViews;

/// Receiver of republished views.
pub trait ViewSink: Send + Sync {
    fn publish(&self, views: &DashboardViews);
}

/// Keeps the most recently published views.
#[derive(Debug, Default)]
pub struct LatestViews {
    latest: RwLock<Option<DashboardViews>>,
}

impl LatestViews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the last published views, if anything has been published yet.
    pub fn snapshot(&self) -> Option<DashboardViews> {
        self.latest.read().clone()
    }
}

impl ViewSink for LatestViews {
    fn publish(&self, views: &DashboardViews) {
        *self.latest.write() = Some(views.clone());
    }
}
