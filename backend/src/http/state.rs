//! Application state for the HTTP server.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::config::ControlsSettings;
use crate::models::Dataset;
use crate::services::{LatestViews, UpdateCoordinator};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Launch table, read-only after startup
    pub dataset: Arc<Dataset>,
    /// Selection state machine. The mutex serializes selection events so each
    /// one is fully processed before the next is accepted.
    pub coordinator: Arc<Mutex<UpdateCoordinator>>,
    /// Most recently published views
    pub views: Arc<LatestViews>,
    /// Slider display range
    pub controls: ControlsSettings,
}

impl AppState {
    /// Create a new application state around a loaded dataset.
    pub fn new(dataset: Arc<Dataset>, controls: ControlsSettings) -> Self {
        let views = Arc::new(LatestViews::new());
        let coordinator = UpdateCoordinator::new(Arc::clone(&dataset), views.clone());
        Self {
            dataset,
            coordinator: Arc::new(Mutex::new(coordinator)),
            views,
            controls,
        }
    }
}
