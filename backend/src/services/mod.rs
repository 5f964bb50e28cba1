//! Service layer: the aggregation engine and the update protocol.
//!
//! - [`success_distribution`] and [`payload_outcome`] are the pure aggregation
//!   functions deriving the two chart views from a dataset and a selection.
//! - [`descriptors`] reshapes those views into chart descriptors.
//! - [`coordinator`] owns the selection state and republishes views on every
//!   accepted event through a [`publisher::ViewSink`].
//! - [`layout`] describes the controls for the dashboard page.

pub mod coordinator;
pub mod descriptors;
pub mod layout;
pub mod payload_outcome;
pub mod publisher;
pub mod success_distribution;


pub use coordinator::{render_views, SelectionEvent, UpdateCoordinator};
pub use descriptors::{build_pie_descriptor, build_scatter_descriptor};
pub use layout::build_dashboard_layout;
pub use payload_outcome::compute_payload_outcome;
pub use publisher::{LatestViews, ViewSink};
pub use success_distribution::compute_success_distribution;
