//! Data Transfer Objects for the HTTP API.
//!
//! View and layout DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    DashboardLayout, DashboardViews, PieChartDescriptor, ScatterChartDescriptor, SelectionState,
    SiteSelection,
};

/// Request body for a site selection event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSelectionRequest {
    /// Site name, or `ALL` to clear the site filter
    pub site: String,
}

/// Request body for a payload range selection event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadRangeRequest {
    pub low: f64,
    pub high: f64,
}

/// Query parameters for the stateless pie endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SuccessPieQuery {
    /// Site name or `ALL` (default: `ALL`)
    #[serde(default)]
    pub site: Option<String>,
}

/// Query parameters for the stateless scatter endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PayloadScatterQuery {
    /// Site name or `ALL` (default: `ALL`)
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg (default: dataset minimum)
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound in kg (default: dataset maximum)
    #[serde(default)]
    pub high: Option<f64>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
    /// SHA-256 of the loaded launch table
    pub dataset_checksum: String,
}

/// Site catalog response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteListResponse {
    /// `ALL` first, then each site in lexicographic order
    pub sites: Vec<SiteSelection>,
    /// Number of real sites (excluding `ALL`)
    pub total: usize,
}
