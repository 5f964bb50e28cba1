//! # SpaceX Launch Dashboard Backend
//!
//! Filtering and aggregation core for an interactive SpaceX launch records
//! dashboard.
//!
//! The crate loads a launch table once at startup and answers two views over
//! it: the distribution of successful launches by site (or success/failure
//! for a single site) and the payload mass versus outcome correlation for a
//! site and payload range. A coordinator owns the current selection and
//! republishes both views whenever the control surface changes it.
//!
//! ## Features
//!
//! - **Data Loading**: Parse the launch table from CSV into an immutable dataset
//! - **Success Distribution**: Per-site success counts or a single site's outcome split
//! - **Payload/Outcome Correlation**: Filter launches by site and inclusive payload range
//! - **Selection Coordination**: Validate selection events and republish both views
//! - **HTTP API**: RESTful endpoints for the control and rendering surfaces
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) exchanged with the surfaces
//! - [`config`]: `dashboard.toml` and environment configuration
//! - [`io`]: Launch table loading and checksumming
//! - [`models`]: Launch records, dataset and selection state
//! - [`services`]: View computations and the update coordinator
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: View descriptor types and route names

pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
