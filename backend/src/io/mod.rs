//! Dataset loading.
//!
//! The launch table is read once at startup. Any failure here is fatal: the
//! dashboard cannot render without data.
//!
//! # Example
//!
//! ```no_run
//! use spacex_dash::io::DatasetLoader;
//! use std::path::Path;
//!
//! let dataset = DatasetLoader::load_from_file(Path::new("spacex_launch_dash.csv"))
//!     .expect("Failed to load launch table");
//! println!("Loaded {} launches", dataset.len());
//! ```

pub mod checksum;
pub mod loaders;

#[cfg(test)]
mod loaders_tests;

pub use loaders::{columns, DatasetLoader};
