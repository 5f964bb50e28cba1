//! Domain model: launch records, the dataset they live in, and the
//! selection state that filters them.

pub mod dataset;
pub mod launch;
pub mod selection;

pub use dataset::*;
pub use launch::*;
pub use selection::*;
