//! Launch record domain types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Flight number as listed in the launch manifest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FlightNumber(pub u32);

impl FlightNumber {
    pub fn new(value: u32) -> Self {
        FlightNumber(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mission outcome.
///
/// The source table stores this as the `class` column, `1` for a successful
/// landing and `0` for a failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Decode the numeric `class` value used by the source table.
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    /// Numeric encoding, used as the vertical axis of the scatter chart.
    pub fn as_class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One immutable row of the launch table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub site: String,
    /// Always finite and non-negative once the record is part of a dataset.
    pub payload_mass: qtty::Kilograms,
    pub outcome: Outcome,
    pub booster_version_category: String,
    pub booster_version: String,
    pub flight_number: FlightNumber,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}
