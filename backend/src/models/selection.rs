//! Selection state driven by the dashboard controls.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::dataset::Dataset;
use crate::error::InvalidSelectionError;

/// Sentinel control value meaning "no site filter".
pub const ALL_SITES: &str = "ALL";

/// Site filter: either every site or a single named site.
///
/// Serialized as a plain string, with [`ALL_SITES`] standing for [`SiteSelection::All`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a raw control value. This does not check the site exists;
    /// use [`SiteCatalog::resolve`](super::SiteCatalog::resolve) for that.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    /// Whether a record at `site` passes this filter.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload mass interval.
///
/// An inverted interval (`low > high`) is representable on purpose: it matches
/// no record. The coordinator only ever stores validated ranges.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: qtty::Kilograms,
    pub high: qtty::Kilograms,
}

impl PayloadRange {
    /// Build a range without validation.
    pub fn between(low: f64, high: f64) -> Self {
        Self {
            low: qtty::Kilograms::new(low),
            high: qtty::Kilograms::new(high),
        }
    }

    /// Build a range that may be stored as selection state.
    pub fn validated(low: f64, high: f64) -> Result<Self, InvalidSelectionError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(InvalidSelectionError::NonFiniteBound { low, high });
        }
        if low > high {
            return Err(InvalidSelectionError::InvertedRange { low, high });
        }
        Ok(Self::between(low, high))
    }

    pub fn contains(&self, mass: qtty::Kilograms) -> bool {
        self.low <= mass && mass <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

/// Current filter parameters for every derived view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl SelectionState {
    /// Startup selection: every site, the full payload span of the dataset.
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: dataset.default_payload_range(),
        }
    }
}
