//! The immutable launch table and its site catalog.

use serde::Serialize;
use std::collections::BTreeSet;

use super::launch::LaunchRecord;
use super::selection::{PayloadRange, SiteSelection};
use crate::error::{DataLoadError, DataLoadResult, InvalidSelectionError};
use crate::io::checksum::calculate_checksum;

/// Distinct launch sites present in a dataset, in lexicographic order.
///
/// The [`SiteSelection::All`] sentinel is not stored but always listed first by
/// [`SiteCatalog::entries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteCatalog {
    sites: Vec<String>,
}

impl SiteCatalog {
    pub fn from_records(records: &[LaunchRecord]) -> Self {
        let sites: BTreeSet<&str> = records.iter().map(|r| r.site.as_str()).collect();
        Self {
            sites: sites.into_iter().map(str::to_string).collect(),
        }
    }

    /// Site names without the sentinel.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn contains(&self, site: &str) -> bool {
        self.sites
            .binary_search_by(|candidate| candidate.as_str().cmp(site))
            .is_ok()
    }

    /// Display order for the site control: `ALL` first, then every site.
    pub fn entries(&self) -> Vec<SiteSelection> {
        std::iter::once(SiteSelection::All)
            .chain(self.sites.iter().cloned().map(SiteSelection::Site))
            .collect()
    }

    /// Turn a raw control value into a selection, rejecting unknown sites.
    pub fn resolve(&self, value: &str) -> Result<SiteSelection, InvalidSelectionError> {
        match SiteSelection::parse(value) {
            SiteSelection::All => Ok(SiteSelection::All),
            SiteSelection::Site(site) if self.contains(&site) => Ok(SiteSelection::Site(site)),
            SiteSelection::Site(site) => Err(InvalidSelectionError::UnknownSite { site }),
        }
    }
}

/// Ordered, read-only table of launch records.
///
/// Built once at startup and shared by reference with everything that derives
/// views from it. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    catalog: SiteCatalog,
    min_payload: qtty::Kilograms,
    max_payload: qtty::Kilograms,
    checksum: String,
}

impl Dataset {
    /// Build a dataset from already-typed records.
    ///
    /// The checksum is computed over the JSON encoding of the records; loaders
    /// that read raw bytes replace it with [`Dataset::with_checksum`].
    pub fn from_records(records: Vec<LaunchRecord>) -> DataLoadResult<Self> {
        if records.is_empty() {
            return Err(DataLoadError::EmptyDataset);
        }

        for (idx, record) in records.iter().enumerate() {
            let mass = record.payload_mass.value();
            if !mass.is_finite() || mass < 0.0 {
                return Err(DataLoadError::InvalidField {
                    row: idx + 1,
                    column: crate::io::columns::PAYLOAD_MASS,
                    value: mass.to_string(),
                    reason: "payload mass must be a finite, non-negative number".to_string(),
                });
            }
        }

        let mut min_payload = records[0].payload_mass;
        let mut max_payload = records[0].payload_mass;
        for record in &records[1..] {
            if record.payload_mass < min_payload {
                min_payload = record.payload_mass;
            }
            if record.payload_mass > max_payload {
                max_payload = record.payload_mass;
            }
        }

        let catalog = SiteCatalog::from_records(&records);
        let encoded = serde_json::to_string(&records).unwrap_or_default();
        let checksum = calculate_checksum(encoded.as_bytes());

        Ok(Self {
            records,
            catalog,
            min_payload,
            max_payload,
            checksum,
        })
    }

    pub fn with_checksum(mut self, checksum: String) -> Self {
        self.checksum = checksum;
        self
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn site_catalog(&self) -> &SiteCatalog {
        &self.catalog
    }

    pub fn min_payload(&self) -> qtty::Kilograms {
        self.min_payload
    }

    pub fn max_payload(&self) -> qtty::Kilograms {
        self.max_payload
    }

    /// Range used to seed the selection: the full payload span.
    pub fn default_payload_range(&self) -> PayloadRange {
        PayloadRange {
            low: self.min_payload,
            high: self.max_payload,
        }
    }

    /// Hex SHA-256 fingerprint of the source data.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}
