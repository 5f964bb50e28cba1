use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

use super::checksum::calculate_checksum;
use crate::error::{DataLoadError, DataLoadResult};
use crate::models::{Dataset, FlightNumber, LaunchRecord, Outcome};

/// Column names of the launch table. These are a fixed external contract.
pub mod columns {
    pub const LAUNCH_SITE: &str = "Launch Site";
    pub const PAYLOAD_MASS: &str = "Payload Mass (kg)";
    pub const CLASS: &str = "class";
    pub const BOOSTER_VERSION_CATEGORY: &str = "Booster Version Category";
    pub const BOOSTER_VERSION: &str = "Booster Version";
    pub const FLIGHT_NUMBER: &str = "Flight Number";

    pub const REQUIRED: [&str; 6] = [
        LAUNCH_SITE,
        PAYLOAD_MASS,
        CLASS,
        BOOSTER_VERSION_CATEGORY,
        BOOSTER_VERSION,
        FLIGHT_NUMBER,
    ];
}

/// Loads the launch table from CSV.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load the dataset from a CSV file on disk.
    pub fn load_from_file(path: &Path) -> DataLoadResult<Dataset> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DataLoadError::MissingSource {
                path: path.to_path_buf(),
            },
            _ => DataLoadError::Io(e),
        })?;

        let dataset = Self::load_from_bytes(&bytes)?;
        info!(
            "Loaded {} launch records from {} ({} sites, payload {}..={} kg)",
            dataset.len(),
            path.display(),
            dataset.site_catalog().len(),
            dataset.min_payload().value(),
            dataset.max_payload().value()
        );
        Ok(dataset)
    }

    /// Load the dataset from any reader producing CSV text.
    pub fn load_from_reader<R: Read>(mut reader: R) -> DataLoadResult<Dataset> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::load_from_bytes(&bytes)
    }

    /// Load the dataset from an in-memory CSV string.
    pub fn load_from_str(csv_text: &str) -> DataLoadResult<Dataset> {
        Self::load_from_bytes(csv_text.as_bytes())
    }

    fn load_from_bytes(bytes: &[u8]) -> DataLoadResult<Dataset> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(bytes);

        let layout = ColumnLayout::resolve(reader.headers()?)?;

        let mut records = Vec::new();
        for (idx, row) in reader.records().enumerate() {
            let row = row?;
            let record = layout.parse_row(idx + 1, &row).inspect_err(|e| {
                debug!("Rejecting launch table: {}", e);
            })?;
            records.push(record);
        }

        Ok(Dataset::from_records(records)?.with_checksum(calculate_checksum(bytes)))
    }
}

/// Positions of the required columns within the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    site: usize,
    payload_mass: usize,
    class: usize,
    booster_version_category: usize,
    booster_version: usize,
    flight_number: usize,
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord) -> DataLoadResult<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or(DataLoadError::MissingColumn { column })
        };

        Ok(Self {
            site: find(columns::LAUNCH_SITE)?,
            payload_mass: find(columns::PAYLOAD_MASS)?,
            class: find(columns::CLASS)?,
            booster_version_category: find(columns::BOOSTER_VERSION_CATEGORY)?,
            booster_version: find(columns::BOOSTER_VERSION)?,
            flight_number: find(columns::FLIGHT_NUMBER)?,
        })
    }

    fn parse_row(&self, row: usize, record: &StringRecord) -> DataLoadResult<LaunchRecord> {
        let site = field(record, self.site, row, columns::LAUNCH_SITE)?;
        if site.is_empty() {
            return Err(invalid(row, columns::LAUNCH_SITE, site, "launch site is empty"));
        }

        Ok(LaunchRecord {
            site: site.to_string(),
            payload_mass: parse_payload_mass(
                field(record, self.payload_mass, row, columns::PAYLOAD_MASS)?,
                row,
            )?,
            outcome: parse_class(field(record, self.class, row, columns::CLASS)?, row)?,
            booster_version_category: field(
                record,
                self.booster_version_category,
                row,
                columns::BOOSTER_VERSION_CATEGORY,
            )?
            .to_string(),
            booster_version: field(record, self.booster_version, row, columns::BOOSTER_VERSION)?
                .to_string(),
            flight_number: parse_flight_number(
                field(record, self.flight_number, row, columns::FLIGHT_NUMBER)?,
                row,
            )?,
        })
    }
}

fn field<'r>(
    record: &'r StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
) -> DataLoadResult<&'r str> {
    record
        .get(idx)
        .ok_or_else(|| invalid(row, column, "", "missing value"))
}

fn invalid(row: usize, column: &'static str, value: &str, reason: &str) -> DataLoadError {
    DataLoadError::InvalidField {
        row,
        column,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_payload_mass(raw: &str, row: usize) -> DataLoadResult<qtty::Kilograms> {
    let mass: f64 = raw
        .parse()
        .map_err(|_| invalid(row, columns::PAYLOAD_MASS, raw, "not a number"))?;
    if !mass.is_finite() {
        return Err(invalid(row, columns::PAYLOAD_MASS, raw, "not a finite number"));
    }
    if mass < 0.0 {
        return Err(invalid(
            row,
            columns::PAYLOAD_MASS,
            raw,
            "payload mass must be non-negative",
        ));
    }
    Ok(qtty::Kilograms::new(mass))
}

// The table is often exported with float columns, so "1.0" is a valid class.
fn parse_class(raw: &str, row: usize) -> DataLoadResult<Outcome> {
    match raw.parse::<f64>() {
        Ok(v) if v == 1.0 => Ok(Outcome::Success),
        Ok(v) if v == 0.0 => Ok(Outcome::Failure),
        _ => Err(invalid(row, columns::CLASS, raw, "expected 0 or 1")),
    }
}

fn parse_flight_number(raw: &str, row: usize) -> DataLoadResult<FlightNumber> {
    if let Ok(n) = raw.parse::<u32>() {
        return Ok(FlightNumber::new(n));
    }
    match raw.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&v) => {
            Ok(FlightNumber::new(v as u32))
        }
        _ => Err(invalid(
            row,
            columns::FLIGHT_NUMBER,
            raw,
            "expected a non-negative integer",
        )),
    }
}
