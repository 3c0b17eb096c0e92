//! CSV record import.
//!
//! Reads the Chicago-portal CSV shape and produces [`CrimeRecord`]s in file
//! order. Malformed rows are skipped with a warning rather than failing the
//! whole import, matching how the dataset is actually distributed (a handful
//! of rows always lack coordinates or carry junk fields).

use crime_view_records_models::CrimeRecord;
use serde::Deserialize;

use crate::ImportError;
use crate::parsing::{parse_flag, parse_lat_lng, parse_occurrence_date};

/// One raw CSV row, keyed by the export's column headers. Every field stays
/// a string so a bad value can be skipped per-row instead of aborting
/// deserialization.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "CASE#")]
    case_number: String,
    #[serde(rename = "DATE OF OCCURRENCE")]
    occurred_on: String,
    #[serde(rename = "PRIMARY DESCRIPTION")]
    primary_description: String,
    #[serde(rename = "LOCATION DESCRIPTION")]
    location_description: String,
    #[serde(rename = "ARREST")]
    arrest: String,
    #[serde(rename = "DOMESTIC")]
    domestic: String,
    #[serde(rename = "BEAT")]
    beat: String,
    #[serde(rename = "WARD")]
    ward: String,
    #[serde(rename = "LATITUDE")]
    latitude: String,
    #[serde(rename = "LONGITUDE")]
    longitude: String,
}

impl RawRow {
    /// Converts the raw row into a [`CrimeRecord`], or `None` when any
    /// field fails to parse.
    fn into_record(self) -> Option<CrimeRecord> {
        let occurred_on = parse_occurrence_date(&self.occurred_on)?;
        let arrest = parse_flag(&self.arrest)?;
        let domestic = parse_flag(&self.domestic)?;
        let beat = self.beat.trim().parse::<i32>().ok()?;
        let ward = self.ward.trim().parse::<i32>().ok()?;
        let (latitude, longitude) = parse_lat_lng(&self.latitude, &self.longitude)?;

        Some(CrimeRecord {
            case_number: self.case_number,
            latitude,
            longitude,
            occurred_on,
            primary_description: self.primary_description,
            location_description: self.location_description,
            beat,
            ward,
            arrest,
            domestic,
        })
    }
}

/// Imports crime records from a CSV stream, preserving file order.
///
/// Rows with unparseable dates, flags, zone codes, or coordinates are
/// skipped with a `log::warn!`.
///
/// # Errors
///
/// Returns [`ImportError`] if the stream itself cannot be read as CSV.
pub fn import_csv<R: std::io::Read>(reader: R) -> Result<Vec<CrimeRecord>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for result in csv_reader.deserialize::<RawRow>() {
        let row = result?;
        let case_number = row.case_number.clone();
        match row.into_record() {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                log::warn!("Skipping unparseable record {case_number}");
            }
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} of {} rows", records.len() + skipped);
    }

    Ok(records)
}
