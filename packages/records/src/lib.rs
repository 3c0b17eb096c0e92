#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! In-memory crime record store and CSV import.
//!
//! [`RecordStore`] owns the full dataset and hands out owned snapshots via
//! [`RecordStore::local_copy`]. The filter pipeline only ever consumes
//! snapshots, so the stored dataset is never mutated by filtering.

pub mod import;
pub mod parsing;

use crime_view_records_models::CrimeRecord;

/// Embedded demo dataset, a small slice of the Chicago data portal export.
const SAMPLE_CSV: &str = include_str!("../data/sample.csv");

/// Errors that can occur while importing records.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The CSV stream could not be read or parsed at all.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Owner of the full crime record dataset.
///
/// Consumers never borrow the stored collection; they take an owned snapshot
/// and narrow it down independently.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<CrimeRecord>,
}

impl RecordStore {
    /// Creates a store over the given dataset.
    #[must_use]
    pub const fn new(records: Vec<CrimeRecord>) -> Self {
        Self { records }
    }

    /// Creates a store by importing records from a CSV stream.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError`] if the stream cannot be parsed as CSV.
    pub fn from_csv<R: std::io::Read>(reader: R) -> Result<Self, ImportError> {
        Ok(Self::new(import::import_csv(reader)?))
    }

    /// Returns an owned snapshot of the full dataset.
    ///
    /// Ownership of the snapshot transfers to the caller; filtering it has
    /// no effect on the store.
    #[must_use]
    pub fn local_copy(&self) -> Vec<CrimeRecord> {
        self.records.clone()
    }

    /// Replaces the full dataset.
    pub fn replace(&mut self, records: Vec<CrimeRecord>) {
        self.records = records;
    }

    /// Number of records in the store.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parses the embedded demo dataset.
///
/// The embedded CSV is well-formed, so this never returns fewer rows than
/// the file contains.
#[must_use]
pub fn sample_records() -> Vec<CrimeRecord> {
    import::import_csv(SAMPLE_CSV.as_bytes()).unwrap_or_default()
}
