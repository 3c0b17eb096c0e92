#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Crime record model types.
//!
//! This crate defines the read-only [`CrimeRecord`] projection shared by the
//! filter pipeline, the marker projector, and whatever UI layer sits on top.
//! Records are immutable once loaded; every downstream consumer works on
//! owned snapshots, never on a shared mutable collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A single crime incident as displayed and filtered by the map view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrimeRecord {
    /// Unique case identifier (e.g. `"JE163990"`).
    pub case_number: String,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Date the incident occurred. The source data is day-granular.
    pub occurred_on: NaiveDate,
    /// Primary offense description (e.g. `"THEFT"`).
    pub primary_description: String,
    /// Where the incident took place (e.g. `"STREET"`, `"APARTMENT"`).
    pub location_description: String,
    /// Police beat code.
    pub beat: i32,
    /// City ward code.
    pub ward: i32,
    /// Whether an arrest was made.
    pub arrest: bool,
    /// Whether the incident was classified as domestic violence.
    pub domestic: bool,
}

/// Tri-state form choice for the boolean filters (arrest, domestic).
///
/// String forms match the combo-box labels the map view presents, so raw
/// form values round-trip through [`std::str::FromStr`]. `yes`/`no` parse
/// case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum TriState {
    /// Skip this filter stage entirely.
    #[default]
    #[strum(serialize = "Don't filter")]
    #[serde(rename = "DONT_FILTER")]
    DontFilter,
    /// Retain only records where the flag is set.
    #[strum(serialize = "Yes")]
    #[serde(rename = "YES")]
    Yes,
    /// Retain only records where the flag is unset.
    #[strum(serialize = "No")]
    #[serde(rename = "NO")]
    No,
}

impl TriState {
    /// Converts the choice into the boolean the filter stage compares
    /// against, or `None` when the stage should be skipped.
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::DontFilter => None,
            Self::Yes => Some(true),
            Self::No => Some(false),
        }
    }

    /// Returns all variants in combo-box display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::DontFilter, Self::Yes, Self::No]
    }
}
