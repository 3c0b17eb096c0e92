#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Form-driven crime record filter pipeline.
//!
//! [`apply`] narrows an owned snapshot of the full dataset through a fixed
//! sequence of independent stages: description substring, location
//! substring, date range, beat range, ward range, arrest flag, domestic
//! flag. Every stage is optional (empty input passes records through
//! unchanged) and every stage preserves relative record order.
//!
//! Parse failures are per-field values, never errors: a malformed bound
//! yields a [`FieldError`] for the UI to surface next to that field, the
//! bound is treated as absent, and the rest of the pipeline still runs.

pub mod form;
pub mod stages;

use chrono::NaiveDate;
use crime_view_records_models::CrimeRecord;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use form::FilterForm;

/// Identifies which form field a validation failure belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "title_case")]
pub enum FilterField {
    /// Lower bound of the date range.
    StartDate,
    /// Upper bound of the date range.
    EndDate,
    /// Lower bound of the beat range.
    StartBeat,
    /// Upper bound of the beat range.
    EndBeat,
    /// Lower bound of the ward range.
    StartWard,
    /// Upper bound of the ward range.
    EndWard,
}

/// What kind of value failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldErrorKind {
    /// The raw input was not a recognizable calendar date.
    InvalidDate,
    /// The raw input was not an integer zone code.
    InvalidInteger,
}

/// A field-scoped validation failure.
///
/// These are values carried alongside the filtered records, not errors:
/// one malformed field never aborts the other stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The field whose raw input failed to parse.
    pub field: FilterField,
    /// The raw input as entered.
    pub input: String,
    /// What kind of parse failed.
    pub kind: FieldErrorKind,
}

impl FieldError {
    /// The short per-field message a UI shows next to the offending field.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.field {
            FilterField::StartDate | FilterField::EndDate => "Invalid Date",
            FilterField::StartBeat | FilterField::EndBeat => "Invalid Beat",
            FilterField::StartWard | FilterField::EndWard => "Invalid Ward",
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({:?})", self.field, self.label(), self.input)
    }
}

/// Result of a full pipeline pass: the working set plus any field errors.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// Records satisfying every successfully-parsed stage, in snapshot order.
    pub records: Vec<CrimeRecord>,
    /// Validation failures, one per malformed field.
    pub errors: Vec<FieldError>,
}

/// Applies the full filter pipeline to an owned snapshot.
///
/// Stages run in a fixed order: description, location, date range, beat
/// range, ward range, arrest, domestic. Each malformed bound contributes a
/// [`FieldError`] and is treated as unbounded; valid sibling bounds still
/// apply.
#[must_use]
pub fn apply(snapshot: Vec<CrimeRecord>, form: &FilterForm) -> FilterOutcome {
    let mut errors = Vec::new();

    let start_date = parse_date_field(&form.start_date, FilterField::StartDate, &mut errors);
    let end_date = parse_date_field(&form.end_date, FilterField::EndDate, &mut errors);
    let start_beat = parse_zone_field(&form.start_beat, FilterField::StartBeat, &mut errors);
    let end_beat = parse_zone_field(&form.end_beat, FilterField::EndBeat, &mut errors);
    let start_ward = parse_zone_field(&form.start_ward, FilterField::StartWard, &mut errors);
    let end_ward = parse_zone_field(&form.end_ward, FilterField::EndWard, &mut errors);

    let mut records = snapshot;
    records = stages::by_description(records, &form.description);
    records = stages::by_location(records, &form.location);
    records = stages::by_date_range(records, start_date, end_date);
    records = stages::by_beat_range(records, start_beat, end_beat);
    records = stages::by_ward_range(records, start_ward, end_ward);
    if let Some(flag) = form.arrest.as_bool() {
        records = stages::by_arrest(records, flag);
    }
    if let Some(flag) = form.domestic.as_bool() {
        records = stages::by_domestic(records, flag);
    }

    FilterOutcome { records, errors }
}

/// Parses one raw date bound. Empty input means unbounded; malformed input
/// records a [`FieldError`] and also means unbounded.
fn parse_date_field(
    raw: &str,
    field: FilterField,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    parse_filter_date(raw).map_or_else(
        || {
            errors.push(FieldError {
                field,
                input: raw.to_owned(),
                kind: FieldErrorKind::InvalidDate,
            });
            None
        },
        Some,
    )
}

/// Parses one raw beat/ward bound with the same empty/malformed handling as
/// [`parse_date_field`].
fn parse_zone_field(raw: &str, field: FilterField, errors: &mut Vec<FieldError>) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<i32>().map_or_else(
        |_| {
            errors.push(FieldError {
                field,
                input: raw.to_owned(),
                kind: FieldErrorKind::InvalidInteger,
            });
            None
        },
        Some,
    )
}

/// Parses a date filter value in ISO `YYYY-MM-DD` or `MM/DD/YYYY` form.
#[must_use]
pub fn parse_filter_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return Some(date);
    }
    None
}
