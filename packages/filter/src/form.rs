//! Raw filter form state.
//!
//! Mirrors the map view's form fields one-to-one. Everything stays a raw
//! string (or combo-box choice) until [`crate::apply`] parses it, so the UI
//! layer never pre-validates.

use crime_view_records_models::TriState;
use serde::{Deserialize, Serialize};

/// Raw form field values driving one filter pass.
///
/// Empty strings and [`TriState::DontFilter`] mean "skip that stage".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterForm {
    /// Primary description substring (case-insensitive).
    pub description: String,
    /// Location description substring (case-insensitive).
    pub location: String,
    /// Inclusive lower date bound, `YYYY-MM-DD` or `MM/DD/YYYY`.
    pub start_date: String,
    /// Inclusive upper date bound.
    pub end_date: String,
    /// Inclusive lower beat bound.
    pub start_beat: String,
    /// Inclusive upper beat bound.
    pub end_beat: String,
    /// Inclusive lower ward bound.
    pub start_ward: String,
    /// Inclusive upper ward bound.
    pub end_ward: String,
    /// Arrest flag choice.
    pub arrest: TriState,
    /// Domestic violence flag choice.
    pub domestic: TriState,
}

impl FilterForm {
    /// Whether every field is in its "don't filter" state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.description.trim().is_empty()
            && self.location.trim().is_empty()
            && self.start_date.trim().is_empty()
            && self.end_date.trim().is_empty()
            && self.start_beat.trim().is_empty()
            && self.end_beat.trim().is_empty()
            && self.start_ward.trim().is_empty()
            && self.end_ward.trim().is_empty()
            && self.arrest == TriState::DontFilter
            && self.domestic == TriState::DontFilter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_empty() {
        assert!(FilterForm::default().is_empty());
    }

    #[test]
    fn any_field_makes_form_non_empty() {
        let form = FilterForm {
            start_ward: "5".to_owned(),
            ..FilterForm::default()
        };
        assert!(!form.is_empty());

        let form = FilterForm {
            domestic: TriState::No,
            ..FilterForm::default()
        };
        assert!(!form.is_empty());
    }
}
