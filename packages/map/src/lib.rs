#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Marker projection onto an embedded map surface.
//!
//! The map itself is rendered by an external embedded browser; this crate
//! only addresses it. [`MapSurface`] is the two-instruction contract the
//! projector draws through, [`bridge::WebViewBridge`] turns those
//! instructions into the `placeMarker(...)` / `deleteMarkers()` script
//! calls the embedded page exposes, and [`project`] validates a requested
//! marker count and walks the working set.

pub mod bridge;
pub mod config;

use crime_view_records_models::CrimeRecord;

pub use config::ProjectorConfig;

/// The two fire-and-forget instructions the embedded map accepts.
///
/// No acknowledgement is consumed; a surface that drops an instruction
/// simply shows fewer markers.
pub trait MapSurface {
    /// Draws one marker at the given WGS84 coordinates with a label.
    fn place_marker(&mut self, latitude: f64, longitude: f64, label: &str);

    /// Removes every previously drawn marker.
    fn delete_markers(&mut self);
}

/// Errors that can occur when projecting markers.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// The requested marker count was not a number in `[1, max]`.
    #[error("Please enter a number between 1 and {max}")]
    InvalidCount {
        /// The raw count input as entered.
        input: String,
        /// The configured marker ceiling.
        max: usize,
    },
}

/// Projects the working set onto the map surface.
///
/// Parses `raw_count` and validates it against `[1, config.max_markers]`.
/// On success, clears all prior markers and places one marker per record
/// for the first `min(count, records.len())` records in sequence order,
/// returning the number placed. A valid count over an empty working set
/// still clears the map.
///
/// # Errors
///
/// Returns [`ProjectError::InvalidCount`] if `raw_count` is unparseable or
/// out of range; in that case the surface is left untouched.
pub fn project(
    surface: &mut dyn MapSurface,
    records: &[CrimeRecord],
    raw_count: &str,
    config: &ProjectorConfig,
) -> Result<usize, ProjectError> {
    let requested = parse_count(raw_count, config.max_markers)?;
    let count = requested.min(records.len());

    surface.delete_markers();
    for record in &records[..count] {
        surface.place_marker(record.latitude, record.longitude, &record.case_number);
    }

    log::debug!("Placed {count} of {requested} requested markers");
    Ok(count)
}

/// Parses and range-checks a raw marker count.
fn parse_count(raw: &str, max: usize) -> Result<usize, ProjectError> {
    let invalid = || ProjectError::InvalidCount {
        input: raw.to_owned(),
        max,
    };
    let count = raw.trim().parse::<usize>().map_err(|_| invalid())?;
    if count < 1 || count > max {
        return Err(invalid());
    }
    Ok(count)
}


#[cfg(test)]
mod tests {
    use crime_view_records_models::CrimeRecord;

    use super::test_surface::RecordingSurface;
    use super::*;

    fn record(case: &str, latitude: f64, longitude: f64) -> CrimeRecord {
        CrimeRecord {
            case_number: case.to_owned(),
            latitude,
            longitude,
            occurred_on: chrono_date(),
            primary_description: "THEFT".to_owned(),
            location_description: "STREET".to_owned(),
            beat: 334,
            ward: 7,
            arrest: true,
            domestic: false,
        }
    }

    fn chrono_date() -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(2021, 6, 26).unwrap()
    }

    #[test]
    fn clears_then_places_in_sequence_order() {
        let records = vec![record("A", 41.8, -87.6), record("B", 41.9, -87.7)];
        let mut surface = RecordingSurface::default();

        let placed = project(&mut surface, &records, "1", &ProjectorConfig::default()).unwrap();

        assert_eq!(placed, 1);
        assert_eq!(
            surface.instructions,
            vec!["delete".to_owned(), "place 41.8 -87.6 A".to_owned()]
        );
    }

    #[test]
    fn clamps_count_to_working_set_length() {
        let records = vec![record("A", 41.8, -87.6), record("B", 41.9, -87.7)];
        let mut surface = RecordingSurface::default();

        let placed = project(&mut surface, &records, "500", &ProjectorConfig::default()).unwrap();

        assert_eq!(placed, 2);
        assert_eq!(surface.instructions.len(), 3);
    }

    #[test]
    fn zero_count_is_rejected_and_draws_nothing() {
        let records = vec![record("A", 41.8, -87.6)];
        let mut surface = RecordingSurface::default();

        let result = project(&mut surface, &records, "0", &ProjectorConfig::default());

        assert!(matches!(result, Err(ProjectError::InvalidCount { .. })));
        assert!(surface.instructions.is_empty());
    }

    #[test]
    fn over_ceiling_count_is_rejected() {
        let records = vec![record("A", 41.8, -87.6)];
        let mut surface = RecordingSurface::default();

        let result = project(&mut surface, &records, "1001", &ProjectorConfig::default());

        assert!(matches!(
            result,
            Err(ProjectError::InvalidCount { max: 1000, .. })
        ));
        assert!(surface.instructions.is_empty());
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let mut surface = RecordingSurface::default();
        let result = project(&mut surface, &[], "lots", &ProjectorConfig::default());
        assert!(result.is_err());
        assert!(surface.instructions.is_empty());
    }

    #[test]
    fn valid_count_over_empty_set_still_clears() {
        let mut surface = RecordingSurface::default();
        let placed = project(&mut surface, &[], "5", &ProjectorConfig::default()).unwrap();
        assert_eq!(placed, 0);
        assert_eq!(surface.instructions, vec!["delete".to_owned()]);
    }

    #[test]
    fn invalid_count_message_names_the_ceiling() {
        let config = ProjectorConfig { max_markers: 250 };
        let mut surface = RecordingSurface::default();
        let error = project(&mut surface, &[], "300", &config).unwrap_err();
        assert_eq!(error.to_string(), "Please enter a number between 1 and 250");
    }
}
