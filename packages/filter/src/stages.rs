//! Individual filter stages.
//!
//! Each stage consumes an owned record sequence and returns the retained
//! subsequence in the same relative order. Stages never report errors;
//! bound parsing happens in [`crate::apply`] before any stage runs.

use chrono::NaiveDate;
use crime_view_records_models::CrimeRecord;

/// Retains records whose primary description contains `query`,
/// case-insensitively. An empty query retains everything.
#[must_use]
pub fn by_description(records: Vec<CrimeRecord>, query: &str) -> Vec<CrimeRecord> {
    retain_by_substring(records, query, |record| &record.primary_description)
}

/// Retains records whose location description contains `query`,
/// case-insensitively. An empty query retains everything.
#[must_use]
pub fn by_location(records: Vec<CrimeRecord>, query: &str) -> Vec<CrimeRecord> {
    retain_by_substring(records, query, |record| &record.location_description)
}

/// Retains records whose occurrence date lies in the inclusive range.
/// `None` on either side means unbounded in that direction.
#[must_use]
pub fn by_date_range(
    mut records: Vec<CrimeRecord>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<CrimeRecord> {
    if start.is_none() && end.is_none() {
        return records;
    }
    records.retain(|record| {
        start.is_none_or(|s| record.occurred_on >= s) && end.is_none_or(|e| record.occurred_on <= e)
    });
    records
}

/// Retains records whose beat lies in the inclusive range. An inverted
/// range (`start > end`) yields an empty result, not an error.
#[must_use]
pub fn by_beat_range(
    records: Vec<CrimeRecord>,
    start: Option<i32>,
    end: Option<i32>,
) -> Vec<CrimeRecord> {
    retain_by_zone(records, start, end, |record| record.beat)
}

/// Retains records whose ward lies in the inclusive range, with the same
/// inverted-range behavior as [`by_beat_range`].
#[must_use]
pub fn by_ward_range(
    records: Vec<CrimeRecord>,
    start: Option<i32>,
    end: Option<i32>,
) -> Vec<CrimeRecord> {
    retain_by_zone(records, start, end, |record| record.ward)
}

/// Retains records whose arrest flag equals `flag`.
#[must_use]
pub fn by_arrest(mut records: Vec<CrimeRecord>, flag: bool) -> Vec<CrimeRecord> {
    records.retain(|record| record.arrest == flag);
    records
}

/// Retains records whose domestic flag equals `flag`.
#[must_use]
pub fn by_domestic(mut records: Vec<CrimeRecord>, flag: bool) -> Vec<CrimeRecord> {
    records.retain(|record| record.domestic == flag);
    records
}

fn retain_by_substring(
    mut records: Vec<CrimeRecord>,
    query: &str,
    field: impl Fn(&CrimeRecord) -> &str,
) -> Vec<CrimeRecord> {
    let query = query.trim();
    if query.is_empty() {
        return records;
    }
    let query = query.to_lowercase();
    records.retain(|record| field(record).to_lowercase().contains(&query));
    records
}

fn retain_by_zone(
    mut records: Vec<CrimeRecord>,
    start: Option<i32>,
    end: Option<i32>,
    zone: impl Fn(&CrimeRecord) -> i32,
) -> Vec<CrimeRecord> {
    if start.is_none() && end.is_none() {
        return records;
    }
    records.retain(|record| {
        let code = zone(record);
        start.is_none_or(|s| code >= s) && end.is_none_or(|e| code <= e)
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(case: &str, date: (i32, u32, u32), beat: i32, ward: i32) -> CrimeRecord {
        CrimeRecord {
            case_number: case.to_owned(),
            latitude: 41.8,
            longitude: -87.6,
            occurred_on: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            primary_description: "THEFT".to_owned(),
            location_description: "STREET".to_owned(),
            beat,
            ward,
            arrest: false,
            domestic: false,
        }
    }

    fn cases(records: &[CrimeRecord]) -> Vec<&str> {
        records.iter().map(|r| r.case_number.as_str()).collect()
    }

    #[test]
    fn date_range_is_inclusive_and_order_preserving() {
        let records = vec![
            record("A", (2021, 6, 25), 1, 1),
            record("B", (2021, 6, 26), 1, 1),
            record("C", (2021, 6, 27), 1, 1),
            record("D", (2021, 6, 28), 1, 1),
        ];
        let filtered = by_date_range(
            records,
            NaiveDate::from_ymd_opt(2021, 6, 26),
            NaiveDate::from_ymd_opt(2021, 6, 27),
        );
        assert_eq!(cases(&filtered), vec!["B", "C"]);
    }

    #[test]
    fn date_range_unbounded_sides() {
        let records = vec![
            record("A", (2021, 6, 25), 1, 1),
            record("B", (2021, 6, 28), 1, 1),
        ];
        let lower_only = by_date_range(
            records.clone(),
            NaiveDate::from_ymd_opt(2021, 6, 26),
            None,
        );
        assert_eq!(cases(&lower_only), vec!["B"]);

        let upper_only = by_date_range(records, None, NaiveDate::from_ymd_opt(2021, 6, 26));
        assert_eq!(cases(&upper_only), vec!["A"]);
    }

    #[test]
    fn no_bounds_passes_through() {
        let records = vec![record("A", (2021, 6, 25), 1, 1)];
        assert_eq!(by_date_range(records.clone(), None, None), records);
        assert_eq!(by_beat_range(records.clone(), None, None), records);
    }

    #[test]
    fn inverted_zone_range_is_empty() {
        let records = vec![
            record("A", (2021, 6, 25), 7, 1),
            record("B", (2021, 6, 25), 8, 1),
        ];
        assert!(by_beat_range(records, Some(10), Some(5)).is_empty());
    }

    #[test]
    fn ward_range_filters_on_ward_not_beat() {
        let records = vec![
            record("A", (2021, 6, 25), 999, 3),
            record("B", (2021, 6, 25), 1, 40),
        ];
        let filtered = by_ward_range(records, Some(1), Some(10));
        assert_eq!(cases(&filtered), vec!["A"]);
    }

    #[test]
    fn substring_matches_anywhere_in_field() {
        let mut records = vec![record("A", (2021, 6, 25), 1, 1)];
        records[0].location_description = "SMALL RETAIL STORE".to_owned();
        let filtered = by_location(records, "retail");
        assert_eq!(cases(&filtered), vec!["A"]);
    }

    #[test]
    fn blank_query_passes_through() {
        let records = vec![record("A", (2021, 6, 25), 1, 1)];
        assert_eq!(by_description(records.clone(), "   "), records);
    }

    #[test]
    fn flag_stages_match_exactly() {
        let mut records = vec![
            record("A", (2021, 6, 25), 1, 1),
            record("B", (2021, 6, 25), 1, 1),
        ];
        records[0].arrest = true;
        records[1].domestic = true;
        assert_eq!(cases(&by_arrest(records.clone(), true)), vec!["A"]);
        assert_eq!(cases(&by_domestic(records, false)), vec!["A"]);
    }
}
