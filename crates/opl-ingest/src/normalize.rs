//! Row normalization: raw string records into typed competition entries.
//!
//! One rule per field kind:
//! - date: required; a row whose `Date` fails every known format is dropped.
//! - numerics: strict decimal parse; missing/unparseable/non-finite is
//!   `None`, never zero. A genuine `0` parses to `Some(0.0)`.
//! - text: placeholder when missing or empty.
//!
//! Pure functions of their input; no data-quality condition is an error.

use chrono::NaiveDate;
use tracing::debug;

use opl_model::{CompetitionResult, Equipment, EventCode, Lift, UNKNOWN};

use crate::csv::{RawRow, get_field};

pub const COL_NAME: &str = "Name";
pub const COL_DATE: &str = "Date";
pub const COL_WEIGHT_CLASS: &str = "WeightClassKg";
pub const COL_EVENT: &str = "Event";
pub const COL_EQUIPMENT: &str = "Equipment";
pub const COL_TOTAL: &str = "TotalKg";
pub const COL_GOODLIFT: &str = "Goodlift";
pub const COL_BODYWEIGHT: &str = "BodyweightKg";

/// Parses a string as f64, returning None for invalid or empty strings.
///
/// Non-finite results (NaN, infinities) also normalize to None so the
/// model's "every present value is finite" invariant holds.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Date formats accepted in results files, tried in order.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%b-%Y", "%m/%d/%Y", "%d.%m.%Y"];

/// Parse a calendar date, trying each known format.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Normalize one raw record; None when the date is unusable.
pub fn normalize_row(row: &RawRow) -> Option<CompetitionResult> {
    let date = parse_date(get_field(row, COL_DATE))?;

    let mut entry = CompetitionResult::new(date);
    entry.athlete_name = text_or_placeholder(get_field(row, COL_NAME));
    entry.weight_class = text_or_placeholder(get_field(row, COL_WEIGHT_CLASS));
    // Infallible parses: unknown codes land in the Other variant.
    entry.event = EventCode::parse(get_field(row, COL_EVENT));
    entry.equipment = Equipment::parse(get_field(row, COL_EQUIPMENT));
    entry.total = parse_f64(get_field(row, COL_TOTAL));
    entry.goodlift = parse_f64(get_field(row, COL_GOODLIFT));
    entry.bodyweight = parse_f64(get_field(row, COL_BODYWEIGHT));

    for lift in Lift::ALL {
        let best_col = format!("Best3{}Kg", lift.as_str());
        entry.set_recorded_best(lift, parse_f64(get_field(row, &best_col)));
        let attempts = entry.attempts_mut(lift);
        for (idx, slot) in attempts.iter_mut().enumerate() {
            let col = format!("{}{}Kg", lift.as_str(), idx + 1);
            *slot = parse_f64(get_field(row, &col));
        }
    }
    Some(entry)
}

/// Normalize a whole table, in file order, dropping invalid-date rows.
pub fn normalize_rows(rows: &[RawRow]) -> Vec<CompetitionResult> {
    let mut entries = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        match normalize_row(row) {
            Some(entry) => entries.push(entry),
            None => {
                debug!(row = idx + 1, "dropping row with unparseable date");
            }
        }
    }
    entries
}

fn text_or_placeholder(value: &str) -> String {
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parse_f64_strict() {
        assert_eq!(parse_f64("182.5"), Some(182.5));
        assert_eq!(parse_f64(" 182.5 "), Some(182.5));
        assert_eq!(parse_f64("0"), Some(0.0));
        assert_eq!(parse_f64("-5"), Some(-5.0));
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("abc"), None);
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_f64("inf"), None);
    }

    #[test]
    fn parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(expected));
        assert_eq!(parse_date("2024/01/15"), Some(expected));
        assert_eq!(parse_date("15-Jan-2024"), Some(expected));
        assert_eq!(parse_date("01/15/2024"), Some(expected));
        assert_eq!(parse_date("15.01.2024"), Some(expected));
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn bad_date_drops_row() {
        let rows = vec![
            row(&[("Date", "not-a-date"), ("Name", "Alice")]),
            row(&[("Date", "2024-01-01"), ("Name", "Bob")]),
        ];
        let entries = normalize_rows(&rows);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].athlete_name, "Bob");
    }

    #[test]
    fn non_numeric_best_is_absent_not_zero() {
        let rows = vec![row(&[("Date", "2024-01-01"), ("Best3SquatKg", "DQ")])];
        let entries = normalize_rows(&rows);
        assert_eq!(entries[0].best_squat, None);
    }

    #[test]
    fn zero_weight_is_present() {
        let rows = vec![row(&[("Date", "2024-01-01"), ("Best3SquatKg", "0")])];
        let entries = normalize_rows(&rows);
        assert_eq!(entries[0].best_squat, Some(0.0));
    }

    #[test]
    fn missing_text_gets_placeholder() {
        let rows = vec![row(&[("Date", "2024-01-01")])];
        let entries = normalize_rows(&rows);
        assert_eq!(entries[0].athlete_name, UNKNOWN);
        assert_eq!(entries[0].weight_class, UNKNOWN);
    }

    #[test]
    fn attempts_parsed_per_lift() {
        let rows = vec![row(&[
            ("Date", "2024-01-01"),
            ("Squat1Kg", "180"),
            ("Squat2Kg", "190"),
            ("Squat3Kg", "-200"),
            ("Bench2Kg", "100"),
        ])];
        let entries = normalize_rows(&rows);
        let entry = &entries[0];
        assert_eq!(
            entry.squat_attempts,
            [Some(180.0), Some(190.0), Some(-200.0)]
        );
        assert_eq!(entry.bench_attempts, [None, Some(100.0), None]);
        assert_eq!(entry.deadlift_attempts, [None; 3]);
    }

    #[test]
    fn unrecognized_columns_ignored() {
        let rows = vec![row(&[
            ("Date", "2024-01-01"),
            ("Federation", "IPF"),
            ("MeetCountry", "USA"),
        ])];
        assert_eq!(normalize_rows(&rows).len(), 1);
    }
}
