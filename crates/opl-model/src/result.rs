//! The normalized competition-result entity.

use chrono::NaiveDate;

use crate::enums::{Equipment, EventCode, Lift};

/// Placeholder for missing text fields (athlete name, weight class).
pub const UNKNOWN: &str = "Unknown";

/// One normalized row of a results file: a single competition entry.
///
/// Every entry carries a valid `date`; rows whose date fails to parse never
/// become a `CompetitionResult`. Numeric fields use a single presence
/// representation: `Some(v)` with `v` finite, or `None` when the source value
/// was missing, empty, or unparseable. A recorded zero stays `Some(0.0)` here;
/// whether zero counts as a made lift is an aggregation concern.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionResult {
    pub date: NaiveDate,
    pub athlete_name: String,
    pub weight_class: String,
    pub event: EventCode,
    pub equipment: Equipment,
    pub best_squat: Option<f64>,
    pub best_bench: Option<f64>,
    pub best_deadlift: Option<f64>,
    pub total: Option<f64>,
    pub goodlift: Option<f64>,
    pub bodyweight: Option<f64>,
    /// Attempts 1-3, file order. Non-positive values are recorded as-is;
    /// a missed attempt is conventionally stored negative upstream.
    pub squat_attempts: [Option<f64>; 3],
    pub bench_attempts: [Option<f64>; 3],
    pub deadlift_attempts: [Option<f64>; 3],
}

impl CompetitionResult {
    /// Entry with the given date and everything else absent/placeholder.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            athlete_name: UNKNOWN.to_string(),
            weight_class: UNKNOWN.to_string(),
            event: EventCode::Other(String::new()),
            equipment: Equipment::Other(String::new()),
            best_squat: None,
            best_bench: None,
            best_deadlift: None,
            total: None,
            goodlift: None,
            bodyweight: None,
            squat_attempts: [None; 3],
            bench_attempts: [None; 3],
            deadlift_attempts: [None; 3],
        }
    }

    /// The recorded best-of-three column for a lift.
    pub fn recorded_best(&self, lift: Lift) -> Option<f64> {
        match lift {
            Lift::Squat => self.best_squat,
            Lift::Bench => self.best_bench,
            Lift::Deadlift => self.best_deadlift,
        }
    }

    /// The three attempts for a lift, in order.
    pub fn attempts(&self, lift: Lift) -> &[Option<f64>; 3] {
        match lift {
            Lift::Squat => &self.squat_attempts,
            Lift::Bench => &self.bench_attempts,
            Lift::Deadlift => &self.deadlift_attempts,
        }
    }

    pub fn attempts_mut(&mut self, lift: Lift) -> &mut [Option<f64>; 3] {
        match lift {
            Lift::Squat => &mut self.squat_attempts,
            Lift::Bench => &mut self.bench_attempts,
            Lift::Deadlift => &mut self.deadlift_attempts,
        }
    }

    pub fn set_recorded_best(&mut self, lift: Lift, value: Option<f64>) {
        match lift {
            Lift::Squat => self.best_squat = value,
            Lift::Bench => self.best_bench = value,
            Lift::Deadlift => self.best_deadlift = value,
        }
    }
}
