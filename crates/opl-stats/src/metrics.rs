//! Per-lift statistics over a (possibly filtered) table.
//!
//! Two presence conventions meet here, on purpose. The model keeps numerics
//! as `Option<f64>` (absent vs present, zero included). Aggregates collapse
//! to plain numbers with zero meaning "nothing qualified", which is what the
//! rendered views expect for an empty or over-filtered table.

use opl_model::{CompetitionResult, Lift};
use serde::Serialize;

/// An attempt counts only if it was recorded and strictly positive.
///
/// Missed and unattempted lifts are stored non-positive (or not at all)
/// upstream, so zero fails the predicate too.
pub fn is_valid_attempt(value: Option<f64>) -> bool {
    value.is_some_and(|v| v > 0.0)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Aggregated figures for one lift category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiftStats {
    pub lift: Lift,
    /// Heaviest successful attempt anywhere in the table; 0.0 when none.
    pub best: f64,
    /// Mean jump from attempt 1 to 2, two decimals; 0.0 when no entry has
    /// both attempts valid.
    pub avg_jump_1_2: f64,
    pub avg_jump_2_3: f64,
    pub avg_jump_1_3: f64,
    /// Percentage of entries with all three attempts recorded whose third
    /// attempt succeeded; always within [0, 100].
    pub third_attempt_success_rate: f64,
}

/// The best a single entry shows for a lift.
///
/// Prefers the heaviest valid attempt; entries without usable attempt detail
/// fall back to their recorded best-of-three column (which may be stale, but
/// is better than dropping the entry). None when neither qualifies.
pub fn entry_best(entry: &CompetitionResult, lift: Lift) -> Option<f64> {
    let best_attempt = entry
        .attempts(lift)
        .iter()
        .filter_map(|a| a.filter(|v| *v > 0.0))
        .reduce(f64::max);
    best_attempt.or_else(|| entry.recorded_best(lift).filter(|v| *v > 0.0))
}

/// Compute the full per-lift statistics block.
pub fn lift_stats(table: &[CompetitionResult], lift: Lift) -> LiftStats {
    let best = table
        .iter()
        .filter_map(|entry| entry_best(entry, lift))
        .fold(0.0_f64, f64::max);

    LiftStats {
        lift,
        best,
        avg_jump_1_2: mean_jump(table, lift, 0, 1),
        avg_jump_2_3: mean_jump(table, lift, 1, 2),
        avg_jump_1_3: mean_jump(table, lift, 0, 2),
        third_attempt_success_rate: third_attempt_success_rate(table, lift),
    }
}

/// Mean delta between two attempt slots over entries where both are valid.
fn mean_jump(table: &[CompetitionResult], lift: Lift, from: usize, to: usize) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for entry in table {
        let attempts = entry.attempts(lift);
        if is_valid_attempt(attempts[from]) && is_valid_attempt(attempts[to]) {
            sum += attempts[to].unwrap_or(0.0) - attempts[from].unwrap_or(0.0);
            count += 1;
        }
    }
    if count == 0 {
        return 0.0;
    }
    round2(sum / count as f64)
}

/// Third-attempt success percentage.
///
/// Denominator: entries with all three attempts recorded (sign irrelevant).
/// Numerator: those of them whose third attempt succeeded. Restricting the
/// numerator to the denominator set keeps the rate within [0, 100] even for
/// tables with partial attempt data.
fn third_attempt_success_rate(table: &[CompetitionResult], lift: Lift) -> f64 {
    let mut attempted_all = 0usize;
    let mut made_third = 0usize;
    for entry in table {
        let attempts = entry.attempts(lift);
        if attempts.iter().all(Option::is_some) {
            attempted_all += 1;
            if is_valid_attempt(attempts[2]) {
                made_third += 1;
            }
        }
    }
    if attempted_all == 0 {
        return 0.0;
    }
    round2(100.0 * made_third as f64 / attempted_all as f64)
}

/// How the most recent entry's total splits across the three lifts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadDistribution {
    pub squat_pct: f64,
    pub bench_pct: f64,
    pub deadlift_pct: f64,
}

impl LoadDistribution {
    /// Colon-separated triple, squat : bench : deadlift.
    pub fn format(&self) -> String {
        format!(
            "{:.2} : {:.2} : {:.2}",
            self.squat_pct, self.bench_pct, self.deadlift_pct
        )
    }
}

/// Most recent entry by date; ties go to the later file position.
pub fn most_recent(table: &[CompetitionResult]) -> Option<&CompetitionResult> {
    let mut latest: Option<&CompetitionResult> = None;
    for entry in table {
        if latest.is_none_or(|best| entry.date >= best.date) {
            latest = Some(entry);
        }
    }
    latest
}

/// Relative contribution of each lift's best to the summed bests of the
/// most recent entry. None when the table is empty or the sum is not
/// positive.
pub fn load_distribution(table: &[CompetitionResult]) -> Option<LoadDistribution> {
    let entry = most_recent(table)?;
    let squat = entry_best(entry, Lift::Squat).unwrap_or(0.0);
    let bench = entry_best(entry, Lift::Bench).unwrap_or(0.0);
    let deadlift = entry_best(entry, Lift::Deadlift).unwrap_or(0.0);
    let sum = squat + bench + deadlift;
    if sum <= 0.0 {
        return None;
    }
    Some(LoadDistribution {
        squat_pct: round2(100.0 * squat / sum),
        bench_pct: round2(100.0 * bench / sum),
        deadlift_pct: round2(100.0 * deadlift / sum),
    })
}
