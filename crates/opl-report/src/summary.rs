//! Textual summary blocks.
//!
//! Formats the aggregated figures for display; all values are well-defined
//! (zeros, placeholders) even for an empty or fully-filtered-out table.

use serde::Serialize;

use opl_model::{CompetitionResult, Lift, UNKNOWN};
use opl_stats::{LiftStats, load_distribution, most_recent, round2};

/// The summary block: who, what class, bests, total, load split.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub athlete_name: String,
    pub weight_class: String,
    pub best_squat: f64,
    pub best_bench: f64,
    pub best_deadlift: f64,
    /// Sum of the three bests above.
    pub total: f64,
    /// Squat : bench : deadlift split of the most recent entry, when
    /// computable.
    pub load_distribution: Option<String>,
}

/// Build the summary from the filtered table and its per-lift stats.
///
/// Name and weight class come from the most recent entry, matching the
/// single-athlete assumption of the source files.
pub fn build_summary(table: &[CompetitionResult], stats: &[LiftStats; 3]) -> Summary {
    let (athlete_name, weight_class) = match most_recent(table) {
        Some(entry) => (entry.athlete_name.clone(), entry.weight_class.clone()),
        None => (UNKNOWN.to_string(), UNKNOWN.to_string()),
    };
    let best = |lift: Lift| {
        stats
            .iter()
            .find(|s| s.lift == lift)
            .map_or(0.0, |s| s.best)
    };
    let best_squat = best(Lift::Squat);
    let best_bench = best(Lift::Bench);
    let best_deadlift = best(Lift::Deadlift);
    Summary {
        athlete_name,
        weight_class,
        best_squat,
        best_bench,
        best_deadlift,
        total: round2(best_squat + best_bench + best_deadlift),
        load_distribution: load_distribution(table).map(|d| d.format()),
    }
}

impl Summary {
    /// Render as a short text block, one figure per line.
    pub fn to_text_block(&self) -> String {
        let ratio = self.load_distribution.as_deref().unwrap_or("-");
        format!(
            "Athlete: {}\nWeight class: {}\nBest squat: {} kg\nBest bench: {} kg\nBest deadlift: {} kg\nTotal: {} kg\nLoad distribution (S:B:D): {}",
            self.athlete_name,
            self.weight_class,
            self.best_squat,
            self.best_bench,
            self.best_deadlift,
            self.total,
            ratio
        )
    }
}

/// Render one lift's statistics as a text block.
pub fn stats_text_block(stats: &LiftStats) -> String {
    format!(
        "{} best: {} kg\nAvg jump 1\u{2192}2: {} kg\nAvg jump 2\u{2192}3: {} kg\nAvg jump 1\u{2192}3: {} kg\n3rd attempt success: {:.2}%",
        stats.lift,
        stats.best,
        stats.avg_jump_1_2,
        stats.avg_jump_2_3,
        stats.avg_jump_1_3,
        stats.third_attempt_success_rate
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use opl_stats::lift_stats;

    fn entry(date: &str) -> CompetitionResult {
        CompetitionResult::new(date.parse::<NaiveDate>().unwrap())
    }

    fn stats_for(table: &[CompetitionResult]) -> [LiftStats; 3] {
        [
            lift_stats(table, Lift::Squat),
            lift_stats(table, Lift::Bench),
            lift_stats(table, Lift::Deadlift),
        ]
    }

    #[test]
    fn empty_table_gives_placeholder_summary() {
        let summary = build_summary(&[], &stats_for(&[]));
        assert_eq!(summary.athlete_name, UNKNOWN);
        assert_eq!(summary.weight_class, UNKNOWN);
        assert_eq!(summary.best_squat, 0.0);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.load_distribution, None);
        assert!(summary.to_text_block().contains("Load distribution (S:B:D): -"));
    }

    #[test]
    fn summary_uses_most_recent_entry_identity() {
        let mut old = entry("2023-06-01");
        old.athlete_name = "Old Name".to_string();
        old.weight_class = "83".to_string();
        let mut new = entry("2024-06-01");
        new.athlete_name = "New Name".to_string();
        new.weight_class = "93".to_string();
        new.squat_attempts = [Some(150.0), Some(160.0), Some(170.0)];
        new.bench_attempts = [Some(100.0), None, None];
        new.deadlift_attempts = [Some(200.0), None, None];
        let table = vec![old, new];
        let summary = build_summary(&table, &stats_for(&table));
        assert_eq!(summary.athlete_name, "New Name");
        assert_eq!(summary.weight_class, "93");
        assert_eq!(summary.best_squat, 170.0);
        assert_eq!(summary.total, 470.0);
        assert!(summary.load_distribution.is_some());
    }

    #[test]
    fn stats_block_formats_all_figures() {
        let mut e = entry("2024-01-01");
        e.squat_attempts = [Some(180.0), Some(190.0), Some(200.0)];
        let block = stats_text_block(&lift_stats(std::slice::from_ref(&e), Lift::Squat));
        assert!(block.contains("Squat best: 200 kg"));
        assert!(block.contains("3rd attempt success: 100.00%"));
    }
}
