//! The filter stage: event × equipment narrowing of the normalized table.

use opl_model::{CompetitionResult, FilterSelection};
use tracing::debug;

/// Return the subsequence of entries matching the selection.
///
/// Order preserved, input untouched. Applying the same selection to its own
/// output is a no-op.
pub fn apply_filter(
    table: &[CompetitionResult],
    selection: &FilterSelection,
) -> Vec<CompetitionResult> {
    let filtered: Vec<CompetitionResult> = table
        .iter()
        .filter(|entry| selection.matches(entry))
        .cloned()
        .collect();
    debug!(
        total = table.len(),
        kept = filtered.len(),
        "applied event/equipment filter"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use opl_model::{Equipment, EventCode};

    fn entry(day: u32, event: EventCode, equipment: Equipment) -> CompetitionResult {
        let mut entry =
            CompetitionResult::new(NaiveDate::from_ymd_opt(2024, 1, day).unwrap());
        entry.event = event;
        entry.equipment = equipment;
        entry
    }

    fn sample() -> Vec<CompetitionResult> {
        vec![
            entry(1, EventCode::Sbd, Equipment::Raw),
            entry(2, EventCode::Sbd, Equipment::SinglePly),
            entry(3, EventCode::BenchOnly, Equipment::Raw),
        ]
    }

    #[test]
    fn and_semantics_across_dimensions() {
        let table = sample();
        let sel = FilterSelection::any()
            .with_event(EventCode::Sbd)
            .with_equipment(Equipment::Raw);
        let filtered = apply_filter(&table, &sel);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date.to_string(), "2024-01-01");
    }

    #[test]
    fn wildcard_keeps_everything_in_order() {
        let table = sample();
        let filtered = apply_filter(&table, &FilterSelection::any());
        assert_eq!(filtered, table);
    }

    #[test]
    fn idempotent() {
        let table = sample();
        let sel = FilterSelection::any().with_equipment(Equipment::Raw);
        let once = apply_filter(&table, &sel);
        let twice = apply_filter(&once, &sel);
        assert_eq!(once, twice);
    }

    #[test]
    fn mismatched_selection_yields_empty() {
        let table = vec![entry(1, EventCode::Sbd, Equipment::SinglePly)];
        let sel = FilterSelection::any()
            .with_event(EventCode::Sbd)
            .with_equipment(Equipment::Raw);
        assert!(apply_filter(&table, &sel).is_empty());
    }
}
