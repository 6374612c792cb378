//! Filter selection: the event × equipment narrowing applied to a table.

use crate::enums::{Equipment, EventCode};
use crate::result::CompetitionResult;

/// The pair of categorical choices driving the filtered view.
///
/// `None` on a dimension is the "any" wildcard. The two dimensions are
/// independent: an entry must match both to pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub event: Option<EventCode>,
    pub equipment: Option<Equipment>,
}

impl FilterSelection {
    /// Selection that matches every entry.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_event(mut self, event: EventCode) -> Self {
        self.event = Some(event);
        self
    }

    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = Some(equipment);
        self
    }

    /// Logical AND across both dimensions.
    pub fn matches(&self, entry: &CompetitionResult) -> bool {
        self.event.as_ref().is_none_or(|e| *e == entry.event)
            && self.equipment.as_ref().is_none_or(|e| *e == entry.equipment)
    }
}
