//! Filtering and statistics over normalized competition results.
//!
//! Everything here is a pure function of the table it is handed; the
//! normalized table is a value passed in, never shared state.

mod filter;
mod metrics;

pub use filter::apply_filter;
pub use metrics::{
    LiftStats, LoadDistribution, entry_best, is_valid_attempt, lift_stats, load_distribution,
    most_recent, round2,
};
