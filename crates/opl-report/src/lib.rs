//! Presentation adapter: chart series structures and summary text blocks.
//!
//! Receives aggregated data from `opl-stats` and shapes it for rendering.
//! No business logic lives here; numeric computation belongs upstream.

mod series;
mod summary;

pub use series::{AttemptTrace, Line, TimeTrace, attempts_view, lift_color, lifts_over_time};
pub use summary::{Summary, build_summary, stats_text_block};
