//! Data model for powerlifting meet-results analysis.
//!
//! Defines the normalized competition entry, the categorical enums it is
//! keyed by, and the filter selection applied downstream. Parsing lives in
//! `opl-ingest`; statistics live in `opl-stats`. This crate is pure types.

pub mod enums;
pub mod filter;
pub mod result;

pub use enums::{Equipment, EventCode, Lift};
pub use filter::FilterSelection;
pub use result::{CompetitionResult, UNKNOWN};
