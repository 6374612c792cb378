//! Chart series shaping.
//!
//! Produces Plotly-compatible trace structures: a lifts-over-time view and
//! per-lift attempt views. Shaping and formatting only; every number here
//! was computed upstream. Absent values serialize as JSON `null`, which the
//! charting side renders as a gap in the line.

use serde::Serialize;

use opl_model::{CompetitionResult, Lift};
use opl_stats::is_valid_attempt;

/// Scatter trace for the time-series view.
#[derive(Debug, Clone, Serialize)]
pub struct TimeTrace {
    /// ISO dates, one per entry, file order.
    pub x: Vec<String>,
    /// Best-of-three per entry; `null` where the lift has no value.
    pub y: Vec<Option<f64>>,
    pub name: String,
    pub mode: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub line: Line,
    /// Per-point hover detail (attempt outcomes, or bodyweight/score for
    /// the total trace).
    pub hovertext: Vec<String>,
    pub hoverinfo: &'static str,
}

/// Scatter trace for the fixed three-point attempt view: one trace per
/// competition date.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptTrace {
    /// Always `[1, 2, 3]`; failed attempts keep their slot.
    pub x: [u8; 3],
    /// `null` for a failed or untaken attempt, a gap rather than a point.
    pub y: [Option<f64>; 3],
    /// The entry's ISO date, used as the legend label.
    pub name: String,
    pub mode: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub line: Line,
    pub hovertext: [String; 3],
    pub hoverinfo: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<&'static str>,
}

/// Trace color per lift, consistent across both views.
pub fn lift_color(lift: Lift) -> &'static str {
    match lift {
        Lift::Squat => "blue",
        Lift::Bench => "red",
        Lift::Deadlift => "green",
    }
}

const SCATTER: &str = "scatter";
const LINES_AND_MARKERS: &str = "lines+markers";
const HOVER_INFO: &str = "text+x+y";

/// Hover line for one attempt slot: weight or "Failed".
fn attempt_label(lift: Lift, number: usize, value: Option<f64>) -> String {
    let outcome = match value {
        Some(v) if is_valid_attempt(Some(v)) => format!("{v} kg"),
        _ => "Failed".to_string(),
    };
    format!("{lift} Attempt {number}: {outcome}")
}

fn attempt_hover_block(entry: &CompetitionResult, lift: Lift) -> String {
    let attempts = entry.attempts(lift);
    (0..3)
        .map(|i| attempt_label(lift, i + 1, attempts[i]))
        .collect::<Vec<_>>()
        .join("<br>")
}

/// The lifts-over-time view: one trace per lift plus a dashed total trace
/// carrying bodyweight and goodlift score in its hover text.
pub fn lifts_over_time(table: &[CompetitionResult]) -> Vec<TimeTrace> {
    let dates: Vec<String> = table.iter().map(|e| e.date.to_string()).collect();

    let mut traces: Vec<TimeTrace> = Lift::ALL
        .into_iter()
        .map(|lift| TimeTrace {
            x: dates.clone(),
            y: table.iter().map(|e| e.recorded_best(lift)).collect(),
            name: lift.to_string(),
            mode: LINES_AND_MARKERS,
            kind: SCATTER,
            line: Line {
                color: lift_color(lift),
                dash: None,
            },
            hovertext: table
                .iter()
                .map(|e| attempt_hover_block(e, lift))
                .collect(),
            hoverinfo: HOVER_INFO,
        })
        .collect();

    traces.push(TimeTrace {
        x: dates,
        y: table.iter().map(|e| e.total).collect(),
        name: "Total".to_string(),
        mode: LINES_AND_MARKERS,
        kind: SCATTER,
        line: Line {
            color: "black",
            dash: Some("dash"),
        },
        hovertext: table.iter().map(total_hover_block).collect(),
        hoverinfo: HOVER_INFO,
    });
    traces
}

fn total_hover_block(entry: &CompetitionResult) -> String {
    let bodyweight = entry
        .bodyweight
        .map_or_else(|| "-".to_string(), |v| format!("{v} kg"));
    let goodlift = entry
        .goodlift
        .map_or_else(|| "-".to_string(), |v| v.to_string());
    format!("Bodyweight: {bodyweight}<br>GL: {goodlift}")
}

/// The per-lift attempt view: one trace per entry, x fixed at 1..3.
pub fn attempts_view(table: &[CompetitionResult], lift: Lift) -> Vec<AttemptTrace> {
    table
        .iter()
        .map(|entry| {
            let attempts = entry.attempts(lift);
            AttemptTrace {
                x: [1, 2, 3],
                y: std::array::from_fn(|i| attempts[i].filter(|v| *v > 0.0)),
                name: entry.date.to_string(),
                mode: LINES_AND_MARKERS,
                kind: SCATTER,
                line: Line {
                    color: lift_color(lift),
                    dash: None,
                },
                hovertext: std::array::from_fn(|i| attempt_label(lift, i + 1, attempts[i])),
                hoverinfo: HOVER_INFO,
            }
        })
        .collect()
}
