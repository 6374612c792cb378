//! The pipeline driver: ingest → normalize → filter → aggregate → shape.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use opl_ingest::{normalize_rows, read_csv_rows};
use opl_model::{FilterSelection, Lift};
use opl_report::{Summary, attempts_view, build_summary, lifts_over_time};
use opl_stats::{LiftStats, apply_filter, lift_stats};

use crate::cli::Cli;

/// Everything one run produces, for the terminal report and for tests.
#[derive(Debug)]
pub struct PipelineOutput {
    /// Normalized entry count, before filtering.
    pub loaded: usize,
    /// Entry count after the event/equipment filter.
    pub kept: usize,
    pub summary: Summary,
    pub stats: [LiftStats; 3],
    /// JSON files written under `--out`, if any.
    pub written: Vec<PathBuf>,
}

/// The JSON report body (`summary.json` and `--format json`).
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub summary: &'a Summary,
    pub lifts: &'a [LiftStats; 3],
}

pub fn run(cli: &Cli) -> Result<PipelineOutput> {
    let rows = read_csv_rows(&cli.input)
        .with_context(|| format!("loading {}", cli.input.display()))?;
    let table = normalize_rows(&rows);
    info!(
        rows = rows.len(),
        entries = table.len(),
        "normalized results file"
    );

    let selection = FilterSelection {
        event: cli.event.clone(),
        equipment: cli.equipment.clone(),
    };
    let filtered = apply_filter(&table, &selection);

    let stats = [
        lift_stats(&filtered, Lift::Squat),
        lift_stats(&filtered, Lift::Bench),
        lift_stats(&filtered, Lift::Deadlift),
    ];
    let summary = build_summary(&filtered, &stats);

    let mut written = Vec::new();
    if let Some(out_dir) = &cli.out_dir {
        written = write_series(out_dir, &filtered, &summary, &stats)?;
        info!(files = written.len(), dir = %out_dir.display(), "wrote chart series");
    }

    Ok(PipelineOutput {
        loaded: table.len(),
        kept: filtered.len(),
        summary,
        stats,
        written,
    })
}

/// Write the chart-series and summary JSON files.
fn write_series(
    out_dir: &Path,
    filtered: &[opl_model::CompetitionResult],
    summary: &Summary,
    stats: &[LiftStats; 3],
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let mut written = Vec::new();

    write_json(out_dir.join("lifts.json"), &lifts_over_time(filtered), &mut written)?;
    for lift in Lift::ALL {
        let name = format!("{}-attempts.json", lift.as_str().to_lowercase());
        write_json(out_dir.join(name), &attempts_view(filtered, lift), &mut written)?;
    }
    write_json(
        out_dir.join("summary.json"),
        &Report {
            summary,
            lifts: stats,
        },
        &mut written,
    )?;
    Ok(written)
}

fn write_json<T: Serialize>(path: PathBuf, value: &T, written: &mut Vec<PathBuf>) -> Result<()> {
    let file =
        File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("writing {}", path.display()))?;
    written.push(path);
    Ok(())
}
