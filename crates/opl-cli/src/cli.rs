//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use opl_model::{Equipment, EventCode};

#[derive(Parser)]
#[command(
    name = "opl-progress",
    version,
    about = "Analyze powerlifting meet results and emit progress charts",
    long_about = "Parse an OpenPowerlifting-style results CSV, filter by event and\n\
                  equipment, compute per-lift statistics, and emit Plotly-ready\n\
                  chart series plus a textual summary."
)]
pub struct Cli {
    /// Path to the results CSV file.
    #[arg(value_name = "RESULTS_CSV")]
    pub input: PathBuf,

    /// Only include entries with this event code (e.g. SBD, B). Omit for any.
    #[arg(long, value_name = "CODE")]
    pub event: Option<EventCode>,

    /// Only include entries with this equipment category (e.g. Raw,
    /// Single-ply). Omit for any.
    #[arg(long, value_name = "CATEGORY")]
    pub equipment: Option<Equipment>,

    /// Directory to write chart-series JSON files into.
    #[arg(long = "out", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Terminal report format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q to quiet).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable tables.
    Text,
    /// Machine-readable JSON on stdout.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_filters() {
        let cli = Cli::parse_from([
            "opl-progress",
            "results.csv",
            "--event",
            "sbd",
            "--equipment",
            "Raw",
        ]);
        assert_eq!(cli.event, Some(EventCode::Sbd));
        assert_eq!(cli.equipment, Some(Equipment::Raw));
        assert_eq!(cli.format, ReportFormat::Text);
    }
}
