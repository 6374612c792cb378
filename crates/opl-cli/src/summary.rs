//! Terminal report rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::cli::ReportFormat;
use crate::pipeline::{PipelineOutput, Report};

pub fn print_report(output: &PipelineOutput, format: ReportFormat) {
    match format {
        ReportFormat::Text => print_text(output),
        ReportFormat::Json => print_json(output),
    }
}

fn print_json(output: &PipelineOutput) {
    let report = Report {
        summary: &output.summary,
        lifts: &output.stats,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(error) => eprintln!("error: failed to serialize report: {error}"),
    }
}

fn print_text(output: &PipelineOutput) {
    println!(
        "Entries: {} loaded, {} after filter",
        output.loaded, output.kept
    );

    let summary = &output.summary;
    let mut table = new_table();
    table.set_header(vec![header_cell("Summary"), header_cell("")]);
    table.add_row(vec![Cell::new("Athlete"), Cell::new(&summary.athlete_name)]);
    table.add_row(vec![
        Cell::new("Weight class"),
        Cell::new(&summary.weight_class),
    ]);
    table.add_row(vec![
        Cell::new("Best squat"),
        kg_cell(summary.best_squat),
    ]);
    table.add_row(vec![
        Cell::new("Best bench"),
        kg_cell(summary.best_bench),
    ]);
    table.add_row(vec![
        Cell::new("Best deadlift"),
        kg_cell(summary.best_deadlift),
    ]);
    table.add_row(vec![Cell::new("Total"), kg_cell(summary.total)]);
    table.add_row(vec![
        Cell::new("Load split (S:B:D)"),
        Cell::new(summary.load_distribution.as_deref().unwrap_or("-")),
    ]);
    println!("{table}");

    let mut stats_table = new_table();
    stats_table.set_header(vec![
        header_cell("Lift"),
        header_cell("Best (kg)"),
        header_cell("Jump 1\u{2192}2"),
        header_cell("Jump 2\u{2192}3"),
        header_cell("Jump 1\u{2192}3"),
        header_cell("3rd attempt"),
    ]);
    for column in stats_table.column_iter_mut().skip(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for stats in &output.stats {
        stats_table.add_row(vec![
            Cell::new(stats.lift),
            Cell::new(stats.best),
            Cell::new(stats.avg_jump_1_2),
            Cell::new(stats.avg_jump_2_3),
            Cell::new(stats.avg_jump_1_3),
            Cell::new(format!("{:.2}%", stats.third_attempt_success_rate)),
        ]);
    }
    println!("{stats_table}");

    for path in &output.written {
        println!("wrote {}", path.display());
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn kg_cell(value: f64) -> Cell {
    Cell::new(format!("{value} kg"))
}
