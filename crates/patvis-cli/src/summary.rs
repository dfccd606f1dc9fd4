//! Console summary of a pipeline run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use patvis_transform::format_numeric;

use crate::pipeline::CleanResult;

/// Prints the run overview and heart-rate statistics.
pub fn print_summary(result: &CleanResult) {
    println!(
        "Patients: {}  Visits: {}  Joined: {}",
        result.patient_rows, result.visit_rows, result.joined_rows
    );
    println!(
        "Cleaned table: {} rows x {} columns",
        result.cleaned.height(),
        result.cleaned.width()
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Heart rate"), header_cell("bpm")]);

    match &result.heart_rate {
        Some(stats) => {
            table.add_row(vec![Cell::new("Maximum"), value_cell(stats.max)]);
            table.add_row(vec![Cell::new("Minimum"), value_cell(stats.min)]);
            table.add_row(vec![Cell::new("Mean"), value_cell(stats.mean)]);
        }
        None => {
            table.add_row(vec![Cell::new("No measurements in range"), Cell::new("-")]);
        }
    }

    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn value_cell(value: f64) -> Cell {
    Cell::new(format_numeric(value)).set_alignment(CellAlignment::Right)
}
