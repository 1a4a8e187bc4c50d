//! Console summary for a completed run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use haz_cli::pipeline::RunSummary;

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

pub fn print_summary(summary: &RunSummary) {
    println!("Export: {}", summary.input.display());
    println!("Archive: {}", summary.output.display());
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Records"), header_cell("Members")]);
    table.add_row(vec![
        Cell::new(summary.records).set_alignment(CellAlignment::Right),
        Cell::new(summary.members).set_alignment(CellAlignment::Right),
    ]);
    println!("{table}");
    println!("Done!");
}
