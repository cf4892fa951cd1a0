use std::time::Duration;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ConvertReport;

pub fn print_summary(report: &ConvertReport) {
    if !report.files.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Input"),
            header_cell("Output"),
            header_cell("Lines"),
            header_cell("Written"),
            header_cell("Skipped"),
            header_cell("Time"),
        ]);
        apply_summary_table_style(&mut table);
        for index in 2..=5 {
            align_column(&mut table, index, CellAlignment::Right);
        }
        let mut total_lines = 0usize;
        let mut total_written = 0usize;
        let mut total_skipped = 0usize;
        let mut total_elapsed = Duration::ZERO;
        for summary in &report.files {
            total_lines += summary.lines_read;
            total_written += summary.records_written;
            total_skipped += summary.records_rejected;
            total_elapsed += summary.elapsed;
            table.add_row(vec![
                Cell::new(summary.input.display())
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(summary.output.display()),
                Cell::new(summary.lines_read),
                Cell::new(summary.records_written).fg(Color::Green),
                count_cell(summary.records_rejected, Color::Yellow),
                dim_cell(format_elapsed(summary.elapsed)),
            ]);
        }
        if report.files.len() > 1 {
            table.add_row(vec![
                Cell::new("TOTAL")
                    .fg(Color::Cyan)
                    .add_attribute(Attribute::Bold),
                dim_cell("-"),
                Cell::new(total_lines).add_attribute(Attribute::Bold),
                Cell::new(total_written).add_attribute(Attribute::Bold),
                count_cell(total_skipped, Color::Yellow).add_attribute(Attribute::Bold),
                dim_cell(format_elapsed(total_elapsed)),
            ]);
        }
        println!("{table}");
    }
    if report.has_failures() {
        eprintln!("Errors:");
        for failure in &report.failures {
            eprintln!("- {}: {}", failure.input.display(), failure.error);
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
