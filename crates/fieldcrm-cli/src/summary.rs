use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fieldcrm_ingest::{FailureReason, RowFailure};

use fieldcrm_cli::types::{ExportResult, ImportResult};

pub fn print_export_summary(result: &ExportResult) {
    println!("Output: {}", result.output.display());
    println!("Objects: {}", result.objects);
}

pub fn print_import_summary(result: &ImportResult) {
    println!("Source: {}", result.source.display());
    if result.dry_run {
        println!("Mode: dry run (nothing was sent)");
    }
    if let Some(path) = &result.emitted {
        println!("Payloads: {}", path.display());
    }
    let summary = &result.summary;
    if summary.is_empty() {
        println!("No data rows found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Created"), header_cell("Skipped")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        count_cell(summary.created, Color::Green),
        count_cell(summary.skipped, Color::Yellow),
    ]);
    println!("{table}");
    print_failure_table(&summary.failures);
}

fn print_failure_table(failures: &[RowFailure]) {
    if failures.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Kind"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for failure in failures {
        table.add_row(vec![
            Cell::new(failure.line),
            kind_cell(&failure.reason),
            Cell::new(failure.reason.to_string()),
        ]);
    }
    println!();
    println!("Skipped rows:");
    println!("{table}");
}

fn kind_cell(reason: &FailureReason) -> Cell {
    match reason {
        FailureReason::MissingRequired(_) => Cell::new("INVALID").fg(Color::Yellow),
        FailureReason::Rejected(_) => Cell::new("REJECTED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
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
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
