use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use inflammation_model::{Named, Patient};
use inflammation_stats::Table as Readings;

use crate::commands::DailySummary;

pub fn print_daily_summary(summary: &DailySummary) {
    println!("File: {}", summary.source.display());
    println!("Patients: {}", summary.patients);
    println!("{}", daily_summary_table(summary));
}

pub fn daily_summary_table(summary: &DailySummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Day"),
        header_cell("Mean"),
        header_cell("Max"),
        header_cell("Min"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let days = summary
        .mean
        .iter()
        .zip(&summary.max)
        .zip(&summary.min)
        .enumerate();
    for (day, ((&mean, &max), &min)) in days {
        table.add_row(vec![
            Cell::new(day),
            value_cell(mean),
            value_cell(max),
            value_cell(min),
        ]);
    }
    table
}

pub fn print_readings(readings: &Readings) {
    println!("{}", readings_table(readings));
}

/// One row per patient, one column per day.
pub fn readings_table(readings: &Readings) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Patient")];
    header.extend((0..readings.n_columns()).map(|day| header_cell(&day.to_string())));
    table.set_header(header);
    apply_table_style(&mut table);
    for (index, row) in readings.rows().enumerate() {
        let mut cells = vec![Cell::new(index + 1).add_attribute(Attribute::Bold)];
        cells.extend(row.iter().map(|&value| value_cell(value)));
        table.add_row(cells);
    }
    table
}

pub fn print_patients(patients: &[Patient]) {
    println!("{}", patients_table(patients));
}

pub fn patients_table(patients: &[Patient]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Patient"),
        header_cell("Observations"),
        header_cell("Last day"),
        header_cell("Last value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for patient in patients {
        let (day, value) = match patient.last_observation() {
            Ok(last) => (Cell::new(last.day), value_cell(last.value)),
            Err(_) => (dim_cell("-"), dim_cell("-")),
        };
        table.add_row(vec![
            Cell::new(patient.name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(patient.len()),
            day,
            value,
        ]);
    }
    table
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
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: f64) -> Cell {
    if value.is_nan() {
        dim_cell("nan")
    } else {
        Cell::new(format!("{value:.3}"))
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
