use colored::*;

use crate::frame::TimeFrame;
use crate::table::WideTable;

/// Marker printed for a cell with no value. Distinct from 0.
const NO_VALUE: &str = "-";

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn get_display_name(filename: &str) -> &str {
    std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

fn format_value(v: f64) -> String {
    let s = format!("{:.3}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format_value(v),
        None => NO_VALUE.to_string(),
    }
}

/// Print a wide table to stdout: bold headers, right-aligned cells, column
/// widths fitted to content.
pub(crate) fn print_table(table: &WideTable) {
    let lines: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            let mut line = row.time.clone();
            line.extend(row.values.iter().map(|v| format_cell(*v)));
            line
        })
        .collect();

    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.len()).collect();
    for line in &lines {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.len());
        }
    }

    let header = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| format!("{:>width$}", column))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.bold());
    println!("{}", "-".repeat(header.len()));

    for line in &lines {
        let row = line
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:>width$}", cell))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", row);
    }
}

pub(crate) fn print_frame_info(display_name: &str, tf: &TimeFrame) {
    println!("File: {}", display_name);
    println!("Series: {}, Frequency: {}", tf.len(), tf.frequency());
    if let (Some(start), Some(end)) = (tf.start(), tf.end()) {
        println!(
            "Range: {} .. {}",
            start.format("%Y-%m-%d %H:%M:%S %:z"),
            end.format("%Y-%m-%d %H:%M:%S %:z")
        );
    }
    println!();
}
