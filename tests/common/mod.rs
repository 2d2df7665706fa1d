//! Common test utilities

use std::io::Write;
use std::path::Path;

/// Write a CSV file from a header line and data rows.
pub fn write_csv(path: &Path, header: &str, rows: &[&str]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{}", header)?;
    for row in rows {
        writeln!(file, "{}", row)?;
    }
    Ok(())
}

/// Daily two-series data with a gap in the middle of series A.
pub fn daily_rows_with_gap() -> (&'static str, Vec<&'static str>) {
    (
        "time,A,B",
        vec![
            "2024-01-01,1.5,10",
            "2024-01-02,,20",
            "2024-01-03,3.5,30",
        ],
    )
}

/// Hourly single-series data within one day.
pub fn hourly_rows() -> (&'static str, Vec<&'static str>) {
    (
        "time,load",
        vec![
            "2024-01-01 09:00,0.5",
            "2024-01-01 10:00,0.75",
            "2024-01-01 11:00,1.0",
        ],
    )
}
