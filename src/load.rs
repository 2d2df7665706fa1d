//! CSV loading into a time frame
//!
//! Wide layout: first column is the bucket start timestamp, every further
//! header names one series. An empty cell is a gap, not zero.

use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::frame::{Frequency, TimeFrame, TimeSeries};

/// Parse a bucket-start timestamp. Naive forms are read as UTC.
pub(crate) fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts);
    }
    for pattern in [
        "%Y-%m-%d %H:%M:%S%.3f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, pattern) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }
    Err(format!("Unrecognized timestamp: {}", s))
}

/// Guess the sampling interval from the gap between the first two
/// timestamps. Falls back to daily when there are fewer than two rows.
pub(crate) fn infer_frequency(timestamps: &[DateTime<FixedOffset>]) -> Frequency {
    let [first, second, ..] = timestamps else {
        return Frequency::Day;
    };
    let ms = second.signed_duration_since(first).num_milliseconds();
    if ms <= 0 {
        return Frequency::Day;
    }
    if ms < 1_000 {
        Frequency::Millisecond
    } else if ms < 60_000 {
        Frequency::Second
    } else if ms < 900_000 {
        Frequency::Minute
    } else if ms < 3_600_000 {
        Frequency::QuarterHour
    } else if ms < 86_400_000 {
        Frequency::Hour
    } else if ms < 604_800_000 {
        Frequency::Day
    } else if ms < 2_419_200_000 {
        Frequency::Week
    } else if ms < 31_536_000_000 {
        Frequency::Month
    } else {
        Frequency::Year
    }
}

/// Load a wide CSV file into a frame. `frequency` overrides inference.
pub(crate) fn load_frame<P: AsRef<Path>>(
    path: P,
    frequency: Option<Frequency>,
) -> Result<TimeFrame, String> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())
        .map_err(|e| format!("Error opening file: {}", e))?;

    let headers = reader
        .headers()
        .map_err(|e| format!("Error reading header: {}", e))?
        .clone();
    if headers.len() < 2 {
        return Err("CSV needs a timestamp column plus at least one series column".to_string());
    }
    let names: Vec<String> = headers.iter().skip(1).map(|h| h.to_string()).collect();

    let mut columns: Vec<TimeSeries> = vec![TimeSeries::new(); names.len()];
    let mut timestamps: Vec<DateTime<FixedOffset>> = Vec::new();

    for (line, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format!("Error reading record: {}", e))?;
        let raw = record.get(0).unwrap_or("");
        let ts = parse_timestamp(raw).map_err(|e| format!("Row {}: {}", line + 2, e))?;
        for (idx, series) in columns.iter_mut().enumerate() {
            let cell = record.get(idx + 1).unwrap_or("");
            if cell.is_empty() {
                series.insert(ts, None);
            } else {
                let value: f64 = cell.parse().map_err(|_| {
                    format!(
                        "Row {}: invalid number {:?} in column {:?}",
                        line + 2,
                        cell,
                        names[idx]
                    )
                })?;
                series.insert(ts, Some(value));
            }
        }
        timestamps.push(ts);
    }

    let frequency = match frequency {
        Some(f) => f,
        None => {
            if timestamps.len() < 2 {
                crate::output::print_warning(
                    "cannot infer frequency from fewer than two rows; assuming daily",
                );
            }
            infer_frequency(&timestamps)
        }
    };

    let mut frame = TimeFrame::new(frequency);
    for (name, series) in names.into_iter().zip(columns) {
        frame.insert(name, series);
    }
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
    }

    #[test]
    fn parses_common_timestamp_forms() {
        assert_eq!(
            parse_timestamp("2024-01-01").unwrap(),
            utc(2024, 1, 1, 0, 0, 0)
        );
        assert_eq!(
            parse_timestamp("2024-01-01 09:30").unwrap(),
            utc(2024, 1, 1, 9, 30, 0)
        );
        assert_eq!(
            parse_timestamp("2024-01-01T09:30:00+02:00").unwrap(),
            FixedOffset::east_opt(2 * 3600)
                .unwrap()
                .with_ymd_and_hms(2024, 1, 1, 9, 30, 0)
                .unwrap()
        );
        assert!(parse_timestamp("not-a-date").is_err());
    }

    #[test]
    fn infers_frequency_from_first_gap() {
        let minute = vec![utc(2024, 1, 1, 9, 0, 0), utc(2024, 1, 1, 9, 1, 0)];
        assert_eq!(infer_frequency(&minute), Frequency::Minute);

        let hourly = vec![utc(2024, 1, 1, 9, 0, 0), utc(2024, 1, 1, 10, 0, 0)];
        assert_eq!(infer_frequency(&hourly), Frequency::Hour);

        let daily = vec![utc(2024, 1, 1, 0, 0, 0), utc(2024, 1, 2, 0, 0, 0)];
        assert_eq!(infer_frequency(&daily), Frequency::Day);

        let monthly = vec![utc(2024, 1, 1, 0, 0, 0), utc(2024, 2, 1, 0, 0, 0)];
        assert_eq!(infer_frequency(&monthly), Frequency::Month);
    }

    #[test]
    fn too_few_rows_fall_back_to_daily() {
        assert_eq!(infer_frequency(&[]), Frequency::Day);
        assert_eq!(infer_frequency(&[utc(2024, 1, 1, 0, 0, 0)]), Frequency::Day);
    }
}
