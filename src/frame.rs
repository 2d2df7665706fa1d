//! Time-series container: sampling frequency, single series, and the frame
//! that holds several series aligned to one bucket sequence.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, FixedOffset, Months};
use indexmap::IndexMap;

/// Sampling interval of a frame, ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Frequency {
    Millisecond,
    Second,
    Minute,
    QuarterHour,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Frequency {
    /// Advance a timestamp by exactly one period. Month and year are
    /// calendar-aware (Jan 31 + one month clamps to Feb 28/29).
    pub fn add_to(&self, t: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        match self {
            Frequency::Millisecond => t + Duration::milliseconds(1),
            Frequency::Second => t + Duration::seconds(1),
            Frequency::Minute => t + Duration::minutes(1),
            Frequency::QuarterHour => t + Duration::minutes(15),
            Frequency::Hour => t + Duration::hours(1),
            Frequency::Day => t + Duration::days(1),
            Frequency::Week => t + Duration::weeks(1),
            Frequency::Month => t + Months::new(1),
            Frequency::Year => t + Months::new(12),
        }
    }
}

/// Display/parse for CLI ergonomics (`"m"`, `"15m"`, `"D"`, `"M"`)
impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Frequency::Millisecond => "ms",
            Frequency::Second => "s",
            Frequency::Minute => "m",
            Frequency::QuarterHour => "15m",
            Frequency::Hour => "h",
            Frequency::Day => "D",
            Frequency::Week => "W",
            Frequency::Month => "M",
            Frequency::Year => "Y",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ms" | "millisecond" => Ok(Frequency::Millisecond),
            "s" | "second" => Ok(Frequency::Second),
            "m" | "minute" => Ok(Frequency::Minute),
            "15m" | "quarterhour" => Ok(Frequency::QuarterHour),
            "h" | "hour" => Ok(Frequency::Hour),
            "D" | "d" | "day" => Ok(Frequency::Day),
            "W" | "w" | "week" => Ok(Frequency::Week),
            "M" | "month" => Ok(Frequency::Month),
            "Y" | "y" | "year" => Ok(Frequency::Year),
            _ => Err(format!("unknown frequency: {s}")),
        }
    }
}

/// One named series: bucket start -> optional value. An absent key and an
/// explicit `None` both read as "no value"; neither is zero.
#[derive(Debug, Clone, Default)]
pub struct TimeSeries {
    points: BTreeMap<DateTime<FixedOffset>, Option<f64>>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ts: DateTime<FixedOffset>, value: Option<f64>) {
        self.points.insert(ts, value);
    }

    /// Value at a bucket start, if any.
    pub fn at(&self, ts: &DateTime<FixedOffset>) -> Option<f64> {
        self.points.get(ts).copied().flatten()
    }

    pub fn first_point(&self) -> Option<DateTime<FixedOffset>> {
        self.points.keys().next().copied()
    }

    pub fn last_point(&self) -> Option<DateTime<FixedOffset>> {
        self.points.keys().next_back().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Several series aligned to the same bucket sequence, in declaration order.
#[derive(Debug, Clone)]
pub struct TimeFrame {
    series: IndexMap<String, TimeSeries>,
    frequency: Frequency,
}

impl TimeFrame {
    pub fn new(frequency: Frequency) -> Self {
        Self {
            series: IndexMap::new(),
            frequency,
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, series: TimeSeries) {
        self.series.insert(name.into(), series);
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// `(name, series)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TimeSeries)> {
        self.series.iter().map(|(name, ts)| (name.as_str(), ts))
    }

    /// Earliest bucket start across all series.
    pub fn start(&self) -> Option<DateTime<FixedOffset>> {
        self.series.values().filter_map(|ts| ts.first_point()).min()
    }

    /// Latest bucket start across all series.
    pub fn end(&self) -> Option<DateTime<FixedOffset>> {
        self.series.values().filter_map(|ts| ts.last_point()).max()
    }

    /// The aligned bucket sequence: ascending from `start`, one step per
    /// period, through the bucket starting at `end`.
    pub fn time_points(&self) -> TimePoints {
        TimePoints {
            next: self.start(),
            end: self.end(),
            frequency: self.frequency,
        }
    }
}

pub struct TimePoints {
    next: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
    frequency: Frequency,
}

impl Iterator for TimePoints {
    type Item = DateTime<FixedOffset>;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.end?;
        let current = self.next?;
        if current > end {
            return None;
        }
        self.next = Some(self.frequency.add_to(current));
        Some(current)
    }
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
    fn frequency_ordering_is_finest_to_coarsest() {
        assert!(Frequency::Millisecond < Frequency::Second);
        assert!(Frequency::Hour < Frequency::Day);
        assert!(Frequency::Day < Frequency::Week);
        assert!(Frequency::Month < Frequency::Year);
    }

    #[test]
    fn add_month_clamps_to_month_end() {
        let t = utc(2023, 1, 31, 0, 0, 0);
        assert_eq!(Frequency::Month.add_to(t), utc(2023, 2, 28, 0, 0, 0));
        let leap = utc(2024, 1, 31, 0, 0, 0);
        assert_eq!(Frequency::Month.add_to(leap), utc(2024, 2, 29, 0, 0, 0));
    }

    #[test]
    fn add_year_keeps_calendar_date() {
        let t = utc(2024, 3, 15, 12, 0, 0);
        assert_eq!(Frequency::Year.add_to(t), utc(2025, 3, 15, 12, 0, 0));
    }

    #[test]
    fn frequency_parses_short_and_long_forms() {
        assert_eq!("h".parse::<Frequency>().unwrap(), Frequency::Hour);
        assert_eq!("day".parse::<Frequency>().unwrap(), Frequency::Day);
        assert_eq!("15m".parse::<Frequency>().unwrap(), Frequency::QuarterHour);
        assert!("fortnight".parse::<Frequency>().is_err());
    }

    #[test]
    fn series_gap_reads_as_none() {
        let mut ts = TimeSeries::new();
        ts.insert(utc(2024, 1, 1, 0, 0, 0), Some(1.0));
        ts.insert(utc(2024, 1, 2, 0, 0, 0), None);
        assert_eq!(ts.at(&utc(2024, 1, 1, 0, 0, 0)), Some(1.0));
        assert_eq!(ts.at(&utc(2024, 1, 2, 0, 0, 0)), None);
        assert_eq!(ts.at(&utc(2024, 1, 3, 0, 0, 0)), None);
    }

    #[test]
    fn time_points_cover_start_through_end() {
        let mut a = TimeSeries::new();
        a.insert(utc(2024, 1, 1, 0, 0, 0), Some(1.0));
        a.insert(utc(2024, 1, 3, 0, 0, 0), Some(3.0));
        let mut frame = TimeFrame::new(Frequency::Day);
        frame.insert("a", a);

        let points: Vec<_> = frame.time_points().collect();
        assert_eq!(
            points,
            vec![
                utc(2024, 1, 1, 0, 0, 0),
                utc(2024, 1, 2, 0, 0, 0),
                utc(2024, 1, 3, 0, 0, 0),
            ]
        );
    }

    #[test]
    fn bounds_span_all_series() {
        let mut a = TimeSeries::new();
        a.insert(utc(2024, 1, 2, 0, 0, 0), Some(1.0));
        let mut b = TimeSeries::new();
        b.insert(utc(2024, 1, 1, 0, 0, 0), Some(2.0));
        b.insert(utc(2024, 1, 4, 0, 0, 0), Some(3.0));
        let mut frame = TimeFrame::new(Frequency::Day);
        frame.insert("a", a);
        frame.insert("b", b);

        assert_eq!(frame.start(), Some(utc(2024, 1, 1, 0, 0, 0)));
        assert_eq!(frame.end(), Some(utc(2024, 1, 4, 0, 0, 0)));
    }

    #[test]
    fn empty_frame_has_no_points() {
        let frame = TimeFrame::new(Frequency::Day);
        assert_eq!(frame.start(), None);
        assert_eq!(frame.time_points().count(), 0);
    }
}
