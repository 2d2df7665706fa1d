//! Adaptive time formatting: pick the coarsest textual granularity that still
//! distinguishes bucket boundaries, for table columns and for the chart axis.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::frame::{Frequency, TimeFrame};


/// How many leading time points the granularity checks sample.
const SAMPLE_POINTS: usize = 3;

/// Full date+time down to milliseconds.
pub const PATTERN_MILLISECOND: &str = "%Y-%m-%d %H:%M:%S%.3f";
/// Date+time down to seconds.
pub const PATTERN_SECOND: &str = "%Y-%m-%d %H:%M:%S";
/// Date+time down to minutes.
pub const PATTERN_MINUTE: &str = "%Y-%m-%d %H:%M";
/// Date only.
pub const PATTERN_DATE: &str = "%Y-%m-%d";
/// Time of day, hour:minute.
pub const PATTERN_TIME: &str = "%H:%M";

fn has_time_component(tf: &TimeFrame) -> bool {
    tf.time_points().take(SAMPLE_POINTS).any(|tp| {
        tp.hour() != 0
            || tp.minute() != 0
            || tp.second() != 0
            || tp.timestamp_subsec_millis() != 0
    })
}

fn has_second_component(tf: &TimeFrame) -> bool {
    tf.time_points()
        .take(SAMPLE_POINTS)
        .any(|tp| tp.second() != 0 || tp.timestamp_subsec_millis() != 0)
}

fn has_millisecond_component(tf: &TimeFrame) -> bool {
    tf.time_points()
        .take(SAMPLE_POINTS)
        .any(|tp| tp.timestamp_subsec_millis() != 0)
}

/// Time-column layout for the wide table, selected once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeColumnFormat {
    /// "Start"/"End" with one date+time pattern.
    Default { pattern: &'static str },
    /// "Date" plus "Start"/"End" as hour:minute. Used for sub-day
    /// frequencies, where the date repeats within a day but the time varies.
    SingleDay,
    /// "Start"/"End" as dates only.
    DayOrCoarser,
}

impl std::default::Default for TimeColumnFormat {
    fn default() -> Self {
        TimeColumnFormat::Default {
            pattern: PATTERN_MILLISECOND,
        }
    }
}

impl TimeColumnFormat {
    /// Classify a frame by its frequency and the first three time points.
    /// Checks run coarsest to finest; the first match wins. A frame shorter
    /// than three points is sampled in full.
    pub fn for_frame(tf: &TimeFrame) -> Self {
        if tf.frequency() < Frequency::Day {
            return TimeColumnFormat::SingleDay;
        }
        if !has_time_component(tf) {
            return TimeColumnFormat::DayOrCoarser;
        }
        if !has_second_component(tf) {
            return TimeColumnFormat::Default {
                pattern: PATTERN_MINUTE,
            };
        }
        if !has_millisecond_component(tf) {
            return TimeColumnFormat::Default {
                pattern: PATTERN_SECOND,
            };
        }
        TimeColumnFormat::Default {
            pattern: PATTERN_MILLISECOND,
        }
    }

    /// Column headers for this layout.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            TimeColumnFormat::SingleDay => &["Date", "Start", "End"],
            _ => &["Start", "End"],
        }
    }

    /// Format one bucket's time columns. End is always derived as
    /// start + one period, never read from the container, so end == start +
    /// period holds even when the container's own bounds differ.
    pub fn row_values(&self, start: DateTime<FixedOffset>, frequency: Frequency) -> Vec<String> {
        let end = frequency.add_to(start);
        match self {
            TimeColumnFormat::Default { pattern } => vec![
                start.format(pattern).to_string(),
                end.format(pattern).to_string(),
            ],
            TimeColumnFormat::SingleDay => vec![
                start.format(PATTERN_DATE).to_string(),
                start.format(PATTERN_TIME).to_string(),
                end.format(PATTERN_TIME).to_string(),
            ],
            TimeColumnFormat::DayOrCoarser => vec![
                start.format(PATTERN_DATE).to_string(),
                end.format(PATTERN_DATE).to_string(),
            ],
        }
    }
}

/// Label template for the chart's continuous time axis, in the chart host's
/// (echarts) template syntax.
///
/// Distinct from the table classification: the axis needs one global pattern
/// for the whole range, so this works on the frame bounds, not on a sample of
/// the data.
pub fn axis_label_format(tf: &TimeFrame) -> String {
    let (Some(start), Some(end)) = (tf.start(), tf.end()) else {
        return "{yyyy}-{MM}-{dd}".to_string();
    };

    // Whole range within one calendar day: time-only, precision straight
    // from the frequency.
    if start.date_naive() == end.date_naive() {
        return match tf.frequency() {
            Frequency::Second => "{HH}:{mm}:{ss}",
            Frequency::Millisecond => "{HH}:{mm}:{ss}.{SSS}",
            _ => "{HH}:{mm}",
        }
        .to_string();
    }

    let mut format = if start.year() == end.year() {
        "{d}.{M}."
    } else {
        "{yyyy}-{MM}-{dd}"
    }
    .to_string();
    if tf.frequency() < Frequency::Day {
        format.push_str(" {HH}:{mm}");
    }
    format
}
