//! Flattening aligned series into one wide table

use crate::format::TimeColumnFormat;
use crate::frame::TimeFrame;

/// One materialized row: formatted time columns plus one cell per series.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub time: Vec<String>,
    pub values: Vec<Option<f64>>,
}

/// Wide layout of a frame: one row per bucket, one column per series, plus
/// the time columns. Built fresh per call and handed to a rendering host.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// Flatten a frame. Time columns come first, then one optional-value column
/// per series in declaration order. A series with no value at a bucket keeps
/// the gap; it is never zero-filled. An empty frame yields headers only.
pub fn materialize(tf: &TimeFrame) -> WideTable {
    let format = TimeColumnFormat::for_frame(tf);

    let mut columns: Vec<String> = format.headers().iter().map(|h| h.to_string()).collect();
    columns.extend(tf.iter().map(|(name, _)| name.to_string()));

    let rows = tf
        .time_points()
        .map(|tp| Row {
            time: format.row_values(tp, tf.frequency()),
            values: tf.iter().map(|(_, series)| series.at(&tp)).collect(),
        })
        .collect();

    WideTable { columns, rows }
}
