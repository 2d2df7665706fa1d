//! Line-chart model building and rendering

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Legend, Title},
    element::{AxisLabel, AxisType, Color, Orient},
    renderer::ImageFormat,
    series::Line,
};

use crate::format::axis_label_format;
use crate::frame::TimeFrame;

/// Chart dimensions (2x for Retina quality)
const CHART_WIDTH: u32 = 1600;
const CHART_HEIGHT: u32 = 900;

const COLOR_BACKGROUND: &str = "#FFFFFF";

/// Build the default line-chart model for a frame: one line per series with
/// (epoch-millisecond, value) points in ascending order, a shared time axis
/// spanning the frame bounds, legend outside right, white background.
///
/// A missing value plots as 0.0 here. The table path keeps the gap explicit
/// instead; the two policies are deliberately distinct.
pub fn build_line_chart(tf: &TimeFrame, title: Option<&str>) -> Chart {
    let mut chart = Chart::new().background_color(Color::Value(COLOR_BACKGROUND.to_string()));

    if let Some(title) = title {
        chart = chart.title(Title::new().text(title).left("center").top("3%"));
    }

    let mut x_axis = Axis::new()
        .type_(AxisType::Time)
        .axis_label(AxisLabel::new().formatter(axis_label_format(tf).as_str()));
    if let (Some(start), Some(end)) = (tf.start(), tf.end()) {
        x_axis = x_axis
            .min(start.timestamp_millis() as f64)
            .max(end.timestamp_millis() as f64);
    }

    let legend_data: Vec<String> = tf.iter().map(|(name, _)| name.to_string()).collect();
    chart = chart
        .x_axis(x_axis)
        .y_axis(Axis::new().type_(AxisType::Value))
        .legend(
            Legend::new()
                .data(legend_data)
                .orient(Orient::Vertical)
                .right("1%")
                .top("middle"),
        );

    for (name, series) in tf.iter() {
        let points: Vec<Vec<f64>> = tf
            .time_points()
            .map(|tp| {
                vec![
                    tp.timestamp_millis() as f64,
                    series.at(&tp).unwrap_or(0.0),
                ]
            })
            .collect();
        chart = chart.series(Line::new().name(name).data(points));
    }

    chart
}

/// Build with defaults, then let the caller rework the model. The hook runs
/// last and may replace any of the defaults.
pub fn build_line_chart_with<F>(tf: &TimeFrame, title: Option<&str>, configure: F) -> Chart
where
    F: FnOnce(Chart) -> Chart,
{
    configure(build_line_chart(tf, title))
}

/// Render the chart model to a PNG file.
pub fn render_line_chart(tf: &TimeFrame, title: Option<&str>, output_path: &str) -> Result<(), String> {
    let chart = build_line_chart(tf, title);
    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))
}
