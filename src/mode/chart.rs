//! Chart mode: build the line-chart model and render it to a PNG file

use crate::chart::render_line_chart;
use crate::frame::TimeFrame;
use crate::output::{print_error, print_frame_info};

pub fn run_chart(
    display_name: &str,
    tf: &TimeFrame,
    title: Option<&str>,
    output_path: &str,
    quiet: bool,
) {
    if !quiet {
        print_frame_info(display_name, tf);
    }

    if let Err(e) = render_line_chart(tf, title, output_path) {
        print_error(&e);
        std::process::exit(1);
    }
    eprintln!("Chart saved to: {}", output_path);
}
