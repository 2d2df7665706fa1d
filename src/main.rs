mod chart;
mod format;
mod frame;
mod load;
mod mode;
mod output;
mod table;

use clap::Parser;

use frame::Frequency;
use load::load_frame;
use output::{get_display_name, print_error};

#[derive(Parser)]
#[command(
    name = "tsplot",
    version,
    about = "Time-series viewer: adaptive wide tables and line charts from CSV",
    after_help = "Examples:
  tsplot prices.csv                             Print the frame as a wide table
  tsplot prices.csv --image chart.png           Render a line chart to PNG
  tsplot prices.csv --freq h                    Override the sampling frequency
  tsplot prices.csv --image c.png --title Load  Chart with a custom title
  tsplot --no-color prices.csv                  Disable colored output"
)]
struct Args {
    /// CSV file: timestamp column first, one column per series
    file: String,

    /// Render a line chart to this PNG path instead of printing a table
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Sampling frequency (ms, s, m, 15m, h, D, W, M, Y); inferred when omitted
    #[arg(short, long, value_name = "FREQ")]
    freq: Option<Frequency>,

    /// Chart title (chart mode only)
    #[arg(short, long, value_name = "TITLE")]
    title: Option<String>,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate option combinations
    if args.title.is_some() && args.image.is_none() {
        print_error("--title can only be used with --image");
        std::process::exit(1);
    }

    // Validate image output path
    if let Some(ref path) = args.image {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }
    }

    let frame = load_frame(&args.file, args.freq).unwrap_or_else(|e| {
        print_error(&e);
        std::process::exit(1);
    });

    let display_name = get_display_name(&args.file).to_string();

    // Dispatch to appropriate mode
    if let Some(ref path) = args.image {
        mode::run_chart(&display_name, &frame, args.title.as_deref(), path, args.quiet);
    } else {
        mode::run_table(&display_name, &frame, args.quiet);
    }
}
