//! Table mode: flatten the frame and print it as a grid

use crate::frame::TimeFrame;
use crate::output::{print_frame_info, print_table};
use crate::table::materialize;

pub fn run_table(display_name: &str, tf: &TimeFrame, quiet: bool) {
    if !quiet {
        print_frame_info(display_name, tf);
    }

    let table = materialize(tf);
    print_table(&table);

    if !quiet {
        println!();
        println!("Rows: {}", table.rows.len());
    }
}
