//! CLI mode implementations

mod chart;
mod table;

pub use chart::run_chart;
pub use table::run_table;
