//! Terminal output formatting
//!
//! Display utilities for CLI results and the benchmark report file.

pub mod display;
pub mod formatters;
pub mod report;

pub use display::{
    print_play_result, print_test_all_result, write_play_result, write_test_all_result,
};
pub use report::write_report;
