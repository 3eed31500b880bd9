//! Output module for console output and statistics.
//!
//! Provides:
//! - Colored console output
//! - Run statistics reporting

pub mod console;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_error, print_info, print_success, print_warning,
};
pub use stats::{print_run_stats, RunStats};
