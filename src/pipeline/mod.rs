//! Pipeline orchestration for advisory diff operations.
//!
//! This module provides shared orchestration logic for load → diff → report
//! workflows, reducing duplication across CLI command handlers.

mod diff_stage;
mod load;
mod output;
mod report_stage;

pub use diff_stage::compute_diff;
pub use load::load_index_with_context;
pub use output::{OutputTarget, should_use_color, write_output};
pub use report_stage::output_report;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or changes without --fail-on-change)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected and --fail-on-change was set
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}
