//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two advisory directories.

use crate::config::DiffConfig;
use crate::diff::IndexDiffResult;
use crate::pipeline::{compute_diff, exit_codes, load_index_with_context, output_report};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let old = load_index_with_context(&config.paths.old, &config.loader, quiet)?;
    let new = load_index_with_context(&config.paths.new, &config.loader, quiet)?;

    let result = compute_diff(&old.index, &new.index, quiet);
    let exit_code = determine_exit_code(&config, &result);

    output_report(&config, &result)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
fn determine_exit_code(config: &DiffConfig, result: &IndexDiffResult) -> i32 {
    if config.behavior.fail_on_change && !result.is_empty() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
