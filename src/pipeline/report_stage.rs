//! Report output stage.

use crate::config::DiffConfig;
use crate::diff::IndexDiffResult;
use crate::reports::{ReportConfig, ReportMetadata, create_reporter_with_options};
use anyhow::{Context, Result};

use super::{OutputTarget, should_use_color, write_output};

/// Generate a diff report in the configured format and write it out.
pub fn output_report(config: &DiffConfig, result: &IndexDiffResult) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());

    let report_config = ReportConfig {
        max_items: config.output.max_items,
        metadata: ReportMetadata::new(
            Some(config.paths.old.display().to_string()),
            Some(config.paths.new.display().to_string()),
        ),
        ..Default::default()
    };

    let use_color = should_use_color(config.output.no_color, &output_target);
    let reporter = create_reporter_with_options(config.output.format, use_color);
    let report = reporter
        .generate_diff_report(result, &report_config)
        .with_context(|| format!("Failed to generate {} report", config.output.format))?;

    write_output(&report, &output_target, config.behavior.quiet)
}
