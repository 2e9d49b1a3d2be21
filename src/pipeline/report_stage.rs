//! Report generation stage.

use super::{should_use_color, write_output, OutputTarget};
use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::error::Result;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};

/// Render the diff report in the configured format and write it out.
pub fn output_report(config: &DiffConfig, result: &DiffResult, quiet: bool) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let use_color = should_use_color(config.output.no_color, &target);
    let reporter = create_reporter_with_options(config.output.format, use_color);

    let report_config = ReportConfig::with_metadata(ReportMetadata {
        old_lock_path: Some(config.paths.old.display().to_string()),
        new_lock_path: Some(config.paths.new.display().to_string()),
    });

    let report = reporter.generate_diff_report(result, &report_config)?;

    write_output(&report, &target, quiet)
}
