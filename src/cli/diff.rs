//! Diff command handler.
//!
//! Implements the `dif-pod` subcommand for comparing two lock manifests.

use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::pipeline::{compute_diff, exit_codes, output_report};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let result = compute_diff(&config, quiet)?;
    output_report(&config, &result, quiet)?;

    Ok(determine_exit_code(&result))
}

/// Equivalent manifests succeed; any difference is signalled.
fn determine_exit_code(result: &DiffResult) -> i32 {
    if result.is_equivalent() {
        exit_codes::SUCCESS
    } else {
        exit_codes::DIFFERENCES_FOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BehaviorConfig, DiffPaths, OutputConfig};
    use crate::reports::ReportFormat;
    use std::path::PathBuf;

    fn run(old: &str, new: &str, format: ReportFormat) -> (i32, String) {
        let dir = tempfile::tempdir().unwrap();
        let old_path = dir.path().join("old.lock");
        let new_path = dir.path().join("new.lock");
        let report: PathBuf = dir.path().join("report.txt");
        std::fs::write(&old_path, old).unwrap();
        std::fs::write(&new_path, new).unwrap();

        let config = DiffConfig {
            paths: DiffPaths {
                old: old_path,
                new: new_path,
            },
            allow_list: None,
            output: OutputConfig {
                format,
                file: Some(report.clone()),
                no_color: true,
            },
            behavior: BehaviorConfig { quiet: true },
        };
        let code = run_diff(config).unwrap();
        (code, std::fs::read_to_string(report).unwrap())
    }

    #[test]
    fn test_run_diff_differences() {
        let (code, report) = run(
            "PODS:\n  - A/Core (1.0)\n  - B (1.0)\n\n",
            "PODS:\n  - A/Core (1.0)\n  - C (1.0)\n\n",
            ReportFormat::Summary,
        );
        assert_eq!(code, exit_codes::DIFFERENCES_FOUND);
        assert_eq!(report, "Differences found:\n- B\n+ C\n");
    }

    #[test]
    fn test_run_diff_equivalent() {
        let lock = "PODS:\n  - A (1.0)\n\n";
        let (code, report) = run(lock, lock, ReportFormat::Summary);
        assert_eq!(code, exit_codes::SUCCESS);
        assert_eq!(report, "No differences found\n");
    }

    #[test]
    fn test_run_diff_json() {
        let (code, report) = run("PODS:\n  - A (1.0)\n\n", "PODS:\n  - B (1.0)\n\n", ReportFormat::Json);
        assert_eq!(code, exit_codes::DIFFERENCES_FOUND);
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["removed"], serde_json::json!(["A"]));
    }
}
