//! Diff computation stage.

use super::parse_lockfile_with_context;
use crate::config::{load_allow_list, DiffConfig};
use crate::diff::{DiffEngine, DiffResult};
use crate::error::{ErrorContext, Result};

/// Load the allow-list and both manifests, then compute the diff.
pub fn compute_diff(config: &DiffConfig, quiet: bool) -> Result<DiffResult> {
    let mut engine = DiffEngine::new();
    if let Some(path) = &config.allow_list {
        let owners = load_allow_list(path)?;
        tracing::debug!("Restricting diff to owners: {:?}", owners);
        engine = engine.with_allowed_owners(owners);
    }

    let old = parse_lockfile_with_context(&config.paths.old, quiet).context("old manifest")?;
    let new = parse_lockfile_with_context(&config.paths.new, quiet).context("new manifest")?;

    if !quiet {
        tracing::info!("Computing dependency diff...");
    }
    let result = engine.diff_manifests(&old, &new);

    if !quiet {
        tracing::info!(
            "Diff complete: {} removed, {} added",
            result.summary.removed,
            result.summary.added
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BehaviorConfig, DiffPaths, OutputConfig};
    use crate::error::PodToolsError;
    use std::path::{Path, PathBuf};

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn config(old: PathBuf, new: PathBuf, allow_list: Option<PathBuf>) -> DiffConfig {
        DiffConfig {
            paths: DiffPaths { old, new },
            allow_list,
            output: OutputConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }

    #[test]
    fn test_compute_diff_with_allow_list() {
        let dir = tempfile::tempdir().unwrap();
        let old = write(dir.path(), "old.lock", "PODS:\n  - A/Core (1.0)\n  - B (1.0)\n\n");
        let new = write(dir.path(), "new.lock", "PODS:\n  - A/Net (1.0)\n  - C (1.0)\n\n");
        let libs = write(dir.path(), "dif_libs.json", r#"["A"]"#);

        let result = compute_diff(&config(old, new, Some(libs)), true).unwrap();
        assert_eq!(result.summary.removed, 1);
        assert_eq!(result.summary.added, 1);
        assert!(result.only_in_old.contains("A/Core"));
        assert!(result.only_in_new.contains("A/Net"));
    }

    #[test]
    fn test_missing_new_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let old = write(dir.path(), "old.lock", "PODS:\n  - A (1.0)\n\n");

        let err = compute_diff(&config(old, dir.path().join("new.lock"), None), true).unwrap_err();
        assert!(matches!(err, PodToolsError::FileNotFound(p) if p.ends_with("new.lock")));
    }

    #[test]
    fn test_malformed_allow_list() {
        let dir = tempfile::tempdir().unwrap();
        let old = write(dir.path(), "old.lock", "PODS:\n  - A (1.0)\n\n");
        let libs = write(dir.path(), "dif_libs.json", r#"{"A": true}"#);

        let err = compute_diff(&config(old.clone(), old, Some(libs)), true).unwrap_err();
        assert!(matches!(err, PodToolsError::MalformedConfig { .. }));
    }
}
