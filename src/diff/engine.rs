//! Manifest diff engine implementation.

use super::DiffResult;
use crate::model::{DependencyEntry, LockManifest};
use crate::parsers::{parse_lockfile_str, ParseError};
use indexmap::IndexSet;

/// Set-difference engine for lock manifests.
///
/// Both manifests are reduced to their most specific entries before
/// comparison, so adding `A/Net` next to an existing `A` shows up as the
/// addition of `A/Net` rather than as noise about `A`.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    allowed_owners: IndexSet<String>,
}

impl DiffEngine {
    /// Create a new diff engine that compares every owner
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the comparison to entries whose owner is listed.
    ///
    /// An empty list keeps every owner.
    #[must_use]
    pub fn with_allowed_owners<I, S>(mut self, owners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_owners = owners.into_iter().map(Into::into).collect();
        self
    }

    /// Owners the comparison is restricted to
    #[must_use]
    pub fn allowed_owners(&self) -> &IndexSet<String> {
        &self.allowed_owners
    }

    /// Compare two parsed manifests
    pub fn diff_manifests(&self, old: &LockManifest, new: &LockManifest) -> DiffResult {
        let old_set = self.comparable_entries(old);
        let new_set = self.comparable_entries(new);

        let only_in_old = old_set.difference(&new_set).cloned().collect();
        let only_in_new = new_set.difference(&old_set).cloned().collect();

        DiffResult::new(only_in_old, only_in_new)
            .with_totals(old_set.len(), new_set.len())
            .with_allowed_owners(self.allowed_owners.iter().cloned().collect())
    }

    /// Parse and compare two manifest texts
    pub fn diff_str(&self, old: &str, new: &str) -> Result<DiffResult, ParseError> {
        let old = parse_lockfile_str(old)?;
        let new = parse_lockfile_str(new)?;
        Ok(self.diff_manifests(&old, &new))
    }

    fn comparable_entries(&self, manifest: &LockManifest) -> IndexSet<DependencyEntry> {
        manifest
            .reduced_entries()
            .into_iter()
            .filter(|entry| self.is_allowed(entry))
            .collect()
    }

    fn is_allowed(&self, entry: &DependencyEntry) -> bool {
        self.allowed_owners.is_empty() || self.allowed_owners.contains(entry.owner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OLD: &str = "PODS:\n  - A (1.0)\n  - A/Core (1.0)\n  - B (1.0)\n\n";
    const NEW: &str = "PODS:\n  - A (1.1)\n  - A/Core (1.1)\n  - C (1.0)\n\n";

    fn names(set: &IndexSet<DependencyEntry>) -> Vec<&str> {
        set.iter().map(DependencyEntry::as_str).collect()
    }

    #[test]
    fn test_removal_and_addition() {
        let result = DiffEngine::new().diff_str(OLD, NEW).unwrap();
        assert_eq!(names(&result.only_in_old), ["B"]);
        assert_eq!(names(&result.only_in_new), ["C"]);
        assert!(!result.is_equivalent());
    }

    #[test]
    fn test_identical_manifests_are_equivalent() {
        let result = DiffEngine::new().diff_str(OLD, OLD).unwrap();
        assert!(result.is_equivalent());
        assert_eq!(result.summary.old_total, 2);
    }

    #[test]
    fn test_version_only_changes_are_equivalent() {
        let newer = OLD.replace("1.0", "2.0");
        let result = DiffEngine::new().diff_str(OLD, &newer).unwrap();
        assert!(result.is_equivalent());
    }

    #[test]
    fn test_diff_is_symmetric() {
        let engine = DiffEngine::new();
        let forward = engine.diff_str(OLD, NEW).unwrap();
        let backward = engine.diff_str(NEW, OLD).unwrap();
        assert_eq!(forward.only_in_old, backward.only_in_new);
        assert_eq!(forward.only_in_new, backward.only_in_old);
    }

    #[test]
    fn test_allowed_owners_filter() {
        let engine = DiffEngine::new().with_allowed_owners(["C"]);
        let result = engine.diff_str(OLD, NEW).unwrap();
        assert!(result.only_in_old.is_empty());
        assert_eq!(names(&result.only_in_new), ["C"]);
        assert_eq!(result.allowed_owners, ["C"]);
    }

    #[test]
    fn test_allowed_owner_matches_first_segment_exactly() {
        let old = "PODS:\n  - AB/Core (1.0)\n\n";
        let new = "PODS:\n  - AB/Net (1.0)\n\n";
        let engine = DiffEngine::new().with_allowed_owners(["A"]);
        assert!(engine.diff_str(old, new).unwrap().is_equivalent());
    }

    #[test]
    fn test_empty_allow_list_keeps_everything() {
        let engine = DiffEngine::new().with_allowed_owners(Vec::<String>::new());
        let result = engine.diff_str(OLD, NEW).unwrap();
        assert_eq!(result.total_changes(), 2);
    }

    #[test]
    fn test_missing_section_fails() {
        let result = DiffEngine::new().diff_str("DEPENDENCIES:\n", NEW);
        assert!(matches!(result, Err(ParseError::MissingSection)));
    }
}
