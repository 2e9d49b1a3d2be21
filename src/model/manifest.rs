//! Parsed lock manifest.

use super::DependencyEntry;
use crate::hierarchy::reduce;
use indexmap::IndexSet;

/// The dependency section of a lock manifest.
///
/// Holds the trimmed raw lines in file order; normalized and reduced views
/// are derived on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockManifest {
    lines: Vec<String>,
}

impl LockManifest {
    /// Create a manifest from raw section lines.
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Raw entry lines, still carrying markers and version annotations.
    #[must_use]
    pub fn raw_lines(&self) -> &[String] {
        &self.lines
    }

    /// Normalized entries, deduplicated in first-seen order.
    #[must_use]
    pub fn entries(&self) -> Vec<DependencyEntry> {
        self.lines
            .iter()
            .filter_map(|line| DependencyEntry::from_raw_line(line))
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// The most specific entries: no survivor is a prefix of another entry.
    #[must_use]
    pub fn reduced_entries(&self) -> Vec<DependencyEntry> {
        reduce(&self.entries())
    }

    /// Number of raw lines in the section.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(lines: &[&str]) -> LockManifest {
        LockManifest::new(lines.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_entries_deduplicate_in_order() {
        let m = manifest(&["- B (1.0)", "- A (1.0)", "- B (2.0)", "- A/Core (1.0)"]);
        let names: Vec<_> = m.entries().iter().map(ToString::to_string).collect();
        assert_eq!(names, ["B", "A", "A/Core"]);
    }

    #[test]
    fn test_reduced_entries_keep_leaves() {
        let m = manifest(&["- A (1.0)", "- A/Core (1.0)", "- B (1.0)"]);
        let names: Vec<_> = m.reduced_entries().iter().map(ToString::to_string).collect();
        assert_eq!(names, ["A/Core", "B"]);
    }

    #[test]
    fn test_empty_manifest() {
        let m = LockManifest::default();
        assert!(m.entries().is_empty());
        assert!(m.reduced_entries().is_empty());
        assert_eq!(m.line_count(), 0);
    }
}
