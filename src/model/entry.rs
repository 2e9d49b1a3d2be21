//! Hierarchical dependency entries.
//!
//! A lock manifest names resolved pods as `/`-joined paths: `Library`,
//! `Library/Subspec`, `Library/Subspec/Detail`. The first segment is the
//! owner (the library as a whole); the remainder is the subspec.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Separator between hierarchy segments.
pub const HIERARCHY_SEPARATOR: char = '/';

/// Marker that prefixes entry lines in the lock manifest.
const LIST_MARKER: &str = "- ";

/// A single resolved dependency name, e.g. `"AFNetworking/Reachability"`.
///
/// Never empty. Equality is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyEntry(String);

impl DependencyEntry {
    /// Create an entry from an already-normalized name.
    ///
    /// Returns `None` for an empty name.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    /// Normalize one raw manifest line into an entry.
    ///
    /// Keeps the text before the first `(` (the version annotation), trims
    /// it, and removes every `"- "` marker sequence wherever it occurs.
    /// `"  - A/Core (1.0)"` becomes `"A/Core"`.
    pub fn from_raw_line(line: &str) -> Option<Self> {
        let name = line.split('(').next().unwrap_or_default().trim();
        Self::new(name.replace(LIST_MARKER, ""))
    }

    /// The entry text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Top-level owner: the text before the first separator.
    #[must_use]
    pub fn owner(&self) -> &str {
        self.0
            .split(HIERARCHY_SEPARATOR)
            .next()
            .unwrap_or(self.0.as_str())
    }

    /// Everything after the first separator, or the whole entry when it has
    /// no separator.
    #[must_use]
    pub fn subspec(&self) -> &str {
        self.0
            .split_once(HIERARCHY_SEPARATOR)
            .map_or(self.0.as_str(), |(_, rest)| rest)
    }

    /// Whether `other` is a strictly more specific name extending this one.
    ///
    /// This is a literal string-prefix test: `Foo` is an ancestor of
    /// `Foo/Core` but also of `FooBar`.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self != other && other.0.starts_with(self.0.as_str())
    }
}

impl fmt::Display for DependencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DependencyEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DependencyEntry {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> DependencyEntry {
        DependencyEntry::new(name).expect("non-empty")
    }

    #[test]
    fn test_from_raw_line_strips_marker_and_version() {
        let e = DependencyEntry::from_raw_line("- A/Core (1.0)").unwrap();
        assert_eq!(e.as_str(), "A/Core");

        let e = DependencyEntry::from_raw_line("B (= 2.3.1)").unwrap();
        assert_eq!(e.as_str(), "B");
    }

    #[test]
    fn test_from_raw_line_removes_nested_markers() {
        // Dependency lines under a pod are indented one level deeper
        let e = DependencyEntry::from_raw_line("- - GoogleUtilities/Logger (~> 7.0)").unwrap();
        assert_eq!(e.as_str(), "GoogleUtilities/Logger");
    }

    #[test]
    fn test_from_raw_line_rejects_empty() {
        assert!(DependencyEntry::from_raw_line("").is_none());
        assert!(DependencyEntry::from_raw_line("(1.0)").is_none());
        assert!(DependencyEntry::new("").is_none());
    }

    #[test]
    fn test_owner_and_subspec() {
        let e = entry("Firebase/Core/Analytics");
        assert_eq!(e.owner(), "Firebase");
        assert_eq!(e.subspec(), "Core/Analytics");

        let root = entry("Firebase");
        assert_eq!(root.owner(), "Firebase");
        assert_eq!(root.subspec(), "Firebase");
    }

    #[test]
    fn test_ancestor_is_string_prefix() {
        assert!(entry("A").is_ancestor_of(&entry("A/Core")));
        assert!(!entry("A/Core").is_ancestor_of(&entry("A")));
        assert!(!entry("A").is_ancestor_of(&entry("A")));
        // Not segment aware
        assert!(entry("Foo").is_ancestor_of(&entry("FooBar")));
    }
}
