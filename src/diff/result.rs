//! Diff result structures.

use crate::model::DependencyEntry;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Result of comparing two lock manifests.
///
/// Both sides hold reduced, optionally owner-filtered entries in the order
/// they appear in their manifest. They are disjoint by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct DiffResult {
    /// Summary statistics
    pub summary: DiffSummary,
    /// Entries present only in the old manifest
    pub only_in_old: IndexSet<DependencyEntry>,
    /// Entries present only in the new manifest
    pub only_in_new: IndexSet<DependencyEntry>,
    /// Owners the comparison was restricted to (empty means all)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_owners: Vec<String>,
}

impl DiffResult {
    /// Build a result from the two difference sets
    pub fn new(
        only_in_old: IndexSet<DependencyEntry>,
        only_in_new: IndexSet<DependencyEntry>,
    ) -> Self {
        let summary = DiffSummary {
            removed: only_in_old.len(),
            added: only_in_new.len(),
            ..DiffSummary::default()
        };
        Self {
            summary,
            only_in_old,
            only_in_new,
            allowed_owners: Vec::new(),
        }
    }

    /// Record how many entries each side had before differencing
    pub fn with_totals(mut self, old_total: usize, new_total: usize) -> Self {
        self.summary.old_total = old_total;
        self.summary.new_total = new_total;
        self
    }

    /// Record the owner filter the result was computed with
    pub fn with_allowed_owners(mut self, owners: Vec<String>) -> Self {
        self.allowed_owners = owners;
        self
    }

    /// Both manifests resolve to the same set of entries
    #[must_use]
    pub fn is_equivalent(&self) -> bool {
        self.only_in_old.is_empty() && self.only_in_new.is_empty()
    }

    /// Total number of differing entries
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.only_in_old.len() + self.only_in_new.len()
    }
}

/// Summary counts for a diff
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Entries considered from the old manifest
    pub old_total: usize,
    /// Entries considered from the new manifest
    pub new_total: usize,
    pub removed: usize,
    pub added: usize,
}
