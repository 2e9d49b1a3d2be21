//! `pod` declaration generation.
//!
//! Given the entries of a lock manifest and the owners a caller cares about,
//! produce one declaration per owner pointing at either a local path or a
//! remote branch.

mod formatter;
mod strategy;

pub use formatter::{format_entry, subspecs};
pub use strategy::{Resolution, Strategy};

use crate::hierarchy::{group, reduce};
use crate::model::DependencyEntry;

/// Render declarations for every owner that has entries in `entries`.
///
/// Owners are processed in the given order. Each owner's entries are
/// selected with a string-prefix match and reduced to their most specific
/// names before rendering; owners without any entries are skipped.
pub fn generate_entries(
    entries: &[DependencyEntry],
    owners: &[(String, Resolution)],
) -> Vec<String> {
    owners
        .iter()
        .filter_map(|(owner, resolution)| {
            let grouped = reduce(&group(owner, entries));
            if grouped.is_empty() {
                tracing::debug!("No entries for owner '{owner}', skipping");
                return None;
            }
            Some(format_entry(owner, &grouped, resolution))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<DependencyEntry> {
        names
            .iter()
            .filter_map(|n| DependencyEntry::new(*n))
            .collect()
    }

    fn path_owner(owner: &str, path: &str) -> (String, Resolution) {
        (
            owner.to_string(),
            Resolution::Path {
                path: path.to_string(),
            },
        )
    }

    #[test]
    fn test_generate_reduces_each_owner() {
        let all = entries(&["A", "A/Core", "A/Net", "B"]);
        let out = generate_entries(&all, &[path_owner("A", "../A"), path_owner("B", "../B")]);
        assert_eq!(
            out,
            [
                "pod 'A', :path => '../A', :subspecs => [\n  'Core',\n  'Net'\n]",
                "pod 'B', :path => '../B'",
            ]
        );
    }

    #[test]
    fn test_generate_skips_owners_without_entries() {
        let all = entries(&["A"]);
        let out = generate_entries(&all, &[path_owner("Z", "../Z"), path_owner("A", "../A")]);
        assert_eq!(out, ["pod 'A', :path => '../A'"]);
    }

    #[test]
    fn test_generate_follows_owner_order() {
        let all = entries(&["A", "B"]);
        let out = generate_entries(&all, &[path_owner("B", "b"), path_owner("A", "a")]);
        assert_eq!(out, ["pod 'B', :path => 'b'", "pod 'A', :path => 'a'"]);
    }
}
