//! Property-based tests for entry reduction and manifest diffing.
//!
//! Entries are drawn from a small alphabet so that shared prefixes and
//! nested subspecs show up often.

use proptest::prelude::*;
use podlock_tools::{parse_lockfile_str, reduce, DiffEngine, LockManifest};

fn entry_name() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-C][a-c]{0,2}", 1..4).prop_map(|segments| segments.join("/"))
}

fn distinct_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(entry_name(), 0..24).prop_map(|set| set.into_iter().collect())
}

fn manifest() -> impl Strategy<Value = LockManifest> {
    prop::collection::vec(entry_name(), 0..24).prop_map(|names| {
        let mut content = String::from("PODS:\n");
        for name in names {
            content.push_str(&format!("  - {name} (1.0)\n"));
        }
        content.push('\n');
        parse_lockfile_str(&content).expect("generated manifest has a PODS section")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn reduce_is_idempotent(names in distinct_names()) {
        let once = reduce(&names);
        prop_assert_eq!(reduce(&once), once);
    }

    #[test]
    fn reduce_is_subset(names in distinct_names()) {
        for survivor in reduce(&names) {
            prop_assert!(names.contains(&survivor));
        }
    }

    #[test]
    fn reduce_leaves_no_prefixes(names in distinct_names()) {
        let reduced = reduce(&names);
        for a in &reduced {
            for b in &reduced {
                if a != b {
                    prop_assert!(!b.starts_with(a.as_str()), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn reduce_keeps_input_order(names in distinct_names()) {
        let reduced = reduce(&names);
        let positions: Vec<usize> = reduced
            .iter()
            .map(|r| names.iter().position(|n| n == r).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn diff_is_symmetric(old in manifest(), new in manifest()) {
        let engine = DiffEngine::new();
        let forward = engine.diff_manifests(&old, &new);
        let backward = engine.diff_manifests(&new, &old);
        prop_assert_eq!(&forward.only_in_old, &backward.only_in_new);
        prop_assert_eq!(&forward.only_in_new, &backward.only_in_old);
    }

    #[test]
    fn diff_is_reflexive(lock in manifest()) {
        let result = DiffEngine::new().diff_manifests(&lock, &lock);
        prop_assert!(result.is_equivalent());
    }

    #[test]
    fn parse_arbitrary_text_doesnt_panic(s in "\\PC{0,500}") {
        if let Ok(manifest) = parse_lockfile_str(&s) {
            let _ = manifest.reduced_entries();
        }
    }
}
