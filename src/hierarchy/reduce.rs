//! Prefix elimination over hierarchical names.

/// Keep only the most specific names.
///
/// A name is dropped when another, different name in the same input starts
/// with it: `["A", "A/Core", "B"]` reduces to `["A/Core", "B"]`. Survivors
/// keep their input order. Exact duplicates do not drop each other, so
/// callers that want a set must deduplicate first.
///
/// The test is a literal string prefix, so `"Foo"` is also dropped in the
/// presence of `"FooBar"`.
pub fn reduce<T>(names: &[T]) -> Vec<T>
where
    T: AsRef<str> + Clone,
{
    names
        .iter()
        .filter(|name| {
            let name = name.as_ref();
            !names.iter().any(|other| {
                let other = other.as_ref();
                other != name && other.starts_with(name)
            })
        })
        .cloned()
        .collect()
}
