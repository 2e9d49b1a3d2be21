//! Rendering of `pod` declarations.

use super::Resolution;
use crate::model::HIERARCHY_SEPARATOR;
use indexmap::IndexSet;

/// Distinct subspec names for a group of entries, in first-seen order.
///
/// Each name loses its first segment (`A/Core/Detail` becomes `Core/Detail`);
/// a name without a separator is kept whole.
pub fn subspecs<T: AsRef<str>>(names: &[T]) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            name.split_once(HIERARCHY_SEPARATOR)
                .map_or(name, |(_, rest)| rest)
                .to_string()
        })
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Render one owner's declaration.
///
/// With at most one distinct subspec the declaration is a single line:
///
/// ```text
/// pod 'A', :path => '../A'
/// ```
///
/// Otherwise every subspec is listed:
///
/// ```text
/// pod 'A', :path => '../A', :subspecs => [
///   'Core',
///   'Net'
/// ]
/// ```
pub fn format_entry<T: AsRef<str>>(owner: &str, names: &[T], resolution: &Resolution) -> String {
    let specs = subspecs(names);
    let head = format!("pod '{owner}', {}", resolution.source_options());
    if specs.len() <= 1 {
        return head;
    }

    let owner_prefix = format!("{owner}{HIERARCHY_SEPARATOR}");
    let items: Vec<String> = specs
        .iter()
        .map(|spec| format!("  '{}'", spec.replace(&owner_prefix, "")))
        .collect();

    format!("{head}, :subspecs => [\n{}\n]", items.join(",\n"))
}
