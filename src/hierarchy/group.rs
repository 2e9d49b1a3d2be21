//! Owner grouping.

/// Select the names that belong to `owner`, in encountered order.
///
/// Membership is a plain string prefix test, so owner `"A"` also collects
/// `"AB/Core"`.
pub fn group<T>(owner: &str, names: &[T]) -> Vec<T>
where
    T: AsRef<str> + Clone,
{
    names
        .iter()
        .filter(|name| name.as_ref().starts_with(owner))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_selects_owner_entries() {
        let names = ["A/Core", "B", "A/Net", "C/Core"];
        assert_eq!(group("A", &names), ["A/Core", "A/Net"]);
        assert_eq!(group("B", &names), ["B"]);
    }

    #[test]
    fn test_group_unknown_owner_is_empty() {
        let names = ["A/Core", "B"];
        assert!(group("Z", &names).is_empty());
    }

    #[test]
    fn test_group_uses_string_prefix() {
        let names = ["A/Core", "AB/Core"];
        assert_eq!(group("A", &names), ["A/Core", "AB/Core"]);
    }
}
