//! Order-preserving deduplication

use std::collections::HashSet;

/// Keep the first occurrence of every string, in input order
///
/// Earlier tiers carry more likely candidates, so a username produced by
/// several tiers keeps the position of its first producer.
pub fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let result = dedup_preserving_order(owned(&[
            "tommychan",
            "tommyctm",
            "tommychan",
            "chantaiman",
            "tommyctm",
        ]));
        assert_eq!(result, owned(&["tommychan", "tommyctm", "chantaiman"]));
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_preserving_order(Vec::new()).is_empty());
    }
}
