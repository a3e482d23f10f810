//! Keyed grouping between map and reduce stages
//!
//! This is the only barrier inside a round: every emitted pair has to be
//! grouped before any reducer runs.

use indexmap::IndexMap;
use std::hash::Hash;

/// Group values by key.
///
/// Keys come out in first-encounter order and each key's values keep their
/// insertion order, so repeated runs over the same input group identically.
pub fn group_by_key<K, V, I>(pairs: I) -> Vec<(K, Vec<V>)>
where
    K: Hash + Eq,
    I: IntoIterator<Item = (K, V)>,
{
    let mut groups: IndexMap<K, Vec<V>> = IndexMap::new();
    for (key, value) in pairs {
        groups.entry(key).or_default().push(value);
    }
    groups.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_key_preserves_order() {
        let pairs = vec![
            ("b", 1),
            ("a", 2),
            ("b", 3),
            ("c", 4),
            ("a", 5),
        ];
        let groups = group_by_key(pairs);
        assert_eq!(
            groups,
            vec![("b", vec![1, 3]), ("a", vec![2, 5]), ("c", vec![4])]
        );
    }

    #[test]
    fn test_group_by_key_empty() {
        let groups: Vec<(String, Vec<u32>)> = group_by_key(Vec::new());
        assert!(groups.is_empty());
    }

    #[test]
    fn test_group_by_key_exact_equality() {
        // No normalization of keys
        let groups = group_by_key(vec![("README.md", 1), ("readme.md", 2)]);
        assert_eq!(groups.len(), 2);
    }
}
