//! Reconciliation of the two one-sided results

use std::collections::HashSet;

use super::models::{MissingStore, StoreSummary};

/// Drop the placeholders the normalizer left for non-store entries
pub fn retain_stores(normalized: Vec<Option<StoreSummary>>) -> Vec<StoreSummary> {
    normalized.into_iter().flatten().collect()
}

/// All of `a`'s missing stores followed by all of `b`'s, each in its own order
pub fn merge_store_diffs(a: &[MissingStore], b: &[MissingStore]) -> Vec<MissingStore> {
    a.iter().chain(b).cloned().collect()
}

/// Fields of `fields_of_a` that `fields_of_b` does not contain, in `a`'s order.
///
/// This is `A - B` only, not the symmetric difference.
pub fn diff_fields(fields_of_a: &[String], fields_of_b: &HashSet<String>) -> Vec<String> {
    fields_of_a
        .iter()
        .filter(|field| !fields_of_b.contains(*field))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{SourceLabel, StoreId};

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn missing(id: &str, from: SourceLabel) -> MissingStore {
        MissingStore {
            store_id: StoreId::from(id),
            missing_from: from,
        }
    }

    #[test]
    fn test_retain_stores() {
        let normalized = vec![
            None,
            Some(StoreSummary::new("1", vec![])),
            None,
            Some(StoreSummary::new("2", vec![])),
        ];

        let stores = retain_stores(normalized);

        let ids: Vec<&str> = stores.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_merge_keeps_a_before_b() {
        let a = vec![missing("1", SourceLabel::Prod), missing("3", SourceLabel::Prod)];
        let b = vec![missing("2", SourceLabel::Mock)];

        let merged = merge_store_diffs(&a, &b);

        assert_eq!(
            merged,
            vec![
                missing("1", SourceLabel::Prod),
                missing("3", SourceLabel::Prod),
                missing("2", SourceLabel::Mock),
            ]
        );
        assert!(merge_store_diffs(&[], &[]).is_empty());
    }

    #[test]
    fn test_diff_fields_preserves_order() {
        let a = fields(&["z", "name", "a", "city"]);
        let b: HashSet<String> = fields(&["name", "city"]).into_iter().collect();

        assert_eq!(diff_fields(&a, &b), vec!["z", "a"]);
    }

    #[test]
    fn test_diff_fields_is_asymmetric() {
        let a = fields(&["x", "y"]);
        let b = fields(&["y", "z"]);
        let a_set: HashSet<String> = a.iter().cloned().collect();
        let b_set: HashSet<String> = b.iter().cloned().collect();

        let a_minus_b = diff_fields(&a, &b_set);
        let b_minus_a = diff_fields(&b, &a_set);

        assert_eq!(a_minus_b, vec!["x"]);
        assert_eq!(b_minus_a, vec!["z"]);

        let union: HashSet<String> = a_minus_b.into_iter().chain(b_minus_a).collect();
        let symmetric: HashSet<String> = a_set.symmetric_difference(&b_set).cloned().collect();
        assert_eq!(union, symmetric);
    }

    #[test]
    fn test_diff_fields_empty_a() {
        let b: HashSet<String> = fields(&["x"]).into_iter().collect();
        assert!(diff_fields(&[], &b).is_empty());
    }
}
