//! One-sided store/field diff
//!
//! Stores of a single source are not assumed to share a field set, so the field
//! union is built across every store rather than read off the first one.

use std::collections::HashSet;

use super::models::{DiffResult, IdentifierIndex, MissingStore, StoreSummary};
use crate::api::models::SourceLabel;

/// Ordered set of field names, in order of first appearance
#[derive(Debug, Default)]
struct FieldUnion {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl FieldUnion {
    fn extend<'a>(&mut self, fields: impl IntoIterator<Item = &'a String>) {
        for field in fields {
            if self.seen.insert(field.clone()) {
                self.order.push(field.clone());
            }
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.order
    }
}

/// Collect the stores of `self_label`'s source that `other_ids` lacks, and the
/// union of all field names over `summaries`.
///
/// Ids are expected to be unique within a source. A repeated id that is missing
/// from the other source is reported once per occurrence.
pub fn diff_one_sided(
    summaries: &[StoreSummary],
    self_ids: &IdentifierIndex,
    other_ids: &IdentifierIndex,
    self_label: SourceLabel,
) -> DiffResult {
    let missing_from = self_label.other();
    let mut union = FieldUnion::default();
    let mut missing = Vec::new();

    for summary in summaries {
        union.extend(&summary.fields);

        if self_ids.contains(&summary.id) && !other_ids.contains(&summary.id) {
            missing.push(MissingStore {
                store_id: summary.id.clone(),
                missing_from,
            });
        }
    }

    DiffResult {
        missing,
        all_fields: union.into_vec(),
    }
}
