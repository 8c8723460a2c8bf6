//! Comparison models

use serde::Serialize;
use std::collections::HashSet;

use crate::api::models::{SourceLabel, StoreId};

/// A store reduced to its id and the names of its attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSummary {
    pub id: StoreId,
    /// Attribute keys in document order
    pub fields: Vec<String>,
}

impl StoreSummary {
    pub fn new(id: impl Into<StoreId>, fields: Vec<String>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// Membership index over the store ids of one source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierIndex {
    ids: HashSet<StoreId>,
}

impl IdentifierIndex {
    pub fn from_summaries(summaries: &[StoreSummary]) -> Self {
        Self {
            ids: summaries.iter().map(|s| s.id.clone()).collect(),
        }
    }

    pub fn contains(&self, id: &StoreId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

/// A store present in one source and absent from `missing_from`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingStore {
    pub store_id: StoreId,
    pub missing_from: SourceLabel,
}

/// Result of the one-sided pass over a single source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Stores of this source that the other source lacks, in scan order
    pub missing: Vec<MissingStore>,
    /// Every field name seen on any store of this source, first appearance order
    pub all_fields: Vec<String>,
}

/// The reconciled comparison handed to the reporter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FinalResult {
    /// Mock-only stores followed by prod-only stores
    pub stores: Vec<MissingStore>,
    /// Fields on mock stores that no prod store has
    pub fields: Vec<String>,
}

impl FinalResult {
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty() && self.fields.is_empty()
    }
}
