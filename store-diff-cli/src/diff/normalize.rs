//! Raw entry normalization

use serde_json::Value;
use std::fmt;

use super::models::StoreSummary;
use crate::api::models::{RawEntry, StoreEntry, StoreId};

/// A store entry that cannot be summarized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    MalformedEntry {
        /// Position of the entry in the document's `data` array
        index: usize,
        /// The entry's id, when it had a usable one
        id: Option<StoreId>,
        reason: MalformedReason,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    MissingId,
    InvalidId,
    MissingAttributes,
    AttributesNotObject,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::MissingId => write!(f, "missing id"),
            MalformedReason::InvalidId => write!(f, "id is neither a string nor a number"),
            MalformedReason::MissingAttributes => write!(f, "missing attributes"),
            MalformedReason::AttributesNotObject => write!(f, "attributes is not an object"),
        }
    }
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::MalformedEntry { index, id, reason } => match id {
                Some(id) => write!(f, "store entry {} (id {}): {}", index, id, reason),
                None => write!(f, "store entry {}: {}", index, reason),
            },
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Summarize every store entry, keeping a `None` in place of non-store entries.
///
/// The output has the same length as `entries`.
pub fn normalize(entries: &[RawEntry]) -> Result<Vec<Option<StoreSummary>>, NormalizeError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            RawEntry::Store(store) => summarize(index, store).map(Some),
            RawEntry::Other { kind } => {
                log::trace!(
                    "Skipping entry {} of type {}",
                    index,
                    kind.as_deref().unwrap_or("<none>")
                );
                Ok(None)
            }
        })
        .collect()
}

fn summarize(index: usize, store: &StoreEntry) -> Result<StoreSummary, NormalizeError> {
    let malformed = |id: Option<StoreId>, reason| NormalizeError::MalformedEntry { index, id, reason };

    let id = match &store.id {
        None => return Err(malformed(None, MalformedReason::MissingId)),
        Some(raw) => StoreId::from_json(raw).ok_or(malformed(None, MalformedReason::InvalidId))?,
    };

    let fields = match &store.attributes {
        None => return Err(malformed(Some(id), MalformedReason::MissingAttributes)),
        Some(Value::Object(attributes)) => attributes.keys().cloned().collect(),
        Some(_) => return Err(malformed(Some(id), MalformedReason::AttributesNotObject)),
    };

    Ok(StoreSummary::new(id, fields))
}
