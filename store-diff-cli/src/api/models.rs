//! Source document models
//!
//! Documents follow a JSON:API-like shape: `{ "data": [ { "id", "type", "attributes" } ] }`.
//! Only entries whose `type` is `"stores"` are of interest; everything else is kept
//! as [`RawEntry::Other`] so the normalizer can skip it without guessing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The `type` discriminator that marks an entry as a store
pub const STORE_KIND: &str = "stores";

/// One of the two compared sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLabel {
    Mock,
    Prod,
}

impl SourceLabel {
    /// The source on the other side of the comparison
    pub fn other(self) -> Self {
        match self {
            SourceLabel::Mock => SourceLabel::Prod,
            SourceLabel::Prod => SourceLabel::Mock,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceLabel::Mock => "mock",
            SourceLabel::Prod => "prod",
        }
    }
}

impl fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Store identifier
///
/// String ids are kept verbatim and numeric ids use their decimal text, so `1`,
/// `1.0` and `"1"` refer to the same store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(String);

impl StoreId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id from a raw JSON value. Only strings and numbers are accepted.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(number_text(n))),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoreId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Largest integer an f64 holds exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Decimal text of a JSON number, with integral floats written without a fraction
fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

/// A top-level source document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDocument {
    pub data: Vec<RawEntry>,
}

/// An entry of a source document, discriminated by its `type`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "EntryRepr")]
pub enum RawEntry {
    Store(StoreEntry),
    /// Any entry that is not a store. `kind` is the `type` string when there was one.
    Other { kind: Option<String> },
}

/// A store entry as it appeared on the wire
///
/// `id` and `attributes` stay loosely typed here; validating them is the
/// normalizer's job so a bad entry can be reported by position and id.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreEntry {
    pub id: Option<Value>,
    pub attributes: Option<Value>,
}

#[derive(Deserialize)]
struct EntryRepr {
    #[serde(rename = "type", default)]
    kind: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    attributes: Option<Value>,
}

impl From<EntryRepr> for RawEntry {
    fn from(repr: EntryRepr) -> Self {
        let kind = repr.kind.as_ref().and_then(Value::as_str);
        if kind == Some(STORE_KIND) {
            RawEntry::Store(StoreEntry {
                id: repr.id,
                attributes: repr.attributes,
            })
        } else {
            RawEntry::Other {
                kind: kind.map(str::to_string),
            }
        }
    }
}

impl RawEntry {
    pub fn is_store(&self) -> bool {
        matches!(self, RawEntry::Store(_))
    }
}
