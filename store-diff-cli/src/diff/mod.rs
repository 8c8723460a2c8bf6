//! Store and field comparison
//!
//! Pure computation over already-fetched documents:
//! normalize -> one-sided diff per source -> reconcile.

pub mod differ;
pub mod models;
pub mod normalize;
pub mod reconcile;

pub use differ::diff_one_sided;
pub use models::{FinalResult, IdentifierIndex, StoreSummary};
pub use normalize::{NormalizeError, normalize};
pub use reconcile::{diff_fields, merge_store_diffs, retain_stores};
