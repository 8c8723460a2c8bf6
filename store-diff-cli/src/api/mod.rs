//! Source API access
//!
//! Fetching of raw store documents from the mock and production sources, plus the
//! wire models those documents decode into.

pub mod address;
pub mod client;
pub mod error;
pub mod models;

pub use client::{ClientConfig, SourceClient};
pub use error::FetchError;
pub use models::{RawDocument, SourceLabel};
