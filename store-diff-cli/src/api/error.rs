//! Fetch failures

use super::models::SourceLabel;
use std::fmt;

/// A source could not be fetched or its body could not be decoded
#[derive(Debug)]
pub struct FetchError {
    pub source: SourceLabel,
    /// The full address that was requested
    pub address: String,
    pub kind: FetchErrorKind,
}

#[derive(Debug)]
pub enum FetchErrorKind {
    /// Transport-level failure (connect, TLS, body read)
    Request(reqwest::Error),
    /// The request did not complete within the configured timeout
    Timeout,
    /// The server answered with a non-success status
    Status(reqwest::StatusCode),
    /// Local file could not be read
    Io(std::io::Error),
    /// The body is not JSON or not a `{ "data": [...] }` document
    Decode(serde_json::Error),
}

impl FetchError {
    pub fn new(source: SourceLabel, address: impl Into<String>, kind: FetchErrorKind) -> Self {
        Self {
            source,
            address: address.into(),
            kind,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The underlying cause is exposed through `source()`, not repeated here
        match &self.kind {
            FetchErrorKind::Request(_) => write!(f, "request to {} failed", self.address),
            FetchErrorKind::Timeout => write!(f, "request to {} timed out", self.address),
            FetchErrorKind::Status(status) => {
                write!(f, "{} responded with status {}", self.address, status)
            }
            FetchErrorKind::Io(_) => write!(f, "failed to read {}", self.address),
            FetchErrorKind::Decode(_) => {
                write!(f, "{} did not return a valid store document", self.address)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            FetchErrorKind::Request(e) => Some(e),
            FetchErrorKind::Io(e) => Some(e),
            FetchErrorKind::Decode(e) => Some(e),
            FetchErrorKind::Timeout | FetchErrorKind::Status(_) => None,
        }
    }
}
