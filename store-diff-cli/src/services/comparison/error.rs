use std::fmt;

use crate::api::{FetchError, SourceLabel};
use crate::diff::NormalizeError;

/// Why a comparison was aborted
#[derive(Debug)]
pub enum CompareError {
    /// A source could not be fetched or decoded
    SourceUnavailable(FetchError),
    /// A source contains a store entry that cannot be summarized
    MalformedEntry {
        source: SourceLabel,
        error: NormalizeError,
    },
}

impl CompareError {
    /// The source that caused the abort
    pub fn source_label(&self) -> SourceLabel {
        match self {
            CompareError::SourceUnavailable(err) => err.source,
            CompareError::MalformedEntry { source, .. } => *source,
        }
    }
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareError::SourceUnavailable(err) => {
                write!(f, "{} source unavailable: {}", err.source, err)
            }
            CompareError::MalformedEntry { source, error } => {
                write!(f, "{} source has a malformed {}", source, error)
            }
        }
    }
}

// Display already carries the inner message; the chain continues below it
impl std::error::Error for CompareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompareError::SourceUnavailable(err) => std::error::Error::source(err),
            CompareError::MalformedEntry { .. } => None,
        }
    }
}

impl From<FetchError> for CompareError {
    fn from(err: FetchError) -> Self {
        CompareError::SourceUnavailable(err)
    }
}
