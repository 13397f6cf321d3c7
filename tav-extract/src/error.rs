//! Error types for per-document extraction
//!
//! Only these errors are surfaced to the batch driver as named failures.
//! Unresolved time slots and empty documents degrade silently instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-document extraction error
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Document is not a usable EAF file (unparsable, wrong root, no TIME_ORDER)
    #[error("Malformed document: {reason}")]
    MalformedDocument { reason: String },

    /// Alignable annotation without an ANNOTATION_VALUE node
    #[error("Annotation {annotation_id} on tier {tier} has no ANNOTATION_VALUE")]
    MissingAnnotationValue { annotation_id: String, tier: String },

    /// Document could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ExtractError::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// Failure category for batch reporting
    pub fn kind(&self) -> FailureKind {
        match self {
            ExtractError::MalformedDocument { .. } => FailureKind::MalformedDocument,
            ExtractError::MissingAnnotationValue { .. } => FailureKind::MissingAnnotationValue,
            ExtractError::Io(_) => FailureKind::Io,
        }
    }
}

impl From<roxmltree::Error> for ExtractError {
    fn from(err: roxmltree::Error) -> Self {
        ExtractError::malformed(err.to_string())
    }
}

/// Serializable failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    MalformedDocument,
    MissingAnnotationValue,
    Io,
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
