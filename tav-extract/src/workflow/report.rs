//! Batch processing report
//!
//! Each document either lands in `processed` or becomes one
//! `DocumentFailure`; a failure never stops the batch.

use crate::error::{ExtractError, FailureKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One document that could not be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub path: PathBuf,
    pub kind: FailureKind,
    pub message: String,
}

impl DocumentFailure {
    pub fn new(path: PathBuf, error: &ExtractError) -> Self {
        Self {
            path,
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    /// File name only, for log lines and console output
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Outcome of one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub documents_discovered: usize,
    pub processed: Vec<PathBuf>,
    pub failures: Vec<DocumentFailure>,
}

impl BatchReport {
    /// Start an empty report
    pub fn begin() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            documents_discovered: 0,
            processed: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn record_success(&mut self, path: PathBuf) {
        self.processed.push(path);
    }

    pub fn record_failure(&mut self, path: PathBuf, error: &ExtractError) {
        self.failures.push(DocumentFailure::new(path, error));
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Wall time in milliseconds, once finished
    pub fn elapsed_ms(&self) -> Option<i64> {
        self.finished_at
            .map(|end| (end - self.started_at).num_milliseconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_records_kind_and_name() {
        let mut report = BatchReport::begin();
        let error = ExtractError::MissingAnnotationValue {
            annotation_id: "a7".to_string(),
            tier: "Subtask".to_string(),
        };
        report.record_failure(PathBuf::from("annotations/OT19/GH010406.eaf"), &error);
        report.record_success(PathBuf::from("annotations/OT19/GH010407.eaf"));
        report.finish();

        assert!(!report.is_clean());
        assert_eq!(report.failures[0].kind, FailureKind::MissingAnnotationValue);
        assert_eq!(report.failures[0].file_name(), "GH010406.eaf");
        assert!(report.failures[0].message.contains("a7"));
        assert!(report.elapsed_ms().unwrap() >= 0);
    }

    #[test]
    fn test_serializes_failure_kind_snake_case() {
        let failure = DocumentFailure::new(
            PathBuf::from("x.eaf"),
            &ExtractError::MalformedDocument {
                reason: "missing TIME_ORDER element".to_string(),
            },
        );
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["kind"], "malformed_document");
    }
}
