//! Stage 1 pipeline: parse & extract
//!
//! Owns the task hierarchies, the vocabulary and the assembled sequences.
//! Documents are processed one at a time; each either yields a sequence or
//! a per-document failure.
//!
//! # Error Handling
//! - Per-document isolation: a malformed file is logged and recorded in the
//!   `BatchReport`, and the batch continues
//! - Only a missing/invalid annotations root fails `process_directory` itself
//!
//! # Example
//! ```rust,ignore
//! let hierarchies = load_workbook(Path::new("coding manual.xlsx"), "Sheet1")?;
//! let mut pipeline = Stage1Pipeline::new(hierarchies);
//! let report = pipeline.process_directory(Path::new("annotations"))?;
//! ```

use super::report::BatchReport;
use crate::error::ExtractResult;
use crate::models::{ActionSequence, HierarchyMap};
use crate::services::{EafDocument, FileScanner, ScanError, SequenceAssembler, VocabularyBuilder};
use std::path::Path;
use tracing::{debug, info, warn};

/// Parse & extract pipeline
pub struct Stage1Pipeline {
    hierarchies: HierarchyMap,
    vocabulary: VocabularyBuilder,
    sequences: Vec<ActionSequence>,
    scanner: FileScanner,
}

impl Stage1Pipeline {
    /// Create pipeline over a loaded hierarchy
    pub fn new(hierarchies: HierarchyMap) -> Self {
        Self {
            hierarchies,
            vocabulary: VocabularyBuilder::new(),
            sequences: Vec::new(),
            scanner: FileScanner::new(),
        }
    }

    /// Replace the directory scanner
    pub fn with_scanner(mut self, scanner: FileScanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Process one parsed document
    pub fn process_document(&mut self, document: &EafDocument) -> ExtractResult<&ActionSequence> {
        let sequence = SequenceAssembler::assemble(document, &mut self.vocabulary)?;

        if !self.hierarchies.is_empty() && !self.hierarchies.contains_key(&sequence.task_name) {
            debug!(
                task = %sequence.task_name,
                "Task not listed in the encoding hierarchy"
            );
        }

        self.sequences.push(sequence);
        let index = self.sequences.len() - 1;
        Ok(&self.sequences[index])
    }

    /// Read, parse and process one EAF file
    pub fn process_file(&mut self, path: &Path) -> ExtractResult<&ActionSequence> {
        let document = EafDocument::from_path(path)?;
        self.process_document(&document)
    }

    /// Process every EAF file under `root`
    ///
    /// Failures are logged with the file name and collected into the report.
    ///
    /// # Errors
    /// Only if `root` is missing or not a directory.
    pub fn process_directory(&mut self, root: &Path) -> Result<BatchReport, ScanError> {
        let mut report = BatchReport::begin();
        let files = self.scanner.scan(root)?;
        report.documents_discovered = files.len();

        info!("Processing {} EAF files from {}", files.len(), root.display());

        for path in files {
            debug!("Processing: {}", path.display());
            match self.process_file(&path) {
                Ok(_) => report.record_success(path),
                Err(e) => {
                    warn!(
                        "Error processing {}: {}",
                        path.file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string()),
                        e
                    );
                    report.record_failure(path, &e);
                }
            }
        }

        report.finish();

        info!(
            processed = report.processed.len(),
            failed = report.failures.len(),
            "Batch complete"
        );

        Ok(report)
    }

    pub fn hierarchies(&self) -> &HierarchyMap {
        &self.hierarchies
    }

    pub fn sequences(&self) -> &[ActionSequence] {
        &self.sequences
    }

    pub fn vocabulary(&self) -> &VocabularyBuilder {
        &self.vocabulary
    }
}
