//! Batch workflow over a directory of EAF files
//!
//! Sequential per-document processing: scan → parse → assemble → aggregate,
//! with per-document failures collected instead of aborting the run.

pub mod pipeline;
pub mod report;

pub use pipeline::Stage1Pipeline;
pub use report::{BatchReport, DocumentFailure};
