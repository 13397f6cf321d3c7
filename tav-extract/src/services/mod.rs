//! Service modules for the parse & extract stage
//!
//! Leaf to root: time slots → EAF parser → sequence assembler → vocabulary.
//! The hierarchy loader and file scanner are the input collaborators.

pub mod eaf_parser;
pub mod file_scanner;
pub mod hierarchy_loader;
pub mod sequence_assembler;
pub mod time_slots;
pub mod vocabulary;

pub use eaf_parser::{EafDocument, RawAnnotation, Tier};
pub use file_scanner::{FileScanner, ScanError};
pub use hierarchy_loader::{load_workbook, HierarchyBuilder, HierarchyError, HierarchyRow, DEFAULT_SHEET};
pub use sequence_assembler::SequenceAssembler;
pub use time_slots::TimeSlotTable;
pub use vocabulary::{
    categorize, ActionCategory, ActionContext, CategorizedActions, VocabularyBuilder,
    VocabularyStats, CATEGORY_KEYWORDS,
};
