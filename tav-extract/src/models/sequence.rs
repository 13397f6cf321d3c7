//! Per-document action sequence

use crate::models::Annotation;
use serde::{Deserialize, Serialize};

/// Sequence of actions performed by one operator in one video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSequence {
    /// Operator (OT) identifier from the tier PARTICIPANT attribute
    pub ot_id: String,
    /// Value of the first Task-tier annotation, or "Unknown"
    pub task_name: String,
    /// Base filename of the linked media
    pub video_file: String,
    pub task_annotations: Vec<Annotation>,
    pub subtask_annotations: Vec<Annotation>,
    pub component_annotations: Vec<Annotation>,
    /// Max end time across every annotation of the document (ms)
    pub total_duration: i64,
}

impl ActionSequence {
    pub fn num_subtasks(&self) -> usize {
        self.subtask_annotations.len()
    }

    pub fn num_components(&self) -> usize {
        self.component_annotations.len()
    }
}
