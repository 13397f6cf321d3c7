//! Task → subtask → component hierarchy from the coding manual

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Hierarchical structure of one task
///
/// Subtasks and their components keep spreadsheet order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskHierarchy {
    pub task_name: String,
    /// Subtask name → ordered component names
    pub subtasks: IndexMap<String, Vec<String>>,
}

impl TaskHierarchy {
    /// Create hierarchy with no subtasks
    pub fn new(task_name: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            subtasks: IndexMap::new(),
        }
    }

    /// Number of subtasks
    pub fn subtask_count(&self) -> usize {
        self.subtasks.len()
    }

    /// Components of a subtask, if the subtask exists
    pub fn components(&self, subtask: &str) -> Option<&[String]> {
        self.subtasks.get(subtask).map(Vec::as_slice)
    }
}

/// All hierarchies keyed by task name, in first-seen order
pub type HierarchyMap = IndexMap<String, TaskHierarchy>;
