//! Data models for annotation extraction

pub mod annotation;
pub mod hierarchy;
pub mod sequence;

pub use annotation::{Annotation, COMPONENT_TIER, SUBTASK_TIER, TASK_TIER};
pub use hierarchy::{HierarchyMap, TaskHierarchy};
pub use sequence::ActionSequence;

/// Placeholder used when a task name or operator id cannot be determined
pub const UNKNOWN: &str = "Unknown";
