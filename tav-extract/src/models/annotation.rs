//! Annotation records extracted from EAF tiers

use serde::{Deserialize, Serialize};

/// Tier carrying the overall task label
pub const TASK_TIER: &str = "Task";
/// Tier carrying subtask segments
pub const SUBTASK_TIER: &str = "Subtask";
/// Tier carrying subtask component segments
pub const COMPONENT_TIER: &str = "subtask_Component";

/// One alignable annotation with resolved times
///
/// Times are milliseconds from the start of the media. `duration` is
/// `end_time - start_time`, saturating at the `i64` bounds; it is only
/// guaranteed non-negative when both time slots resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Owning tier's TIER_ID
    pub tier: String,
    /// ANNOTATION_VALUE text
    pub value: String,
    pub start_time: i64,
    pub end_time: i64,
    pub duration: i64,
    pub annotation_id: String,
    /// Owning tier's PARENT_REF, if it declares one
    pub parent_id: Option<String>,
}

impl Annotation {
    /// Create annotation, deriving duration from the two offsets
    pub fn new(
        tier: impl Into<String>,
        value: impl Into<String>,
        start_time: i64,
        end_time: i64,
        annotation_id: impl Into<String>,
        parent_id: Option<String>,
    ) -> Self {
        Self {
            tier: tier.into(),
            value: value.into(),
            start_time,
            end_time,
            duration: end_time.saturating_sub(start_time),
            annotation_id: annotation_id.into(),
            parent_id,
        }
    }

    /// True if this annotation sits on the given tier
    pub fn is_on_tier(&self, tier: &str) -> bool {
        self.tier == tier
    }
}
